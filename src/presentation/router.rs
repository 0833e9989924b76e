use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::GenerativeBackend;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, chat_handler, generate_handler, health_handler, library_list_handler,
    library_upload_handler, translate_handler,
};
use crate::presentation::state::AppState;

const BODY_LIMIT_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn create_router<B>(state: AppState<B>) -> Router
where
    B: GenerativeBackend + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_file_bytes = state.settings.extraction.max_file_size_bytes();
    let body_limit = max_file_bytes / 3 * 4 + BODY_LIMIT_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler::<B>))
        .route("/api/documents/analyze", post(analyze_handler::<B>))
        .route("/api/documents/generate", post(generate_handler::<B>))
        .route("/api/documents/translate", post(translate_handler::<B>))
        .route("/api/library/upload", post(library_upload_handler::<B>))
        .route("/api/library/list", get(library_list_handler::<B>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
