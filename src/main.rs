use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use lexaid::application::services::{GenerationService, LibraryService, TextExtractionService};
use lexaid::domain::build_candidate_list;
use lexaid::infrastructure::llm::create_gemini_client;
use lexaid::infrastructure::observability::{TracingConfig, init_tracing};
use lexaid::infrastructure::storage::LocalLibraryStore;
use lexaid::infrastructure::text_processing::{ContentStreamExtractor, SimplePdfExtractor};
use lexaid::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let (environment, settings) = Settings::load_from_env().context("failed to load settings")?;
    init_tracing(&TracingConfig::new(environment.as_str(), settings.logging.json));
    tracing::debug!(?settings, "Settings loaded");

    if settings.gemini.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; requests must carry their own apiKey");
    }

    let extraction_timeout = settings.extraction.timeout();
    let extractor = Arc::new(TextExtractionService::new(
        Arc::new(SimplePdfExtractor::new(extraction_timeout)),
        Arc::new(ContentStreamExtractor::new(extraction_timeout)),
        settings.extraction.fallback_min_chars,
    ));

    let gemini = Arc::new(create_gemini_client(&settings.gemini)?);
    let candidates = build_candidate_list(
        settings.gemini.model.as_deref(),
        &settings.gemini.fallback_models,
    );
    tracing::info!(
        candidates = ?candidates.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
        discovery = settings.gemini.discovery_enabled,
        "Model candidates configured"
    );
    let backend = Arc::new(GenerationService::new(
        gemini,
        candidates,
        settings.gemini.invocation_timeout(),
        settings.gemini.discovery_enabled,
    ));

    let store = LocalLibraryStore::new(settings.library.directory.clone())
        .with_context(|| format!("failed to open library at {}", settings.library.directory.display()))?;
    let library = Arc::new(LibraryService::new(
        Arc::new(store),
        Arc::clone(&extractor),
        settings.library.public_url_prefix.clone(),
        settings.library.snippet_chars,
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;

    let state = AppState {
        backend,
        extractor,
        library,
        settings: Arc::new(settings),
    };
    let router = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, %environment, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
