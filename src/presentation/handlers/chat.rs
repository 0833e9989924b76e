use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::application::ports::GenerativeBackend;
use crate::application::services::chat_prompt;
use crate::domain::GenerationConfig;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::api_error::ApiError;
use super::payload::present;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub legal_context: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn chat_handler<B>(
    State(state): State<AppState<B>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError>
where
    B: GenerativeBackend + 'static,
{
    let Json(request) = payload?;

    let api_key = state.resolve_api_key(request.api_key.as_deref()).ok_or_else(|| {
        ApiError::BadRequest(
            "API key is required. Set GEMINI_API_KEY in the server environment.".to_string(),
        )
    })?;

    let message = present(request.message)
        .ok_or_else(|| ApiError::BadRequest("Message is required.".to_string()))?;

    tracing::debug!(prompt = %sanitize_prompt(&message), "Processing chat message");

    let prompt = chat_prompt(&message, request.legal_context.as_deref());
    let generation = state
        .backend
        .generate(&api_key, &prompt, &GenerationConfig::default())
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    tracing::info!(model = %generation.model_id, "Chat response generated");
    Ok(Json(ChatResponse {
        text: generation.text,
    }))
}
