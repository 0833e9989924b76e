use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::application::ports::GenerativeBackend;
use crate::application::services::{clean_generated_content, generation_prompt};
use crate::domain::{DocumentKind, GenerationConfig};
use crate::presentation::state::AppState;

use super::api_error::ApiError;
use super::payload::present;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn generate_handler<B>(
    State(state): State<AppState<B>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError>
where
    B: GenerativeBackend + 'static,
{
    let Json(request) = payload?;

    let (Some(kind), Some(title), Some(description)) = (
        present(request.kind),
        present(request.title),
        present(request.description),
    ) else {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    };

    let api_key = state
        .resolve_api_key(request.api_key.as_deref())
        .ok_or_else(|| {
            ApiError::BadRequest("API key required on server. Set GEMINI_API_KEY.".to_string())
        })?;

    let kind = DocumentKind::parse(&kind);
    let prompt = generation_prompt(kind, &title, &description);
    let generation = state
        .backend
        .generate(&api_key, &prompt, &GenerationConfig::default())
        .await
        .map_err(|e| ApiError::Upstream(format!("Failed to generate document: {e}")))?;

    let content = clean_generated_content(&generation.text);
    tracing::info!(?kind, model = %generation.model_id, chars = content.len(), "Document generated");

    Ok(Json(GenerateResponse { content }))
}
