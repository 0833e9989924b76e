use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::application::ports::GenerativeBackend;
use crate::application::services::{analysis_prompt, interpret_analysis};
use crate::domain::{ContentType, GenerationConfig, StructuredAnalysis};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::api_error::ApiError;
use super::payload::{decode_document, present};

const DEFAULT_FILE_NAME: &str = "document.pdf";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub file_content: Option<String>,
    pub file_name: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: StructuredAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<bool>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn analyze_handler<B>(
    State(state): State<AppState<B>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError>
where
    B: GenerativeBackend + 'static,
{
    let Json(request) = payload?;

    let file_content = present(request.file_content)
        .ok_or_else(|| ApiError::BadRequest("File content is required".to_string()))?;

    let api_key = state.resolve_api_key(request.api_key.as_deref()).ok_or_else(|| {
        ApiError::BadRequest(
            "API key is not configured. Please set GEMINI_API_KEY in your environment variables."
                .to_string(),
        )
    })?;

    let file_name = present(request.file_name).unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
    let extraction = &state.settings.extraction;
    let document = decode_document(
        &file_content,
        &file_name,
        ContentType::Pdf,
        extraction,
        |e| format!("Failed to process PDF: {e}"),
    )?;

    let text = state
        .extractor
        .extract(&document, extraction.analysis_min_chars)
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to process PDF: {e}")))?;

    let generation = state
        .backend
        .generate(&api_key, &analysis_prompt(&text.text), &GenerationConfig::analysis())
        .await
        .map_err(|e| ApiError::Upstream(format!("Failed to analyze document with AI: {e}")))?;

    let outcome = interpret_analysis(&generation.text);
    let response = match outcome.degradation {
        Some(degradation) => {
            tracing::warn!(
                reason = %degradation.reason,
                preview = %sanitize_prompt(&degradation.raw_response),
                "Analysis output was not valid JSON, returning degraded analysis"
            );
            AnalyzeResponse {
                success: true,
                analysis: outcome.analysis,
                raw_response: Some(degradation.raw_response),
                parse_error: Some(true),
            }
        }
        None => AnalyzeResponse {
            success: true,
            analysis: outcome.analysis,
            raw_response: None,
            parse_error: None,
        },
    };

    tracing::info!(
        model = %generation.model_id,
        document_type = %response.analysis.document_type,
        degraded = response.parse_error.is_some(),
        "Document analyzed"
    );
    Ok(Json(response))
}
