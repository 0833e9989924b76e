use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;

use crate::application::ports::{ExtractionError, GenerativeBackend};
use crate::application::services::{interpret_translation, translation_prompt};
use crate::domain::{ContentType, GenerationConfig, Translation};
use crate::presentation::state::AppState;

use super::api_error::ApiError;
use super::payload::{decode_document, present};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslateRequest {
    pub file_content: Option<String>,
    pub file_name: Option<String>,
    pub target_language: Option<String>,
    pub mime_type: Option<String>,
    pub api_key: Option<String>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn translate_handler<B>(
    State(state): State<AppState<B>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<Translation>, ApiError>
where
    B: GenerativeBackend + 'static,
{
    let Json(request) = payload?;

    let (Some(file_content), Some(file_name), Some(target_language)) = (
        present(request.file_content),
        present(request.file_name),
        present(request.target_language),
    ) else {
        return Err(ApiError::BadRequest(
            "File content, name, and target language are required".to_string(),
        ));
    };

    let content_type = ContentType::from_mime(request.mime_type.as_deref());
    let extraction = &state.settings.extraction;
    let document = decode_document(
        &file_content,
        &file_name,
        content_type,
        extraction,
        |_| match content_type {
            ContentType::Pdf => "Failed to parse PDF file.".to_string(),
            ContentType::Text => "File content is not valid base64.".to_string(),
        },
    )?;

    let min_chars = match content_type {
        ContentType::Pdf => extraction.translation_min_chars,
        ContentType::Text => 1,
    };
    let text = state
        .extractor
        .extract(&document, min_chars)
        .await
        .map_err(|e| translation_extraction_error(content_type, e))?;

    let api_key = state
        .resolve_api_key(request.api_key.as_deref())
        .ok_or_else(|| ApiError::Upstream("Gemini API key not configured".to_string()))?;

    let prompt = translation_prompt(&text.text, &target_language, extraction.translation_max_chars);
    let generation = state
        .backend
        .generate(&api_key, &prompt, &GenerationConfig::default())
        .await
        .map_err(|e| ApiError::Upstream(format!("Failed to translate document with AI: {e}")))?;

    let translation = interpret_translation(&generation.text);
    tracing::info!(
        model = %generation.model_id,
        original_language = %translation.original_language,
        target_language = %target_language,
        "Document translated"
    );

    Ok(Json(translation))
}

fn translation_extraction_error(content_type: ContentType, error: ExtractionError) -> ApiError {
    let message = match (content_type, error) {
        (ContentType::Pdf, ExtractionError::InsufficientText { .. }) => {
            "Unable to extract readable text from PDF for translation. This may be a scanned document."
        }
        (ContentType::Pdf, _) => "Failed to parse PDF file.",
        (ContentType::Text, _) => "File content is empty.",
    };
    ApiError::BadRequest(message.to_string())
}
