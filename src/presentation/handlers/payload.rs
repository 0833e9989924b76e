use crate::domain::{ContentType, Document};
use crate::presentation::config::ExtractionSettings;

use super::api_error::ApiError;

pub(super) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(super) fn decode_document(
    encoded: &str,
    filename: &str,
    content_type: ContentType,
    limits: &ExtractionSettings,
    describe: impl Fn(String) -> String,
) -> Result<Document, ApiError> {
    let document = Document::from_base64(filename, content_type, encoded)
        .map_err(|e| ApiError::BadRequest(describe(e.to_string())))?;

    if document.len() > limits.max_file_size_bytes() {
        return Err(ApiError::PayloadTooLarge(format!(
            "File exceeds the maximum size of {} MB",
            limits.max_file_size_mb
        )));
    }

    tracing::debug!(filename, bytes = document.len(), mime = content_type.as_mime(), "Document decoded");
    Ok(document)
}
