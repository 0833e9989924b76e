use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::application::ports::GenerativeBackend;
use crate::domain::LibraryDocument;
use crate::presentation::state::AppState;

use super::api_error::ApiError;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub filename: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct LibraryListResponse {
    pub documents: Vec<LibraryDocument>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn library_upload_handler<B>(
    State(state): State<AppState<B>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError>
where
    B: GenerativeBackend + 'static,
{
    loop {
        let field = multipart.next_field().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read multipart");
            ApiError::from_multipart("Invalid multipart body", e)
        })?;

        let Some(field) = field else {
            return Err(ApiError::BadRequest("No file provided".to_string()));
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::from_multipart("Failed to read file", e))?;

        let limit = state.settings.extraction.max_file_size_bytes();
        if data.len() > limit {
            return Err(ApiError::PayloadTooLarge(format!(
                "File exceeds the maximum size of {} MB",
                state.settings.extraction.max_file_size_mb
            )));
        }

        let stored = state.library.upload(&original_name, data).await.map_err(|e| {
            tracing::error!(error = %e, "Library upload failed");
            ApiError::Internal("Upload failed".to_string())
        })?;

        return Ok(Json(UploadResponse {
            success: true,
            filename: stored.filename,
            url: stored.url,
        }));
    }
}

#[tracing::instrument(skip(state))]
pub async fn library_list_handler<B>(
    State(state): State<AppState<B>>,
) -> Result<Json<LibraryListResponse>, ApiError>
where
    B: GenerativeBackend + 'static,
{
    let documents = state.library.list().await.map_err(|e| {
        tracing::error!(error = %e, "Library listing failed");
        ApiError::Internal("Failed to list documents".to_string())
    })?;

    Ok(Json(LibraryListResponse { documents }))
}
