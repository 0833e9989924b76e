use bytes::Bytes;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub filename: String,
    pub size_bytes: u64,
    pub last_modified: DateTime<Utc>,
}

#[async_trait::async_trait]
pub trait LibraryStore: Send + Sync {
    async fn store(&self, filename: &str, data: Bytes) -> Result<StoredObject, LibraryStoreError>;

    async fn list(&self) -> Result<Vec<StoredObject>, LibraryStoreError>;

    async fn fetch(&self, filename: &str) -> Result<Vec<u8>, LibraryStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LibraryStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("listing failed: {0}")]
    ListFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
