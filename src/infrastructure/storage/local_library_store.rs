use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectMeta, ObjectStore, PutPayload};

use crate::application::ports::{LibraryStore, LibraryStoreError, StoredObject};

pub struct LocalLibraryStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalLibraryStore {
    pub fn new(base_path: PathBuf) -> Result<Self, LibraryStoreError> {
        std::fs::create_dir_all(&base_path).map_err(LibraryStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| LibraryStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    fn stored_object(meta: ObjectMeta) -> Option<StoredObject> {
        let filename = meta.location.filename()?.to_string();
        Some(StoredObject {
            filename,
            size_bytes: meta.size as u64,
            last_modified: meta.last_modified,
        })
    }
}

#[async_trait::async_trait]
impl LibraryStore for LocalLibraryStore {
    async fn store(&self, filename: &str, data: Bytes) -> Result<StoredObject, LibraryStoreError> {
        let store_path = StorePath::from(filename);
        let size_bytes = data.len() as u64;

        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| LibraryStoreError::UploadFailed(e.to_string()))?;

        Ok(StoredObject {
            filename: filename.to_string(),
            size_bytes,
            last_modified: chrono::Utc::now(),
        })
    }

    async fn list(&self) -> Result<Vec<StoredObject>, LibraryStoreError> {
        let listing = self
            .inner
            .list_with_delimiter(None)
            .await
            .map_err(|e| LibraryStoreError::ListFailed(e.to_string()))?;

        Ok(listing
            .objects
            .into_iter()
            .filter_map(Self::stored_object)
            .collect())
    }

    async fn fetch(&self, filename: &str) -> Result<Vec<u8>, LibraryStoreError> {
        let store_path = StorePath::from(filename);
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => LibraryStoreError::NotFound(filename.to_string()),
            other => LibraryStoreError::DownloadFailed(other.to_string()),
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| LibraryStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
