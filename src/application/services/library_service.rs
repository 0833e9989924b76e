use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{LibraryStore, LibraryStoreError};
use crate::domain::{
    ContentType, Document, LibraryDocument, is_pdf_file_name, library_file_name, public_url,
};

use super::text_extraction_service::TextExtractionService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub filename: String,
    pub url: String,
}

pub struct LibraryService {
    store: Arc<dyn LibraryStore>,
    extractor: Arc<TextExtractionService>,
    url_prefix: String,
    snippet_chars: usize,
}

impl LibraryService {
    pub fn new(
        store: Arc<dyn LibraryStore>,
        extractor: Arc<TextExtractionService>,
        url_prefix: impl Into<String>,
        snippet_chars: usize,
    ) -> Self {
        Self {
            store,
            extractor,
            url_prefix: url_prefix.into(),
            snippet_chars,
        }
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn upload(
        &self,
        original_name: &str,
        data: Bytes,
    ) -> Result<StoredUpload, LibraryStoreError> {
        let filename = library_file_name(original_name, chrono::Utc::now().timestamp_millis());
        let stored = self.store.store(&filename, data).await?;

        tracing::info!(filename = %stored.filename, size = stored.size_bytes, "Library file stored");
        Ok(StoredUpload {
            url: public_url(&self.url_prefix, &stored.filename),
            filename: stored.filename,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<LibraryDocument>, LibraryStoreError> {
        let mut objects = self.store.list().await?;
        objects.retain(|o| is_pdf_file_name(&o.filename));
        objects.sort_by(|a, b| a.filename.cmp(&b.filename));

        let mut documents = Vec::with_capacity(objects.len());
        for object in objects {
            let data = match self.store.fetch(&object.filename).await {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(filename = %object.filename, error = %e, "Skipping unreadable library file");
                    continue;
                }
            };

            let document = Document::new(object.filename.clone(), ContentType::Pdf, data);
            let snippet = match self.extractor.extract_best_effort(&document).await {
                Ok(text) => text.snippet(self.snippet_chars),
                Err(e) => {
                    tracing::warn!(filename = %object.filename, error = %e, "Skipping invalid library file");
                    continue;
                }
            };

            documents.push(LibraryDocument::imported(
                &object.filename,
                snippet,
                &self.url_prefix,
                object.last_modified,
            ));
        }

        tracing::debug!(count = documents.len(), "Library listed");
        Ok(documents)
    }
}
