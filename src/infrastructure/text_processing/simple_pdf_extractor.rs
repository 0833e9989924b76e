use std::io::Write;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractionError, PageTextExtractor};
use crate::domain::{ExtractedText, ExtractionTier};

use super::page_text::{join_pages, normalize_page_text};

pub struct SimplePdfExtractor {
    timeout: Duration,
}

impl SimplePdfExtractor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn extract_pages(path: &std::path::Path, timeout: Duration) -> Result<Vec<String>, ExtractionError> {
        let deadline = Instant::now() + timeout;
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ExtractionError::ParseFailed(e.to_string()))?;

        let page_count = doc.page_count().map_err(|e| {
            ExtractionError::ParseFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            if Instant::now() >= deadline {
                return Err(ExtractionError::TimedOut {
                    tier: ExtractionTier::Simple,
                    seconds: timeout.as_secs(),
                });
            }
            match doc.extract_text(page_index) {
                Ok(text) => pages.push(normalize_page_text(&text)),
                Err(e) => tracing::debug!(page = page_index + 1, error = %e, "Skipping unreadable page"),
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl PageTextExtractor for SimplePdfExtractor {
    fn tier(&self) -> ExtractionTier {
        ExtractionTier::Simple
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_text(&self, data: &[u8]) -> Result<ExtractedText, ExtractionError> {
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();
        let timeout = self.timeout;

        let pages = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path, timeout)),
        )
        .await
        .map_err(|_| ExtractionError::TimedOut {
            tier: ExtractionTier::Simple,
            seconds: self.timeout.as_secs(),
        })?
        .map_err(|e| ExtractionError::ExtractionFailed(format!("task join error: {e}")))??;

        let page_count = pages.len();
        let text = join_pages(pages);
        tracing::debug!(page_count, chars = text.len(), "Simple PDF extraction complete");

        if text.is_empty() {
            return Err(ExtractionError::NoTextFound);
        }

        Ok(ExtractedText::new(text, ExtractionTier::Simple))
    }
}
