use std::sync::Arc;

use crate::application::ports::{ExtractionError, PageTextExtractor};
use crate::domain::{ContentType, Document, ExtractedText, ExtractionTier};

/// Two-tier PDF text extraction: a fast simple tier, with the advanced tier
/// consulted only when the simple output is missing or too short.
pub struct TextExtractionService {
    simple: Arc<dyn PageTextExtractor>,
    advanced: Arc<dyn PageTextExtractor>,
    fallback_min_chars: usize,
}

impl TextExtractionService {
    pub fn new(
        simple: Arc<dyn PageTextExtractor>,
        advanced: Arc<dyn PageTextExtractor>,
        fallback_min_chars: usize,
    ) -> Self {
        Self {
            simple,
            advanced,
            fallback_min_chars,
        }
    }

    #[tracing::instrument(
        skip(self, document),
        fields(filename = %document.filename, bytes = document.len())
    )]
    pub async fn extract(
        &self,
        document: &Document,
        min_chars: usize,
    ) -> Result<ExtractedText, ExtractionError> {
        let extracted = self.extract_best_effort(document).await?;
        let found = extracted.trimmed_len();

        if found < min_chars {
            tracing::warn!(
                found,
                required = min_chars,
                tier = %extracted.tier,
                "Extracted text below minimum"
            );
            return Err(ExtractionError::InsufficientText {
                found,
                required: min_chars,
            });
        }

        tracing::info!(chars = found, tier = %extracted.tier, "Text extraction complete");
        Ok(extracted)
    }

    pub async fn extract_best_effort(
        &self,
        document: &Document,
    ) -> Result<ExtractedText, ExtractionError> {
        if document.is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        match document.content_type {
            ContentType::Text => Ok(ExtractedText::new(
                String::from_utf8_lossy(document.data()).into_owned(),
                ExtractionTier::PlainText,
            )),
            ContentType::Pdf => {
                if !document.has_pdf_signature() {
                    return Err(ExtractionError::NotAPdf);
                }
                Ok(self.extract_pdf(document.data()).await)
            }
        }
    }

    async fn extract_pdf(&self, data: &[u8]) -> ExtractedText {
        let simple = match self.simple.extract_text(data).await {
            Ok(text) if text.meets_minimum(self.fallback_min_chars) => return text,
            Ok(text) => {
                tracing::debug!(
                    chars = text.trimmed_len(),
                    threshold = self.fallback_min_chars,
                    "Simple extraction below threshold, trying advanced tier"
                );
                text
            }
            Err(e) => {
                tracing::debug!(error = %e, "Simple extraction failed, trying advanced tier");
                ExtractedText::new(String::new(), self.simple.tier())
            }
        };

        match self.advanced.extract_text(data).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Advanced extraction failed, keeping simple result");
                simple
            }
        }
    }
}
