use async_trait::async_trait;

use crate::domain::{ExtractedText, ExtractionTier};

#[async_trait]
pub trait PageTextExtractor: Send + Sync {
    fn tier(&self) -> ExtractionTier;

    async fn extract_text(&self, data: &[u8]) -> Result<ExtractedText, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Empty PDF file received")]
    EmptyDocument,
    #[error("File is not a valid PDF document")]
    NotAPdf,
    #[error("failed to parse PDF: {0}")]
    ParseFailed(String),
    #[error("no readable text found in PDF")]
    NoTextFound,
    #[error("{tier} extraction timed out after {seconds}s")]
    TimedOut { tier: ExtractionTier, seconds: u64 },
    #[error(
        "No readable text found in the PDF. This might be a scanned document or image-based PDF that requires OCR."
    )]
    InsufficientText { found: usize, required: usize },
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
