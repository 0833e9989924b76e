use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use lexaid::application::ports::{ExtractionError, PageTextExtractor};
use lexaid::application::services::TextExtractionService;
use lexaid::domain::{ContentType, Document, ExtractedText, ExtractionTier};

const LONG_TEXT: &str =
    "This agreement is made between the landlord and the tenant on the first day of May.";

struct CountingExtractor {
    tier: ExtractionTier,
    result: Result<&'static str, ()>,
    calls: AtomicUsize,
}

impl CountingExtractor {
    fn new(tier: ExtractionTier, result: Result<&'static str, ()>) -> Arc<Self> {
        Arc::new(Self {
            tier,
            result,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageTextExtractor for CountingExtractor {
    fn tier(&self) -> ExtractionTier {
        self.tier
    }

    async fn extract_text(&self, _data: &[u8]) -> Result<ExtractedText, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.result {
            Ok(text) => Ok(ExtractedText::new(text, self.tier)),
            Err(()) => Err(ExtractionError::ParseFailed("unreadable".to_string())),
        }
    }
}

fn pdf() -> Document {
    Document::new("case.pdf", ContentType::Pdf, b"%PDF-1.4 body".to_vec())
}

fn service(simple: &Arc<CountingExtractor>, advanced: &Arc<CountingExtractor>) -> TextExtractionService {
    TextExtractionService::new(simple.clone(), advanced.clone(), 50)
}

#[tokio::test]
async fn given_born_digital_pdf_when_extracting_then_advanced_tier_is_not_called() {
    let simple = CountingExtractor::new(ExtractionTier::Simple, Ok(LONG_TEXT));
    let advanced = CountingExtractor::new(ExtractionTier::Advanced, Ok("other"));

    let extracted = service(&simple, &advanced).extract(&pdf(), 50).await.unwrap();

    assert_eq!(extracted.tier, ExtractionTier::Simple);
    assert_eq!(advanced.calls(), 0);
}

#[tokio::test]
async fn given_short_simple_text_when_extracting_then_advanced_tier_is_tried() {
    let simple = CountingExtractor::new(ExtractionTier::Simple, Ok("Order"));
    let advanced = CountingExtractor::new(ExtractionTier::Advanced, Ok(LONG_TEXT));

    let extracted = service(&simple, &advanced).extract(&pdf(), 50).await.unwrap();

    assert_eq!(extracted.tier, ExtractionTier::Advanced);
    assert_eq!(extracted.text, LONG_TEXT);
    assert_eq!(advanced.calls(), 1);
}

#[tokio::test]
async fn given_advanced_tier_fails_when_extracting_then_short_simple_text_is_judged_once() {
    let simple = CountingExtractor::new(ExtractionTier::Simple, Ok("Order dated 1 May"));
    let advanced = CountingExtractor::new(ExtractionTier::Advanced, Err(()));
    let service = service(&simple, &advanced);

    let accepted = service.extract(&pdf(), 10).await.unwrap();
    assert_eq!(accepted.text, "Order dated 1 May");

    let err = service.extract(&pdf(), 50).await.unwrap_err();
    assert!(matches!(
        err,
        ExtractionError::InsufficientText {
            found: 17,
            required: 50
        }
    ));
    assert_eq!(advanced.calls(), 2);
}

#[tokio::test]
async fn given_simple_tier_fails_when_extracting_then_advanced_text_is_used() {
    let simple = CountingExtractor::new(ExtractionTier::Simple, Err(()));
    let advanced = CountingExtractor::new(ExtractionTier::Advanced, Ok(LONG_TEXT));

    let extracted = service(&simple, &advanced).extract(&pdf(), 50).await.unwrap();

    assert_eq!(extracted.tier, ExtractionTier::Advanced);
}

#[tokio::test]
async fn given_both_tiers_fail_when_extracting_then_ocr_hint_is_returned() {
    let simple = CountingExtractor::new(ExtractionTier::Simple, Err(()));
    let advanced = CountingExtractor::new(ExtractionTier::Advanced, Err(()));

    let err = service(&simple, &advanced).extract(&pdf(), 10).await.unwrap_err();

    assert!(err.to_string().contains("requires OCR"), "{err}");
}

#[tokio::test]
async fn given_bytes_without_pdf_signature_when_extracting_then_no_tier_runs() {
    let simple = CountingExtractor::new(ExtractionTier::Simple, Ok(LONG_TEXT));
    let advanced = CountingExtractor::new(ExtractionTier::Advanced, Ok(LONG_TEXT));
    let document = Document::new("case.pdf", ContentType::Pdf, b"GIF89a".to_vec());

    let err = service(&simple, &advanced).extract(&document, 10).await.unwrap_err();

    assert_eq!(err.to_string(), "File is not a valid PDF document");
    assert_eq!(simple.calls(), 0);
}

#[tokio::test]
async fn given_empty_document_when_extracting_then_empty_document_error() {
    let simple = CountingExtractor::new(ExtractionTier::Simple, Ok(LONG_TEXT));
    let advanced = CountingExtractor::new(ExtractionTier::Advanced, Ok(LONG_TEXT));
    let document = Document::new("case.pdf", ContentType::Pdf, Vec::new());

    let err = service(&simple, &advanced).extract(&document, 10).await.unwrap_err();

    assert_eq!(err.to_string(), "Empty PDF file received");
}

#[tokio::test]
async fn given_text_document_with_invalid_utf8_when_extracting_then_bytes_are_decoded_lossily() {
    let simple = CountingExtractor::new(ExtractionTier::Simple, Ok(LONG_TEXT));
    let advanced = CountingExtractor::new(ExtractionTier::Advanced, Ok(LONG_TEXT));
    let document = Document::new("notes.txt", ContentType::Text, b"caf\xff notes".to_vec());

    let extracted = service(&simple, &advanced)
        .extract_best_effort(&document)
        .await
        .unwrap();

    assert_eq!(extracted.tier, ExtractionTier::PlainText);
    assert_eq!(extracted.text, "caf\u{FFFD} notes");
    assert_eq!(simple.calls(), 0);
}
