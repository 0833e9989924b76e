use std::time::Duration;

use lexaid::application::ports::{ExtractionError, PageTextExtractor};
use lexaid::domain::{ContentType, Document, ExtractionTier};
use lexaid::infrastructure::text_processing::{ContentStreamExtractor, SimplePdfExtractor};
use lopdf::Object;
use lopdf::content::Operation;

use crate::helpers::pdf_fixtures::{
    LEASE_TEXT, PdfBuilder, blank_pdf, single_page_pdf, text_block, utf16_string,
};
use crate::helpers::test_app::extraction_service;

fn content_stream_extractor() -> ContentStreamExtractor {
    ContentStreamExtractor::new(Duration::from_secs(10))
}

fn pdf_document(data: Vec<u8>) -> Document {
    Document::new("case.pdf", ContentType::Pdf, data)
}

#[tokio::test]
async fn given_multi_page_pdf_when_walking_content_streams_then_pages_are_joined_in_order() {
    let pdf = PdfBuilder::new()
        .text_page(&["IN THE HIGH COURT", "OF JUDICATURE"])
        .text_page(&["ORDER"])
        .build();

    let extracted = content_stream_extractor().extract_text(&pdf).await.unwrap();

    assert_eq!(extracted.tier, ExtractionTier::Advanced);
    assert_eq!(extracted.text, "IN THE HIGH COURT OF JUDICATURE\nORDER");
}

#[tokio::test]
async fn given_page_drawing_form_xobject_when_walking_content_streams_then_form_text_is_included() {
    let mut operations = text_block(&["Petitioner: Asha Verma"]);
    operations.push(Operation::new("Do", vec!["Fm1".into()]));
    let pdf = PdfBuilder::new()
        .form("Fm1", &["Respondent: State of Maharashtra"])
        .page(operations)
        .build();

    let extracted = content_stream_extractor().extract_text(&pdf).await.unwrap();

    assert_eq!(
        extracted.text,
        "Petitioner: Asha Verma Respondent: State of Maharashtra"
    );
}

#[tokio::test]
async fn given_kerned_text_array_when_walking_content_streams_then_wide_gaps_become_spaces() {
    let pdf = PdfBuilder::new()
        .page(vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new(
                "TJ",
                vec![Object::Array(vec![
                    Object::string_literal("Jud"),
                    (-30).into(),
                    Object::string_literal("gment"),
                    (-400).into(),
                    Object::string_literal("reserved"),
                ])],
            ),
            Operation::new("ET", vec![]),
        ])
        .build();

    let extracted = content_stream_extractor().extract_text(&pdf).await.unwrap();

    assert_eq!(extracted.text, "Judgment reserved");
}

#[tokio::test]
async fn given_quote_operators_and_utf16_strings_when_walking_then_all_runs_are_read() {
    let pdf = PdfBuilder::new()
        .page(vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("TL", vec![14.into()]),
            Operation::new("'", vec![Object::string_literal("Section 420")]),
            Operation::new(
                "\"",
                vec![0.into(), 0.into(), Object::string_literal("IPC")],
            ),
            Operation::new("Tj", vec![utf16_string("Café Löwe")]),
            Operation::new("ET", vec![]),
        ])
        .build();

    let extracted = content_stream_extractor().extract_text(&pdf).await.unwrap();

    assert_eq!(extracted.text, "Section 420 IPC Café Löwe");
}

#[tokio::test]
async fn given_page_without_text_when_walking_content_streams_then_no_text_found() {
    let result = content_stream_extractor().extract_text(&blank_pdf()).await;

    assert!(matches!(result, Err(ExtractionError::NoTextFound)));
}

#[tokio::test]
async fn given_corrupt_bytes_when_walking_content_streams_then_parse_fails() {
    let result = content_stream_extractor()
        .extract_text(b"%PDF-1.7 truncated")
        .await;

    assert!(matches!(result, Err(ExtractionError::ParseFailed(_))));
}

#[tokio::test]
async fn given_text_pdf_when_extracting_with_both_tiers_then_text_is_returned() {
    let service = extraction_service();
    let document = pdf_document(single_page_pdf(&[LEASE_TEXT]));

    let extracted = service.extract(&document, 10).await.unwrap();

    assert!(extracted.text.contains("tenant"), "got: {}", extracted.text);
    assert_ne!(extracted.tier, ExtractionTier::PlainText);
}

#[tokio::test]
async fn given_image_only_pdf_when_extracting_then_ocr_hint_is_returned() {
    let service = extraction_service();
    let document = pdf_document(blank_pdf());

    let err = service.extract(&document, 10).await.unwrap_err();

    assert!(matches!(err, ExtractionError::InsufficientText { found: 0, .. }));
    assert!(err.to_string().contains("requires OCR"));
}

#[tokio::test]
async fn given_non_pdf_bytes_labelled_pdf_when_extracting_then_rejected_before_parsing() {
    let service = extraction_service();
    let document = pdf_document(b"PK\x03\x04 not a pdf".to_vec());

    let err = service.extract(&document, 10).await.unwrap_err();

    assert_eq!(err.to_string(), "File is not a valid PDF document");
}

#[tokio::test]
async fn given_empty_file_when_extracting_then_empty_document_error() {
    let service = extraction_service();

    let err = service
        .extract(&pdf_document(Vec::new()), 10)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Empty PDF file received");
}

#[tokio::test]
async fn given_form_drawn_twice_on_a_page_when_walking_content_streams_then_its_text_repeats() {
    let mut operations = text_block(&["Received"]);
    operations.push(Operation::new("Do", vec!["Stamp".into()]));
    operations.push(Operation::new("Do", vec!["Stamp".into()]));
    let pdf = PdfBuilder::new()
        .form("Stamp", &["Court Fee Paid"])
        .page(operations)
        .build();

    let extracted = content_stream_extractor().extract_text(&pdf).await.unwrap();

    assert_eq!(extracted.text, "Received Court Fee Paid Court Fee Paid");
}

#[tokio::test]
async fn given_same_form_on_two_pages_when_walking_content_streams_then_each_page_reads_it() {
    let mut first = text_block(&["Page one"]);
    first.push(Operation::new("Do", vec!["Fm1".into()]));
    let mut second = text_block(&["Page two"]);
    second.push(Operation::new("Do", vec!["Fm1".into()]));
    let pdf = PdfBuilder::new()
        .form("Fm1", &["Certified copy"])
        .page(first)
        .page(second)
        .build();

    let extracted = content_stream_extractor().extract_text(&pdf).await.unwrap();

    assert_eq!(extracted.text, "Page one Certified copy\nPage two Certified copy");
}

#[tokio::test]
async fn given_control_bytes_in_string_when_walking_content_streams_then_they_read_as_spaces() {
    let pdf = PdfBuilder::new()
        .page(vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Tj", vec![Object::string_literal("Bail\x07granted\x00")]),
            Operation::new("ET", vec![]),
        ])
        .build();

    let extracted = content_stream_extractor().extract_text(&pdf).await.unwrap();

    assert_eq!(extracted.text, "Bail granted");
}

#[tokio::test]
async fn given_zero_budget_when_walking_content_streams_then_extraction_times_out() {
    let pdf = single_page_pdf(&[LEASE_TEXT]);

    let result = ContentStreamExtractor::new(Duration::ZERO)
        .extract_text(&pdf)
        .await;

    assert!(matches!(
        result,
        Err(ExtractionError::TimedOut {
            tier: ExtractionTier::Advanced,
            ..
        })
    ));
}

#[tokio::test]
async fn given_zero_budget_when_extracting_with_simple_tier_then_extraction_times_out() {
    let pdf = single_page_pdf(&[LEASE_TEXT]);

    let result = SimplePdfExtractor::new(Duration::ZERO).extract_text(&pdf).await;

    assert!(matches!(
        result,
        Err(ExtractionError::TimedOut {
            tier: ExtractionTier::Simple,
            ..
        })
    ));
}
