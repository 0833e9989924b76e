use lexaid::domain::{ExtractedText, ExtractionTier};

#[test]
fn given_padded_text_when_measuring_then_whitespace_is_ignored() {
    let text = ExtractedText::new("   abcde   ", ExtractionTier::Simple);

    assert_eq!(text.trimmed_len(), 5);
    assert!(text.meets_minimum(5));
    assert!(!text.meets_minimum(6));
}

#[test]
fn given_multibyte_text_when_taking_snippet_then_characters_are_counted() {
    let text = ExtractedText::new("§§§§", ExtractionTier::Advanced);

    assert_eq!(text.snippet(2), "§§");
}
