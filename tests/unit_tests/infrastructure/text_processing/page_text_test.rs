use lexaid::infrastructure::text_processing::{join_pages, join_runs, normalize_page_text};

#[test]
fn given_hyphenated_line_break_when_normalizing_then_word_is_rejoined() {
    assert_eq!(
        normalize_page_text("The appli-\ncant was\n\n  granted bail"),
        "The applicant was granted bail"
    );
}

#[test]
fn given_ligature_when_normalizing_then_it_is_decomposed() {
    assert_eq!(normalize_page_text("ﬁling"), "filing");
}

#[test]
fn given_runs_with_blank_and_padded_parts_when_joining_then_single_spaces_remain() {
    assert_eq!(join_runs(["IN THE", "  ", "HIGH  COURT"]), "IN THE HIGH COURT");
}

#[test]
fn given_blank_page_when_joining_pages_then_it_is_skipped() {
    let pages = vec!["one".to_string(), " ".to_string(), "two".to_string()];

    assert_eq!(join_pages(pages), "one\ntwo");
}
