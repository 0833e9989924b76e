use lexaid::domain::{
    CandidateOrigin, GenerationMethod, ModelCandidate, ModelDescriptor, build_candidate_list,
};

fn methods(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn given_duplicate_ids_when_building_candidates_then_canonical_duplicates_are_dropped() {
    let candidates = build_candidate_list(
        Some("gemini-1.5-pro"),
        &methods(&["models/gemini-1.5-pro", "models/gemini-2.5-flash", "gemini-2.5-flash"]),
    );

    let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["gemini-1.5-pro", "models/gemini-2.5-flash"]);
    assert_eq!(candidates[0].origin, CandidateOrigin::Configured);
}

#[test]
fn given_blank_configured_model_when_building_candidates_then_only_fallbacks_remain() {
    let candidates = build_candidate_list(Some("  "), &methods(&["gemini-pro", " "]));

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].origin, CandidateOrigin::Fallback);
}

#[test]
fn given_discovered_chat_model_when_listing_methods_then_only_advertised_method_is_tried() {
    let candidate = ModelCandidate::discovered(ModelDescriptor::new(
        "models/chat-bison-001",
        methods(&["generateMessage", "countMessageTokens"]),
    ));

    assert_eq!(candidate.present_methods(), vec![GenerationMethod::GenerateMessage]);
}

#[test]
fn given_discovered_embedding_model_when_listing_methods_then_none_are_present() {
    let candidate = ModelCandidate::discovered(ModelDescriptor::new(
        "models/embedding-001",
        methods(&["embedContent"]),
    ));

    assert!(candidate.present_methods().is_empty());
}

#[test]
fn given_static_candidate_when_listing_methods_then_all_methods_in_order() {
    let candidate = ModelCandidate::fallback("gemini-pro");

    assert_eq!(
        candidate.present_methods(),
        vec![
            GenerationMethod::GenerateContent,
            GenerationMethod::GenerateText,
            GenerationMethod::GenerateMessage,
        ]
    );
}

#[test]
fn given_descriptors_when_checking_text_generation_then_name_or_methods_decide() {
    assert!(ModelDescriptor::new("models/x", methods(&["generateContent"])).suggests_text_generation());
    assert!(ModelDescriptor::new("models/gemini-pro-vision", vec![]).suggests_text_generation());
    assert!(ModelDescriptor::new("models/text-bison-001", vec![]).suggests_text_generation());
    assert!(!ModelDescriptor::new("models/embedding-001", methods(&["embedContent"])).suggests_text_generation());
}
