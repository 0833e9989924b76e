use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use lexaid::application::ports::{GenerationError, GenerativeBackend, InvocationError};
use lexaid::application::services::GenerationService;
use lexaid::domain::{
    ApiKey, CredentialSource, GenerationConfig, GenerationMethod, build_candidate_list,
};
use lexaid::infrastructure::llm::ScriptedModelApi;

fn service(api: ScriptedModelApi) -> GenerationService {
    GenerationService::new(
        Arc::new(api),
        build_candidate_list(
            Some("configured"),
            &["fallback-a".to_string(), "fallback-b".to_string()],
        ),
        Duration::from_secs(5),
        false,
    )
}

fn key() -> ApiKey {
    ApiKey::new("k", CredentialSource::Server)
}

#[tokio::test]
async fn given_configured_model_answers_when_generating_then_its_text_is_returned() {
    let service = service(ScriptedModelApi::new().respond_text("configured", "Hello"));

    let generation = service
        .generate(&key(), "p", &GenerationConfig::default())
        .await
        .unwrap();

    assert_eq!(generation.model_id, "configured");
    assert_eq!(generation.method, GenerationMethod::GenerateContent);
    assert_eq!(generation.text, "Hello");
}

#[tokio::test]
async fn given_blank_fallback_output_when_generating_then_empty_response_error() {
    let service = service(ScriptedModelApi::new().respond(
        "fallback-a",
        GenerationMethod::GenerateText,
        json!({ "candidates": [{ "output": "   " }] }),
    ));

    let err = service
        .generate(&key(), "p", &GenerationConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GenerationError::Invocation(InvocationError::EmptyResponse { .. })
    ));
    assert_eq!(err.to_string(), "AI returned an empty response.");
}

#[tokio::test]
async fn given_prompt_blocked_by_model_when_generating_then_empty_response_error() {
    let service = service(ScriptedModelApi::new().respond(
        "configured",
        GenerationMethod::GenerateContent,
        json!({ "promptFeedback": { "blockReason": "SAFETY" }, "usageMetadata": { "promptTokenCount": 4 } }),
    ));

    let err = service
        .generate(&key(), "p", &GenerationConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GenerationError::Invocation(InvocationError::EmptyResponse { .. })
    ));
}

#[tokio::test]
async fn given_no_model_works_when_generating_then_resolution_error_names_last_model() {
    let service = service(ScriptedModelApi::new());

    let err = service
        .generate(&key(), "p", &GenerationConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Resolution(_)));
    assert!(err.to_string().contains("fallback-b"), "{err}");
}
