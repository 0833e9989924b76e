use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::application::ports::{GenerativeModelApi, InvocationError, RawResult};
use crate::domain::{ApiKey, AttemptLog, GenerationConfig, GenerationMethod, ModelCandidate};

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub model_id: String,
    pub method: GenerationMethod,
    pub raw: RawResult,
}

pub struct InvocationAdapter {
    api: Arc<dyn GenerativeModelApi>,
    timeout: Duration,
}

impl InvocationAdapter {
    pub fn new(api: Arc<dyn GenerativeModelApi>, timeout: Duration) -> Self {
        Self { api, timeout }
    }

    #[tracing::instrument(skip(self, api_key, prompt, config, log), fields(model = %candidate.id))]
    pub async fn invoke(
        &self,
        api_key: &ApiKey,
        candidate: &ModelCandidate,
        prompt: &str,
        config: &GenerationConfig,
        log: &mut AttemptLog,
    ) -> Result<Invocation, InvocationError> {
        let mut last_error = None;

        for method in candidate.present_methods() {
            let call = self
                .api
                .invoke(api_key, &candidate.id, method, prompt, config);

            let error = match tokio::time::timeout(self.timeout, call).await {
                Ok(Ok(raw)) => {
                    tracing::debug!(%method, "Invocation succeeded");
                    log.record_success(&candidate.id, method);
                    return Ok(Invocation {
                        model_id: candidate.id.clone(),
                        method,
                        raw,
                    });
                }
                Ok(Err(source)) => InvocationError::Failed {
                    model: candidate.id.clone(),
                    method,
                    source,
                },
                Err(_) => InvocationError::TimedOut {
                    model: candidate.id.clone(),
                    method,
                    seconds: self.timeout.as_secs(),
                },
            };

            tracing::debug!(%method, error = %error, "Invocation attempt failed");
            log.record_failure(&candidate.id, Some(method), &error);
            last_error = Some(error);
        }

        match last_error {
            Some(error) => Err(error),
            None => {
                let error = InvocationError::NoSupportedMethod {
                    model: candidate.id.clone(),
                };
                log.record_failure(&candidate.id, None, &error);
                Err(error)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Candidates,
    NestedCandidates,
    NestedOpaque,
    OutputArray,
    Opaque,
}

pub fn extract_text(raw: &RawResult, model_id: &str) -> Result<String, InvocationError> {
    let (shape, text) = normalize_text(&raw.0);
    tracing::debug!(?shape, chars = text.len(), "Normalized model output");

    if text.trim().is_empty() {
        return Err(InvocationError::EmptyResponse {
            model: model_id.to_string(),
        });
    }
    Ok(text)
}

pub fn normalize_text(value: &Value) -> (ResponseShape, String) {
    if let Some(text) = accessor_text(value) {
        return (ResponseShape::Candidates, text);
    }

    if let Some(response) = value.get("response").filter(|r| !r.is_null()) {
        return match accessor_text(response) {
            Some(text) => (ResponseShape::NestedCandidates, text),
            None => (ResponseShape::NestedOpaque, stringify(response)),
        };
    }

    if let Some(output) = value.get("output").and_then(Value::as_array) {
        let text = output
            .first()
            .and_then(|o| o.pointer("/content/0/text"))
            .map(stringify)
            .unwrap_or_default();
        return (ResponseShape::OutputArray, text);
    }

    (ResponseShape::Opaque, stringify(value))
}

fn accessor_text(value: &Value) -> Option<String> {
    if let Some(text) = value.get("text").and_then(Value::as_str) {
        return Some(text.to_string());
    }

    // A prompt-level block carries feedback and usage but no candidates.
    let Some(candidates) = value.get("candidates") else {
        let blocked = value.get("promptFeedback").is_some() || value.get("usageMetadata").is_some();
        return blocked.then(String::new);
    };
    let Some(candidate) = candidates.get(0) else {
        return Some(String::new());
    };

    if let Some(parts) = candidate.pointer("/content/parts").and_then(Value::as_array) {
        return Some(
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .collect(),
        );
    }

    let text = candidate
        .get("output")
        .and_then(Value::as_str)
        .or_else(|| candidate.get("content").and_then(Value::as_str))
        .or_else(|| candidate.pointer("/content/0/text").and_then(Value::as_str))
        .unwrap_or_default();
    Some(text.to_string())
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
