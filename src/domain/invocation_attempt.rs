use std::fmt;

use super::generation_method::GenerationMethod;
use super::model_candidate::canonical_model_id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationAttempt {
    pub model_id: String,
    pub method: Option<GenerationMethod>,
    pub outcome: AttemptOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct AttemptLog {
    attempts: Vec<InvocationAttempt>,
}

impl AttemptLog {
    pub fn record_success(&mut self, model_id: &str, method: GenerationMethod) {
        self.attempts.push(InvocationAttempt {
            model_id: model_id.to_string(),
            method: Some(method),
            outcome: AttemptOutcome::Succeeded,
        });
    }

    pub fn record_failure(
        &mut self,
        model_id: &str,
        method: Option<GenerationMethod>,
        error: &impl fmt::Display,
    ) {
        self.attempts.push(InvocationAttempt {
            model_id: model_id.to_string(),
            method,
            outcome: AttemptOutcome::Failed(error.to_string()),
        });
    }

    pub fn has_attempted(&self, model_id: &str) -> bool {
        let wanted = canonical_model_id(model_id);
        self.attempts
            .iter()
            .any(|a| canonical_model_id(&a.model_id) == wanted)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.attempts.iter().rev().find_map(|a| match &a.outcome {
            AttemptOutcome::Failed(message) => Some(message.as_str()),
            AttemptOutcome::Succeeded => None,
        })
    }

    pub fn failed_models(&self) -> Vec<&str> {
        let mut failed: Vec<&str> = Vec::new();
        for attempt in &self.attempts {
            let id = attempt.model_id.as_str();
            let succeeded = self
                .attempts
                .iter()
                .any(|a| a.model_id == id && a.outcome == AttemptOutcome::Succeeded);
            if !succeeded && !failed.contains(&id) {
                failed.push(id);
            }
        }
        failed
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InvocationAttempt> {
        self.attempts.iter()
    }
}
