use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::application::ports::{GenerativeModelApi, ModelApiError, RawResult};
use crate::domain::{ApiKey, GenerationConfig, GenerationMethod, ModelDescriptor};

enum Script {
    Respond(Value),
    Fail(String),
    Hang,
}

/// In-memory model service with per (model, method) scripted outcomes.
/// Anything unscripted fails the way an unknown model does remotely.
#[derive(Default)]
pub struct ScriptedModelApi {
    discovery: Option<Result<Vec<ModelDescriptor>, String>>,
    scripts: HashMap<(String, GenerationMethod), Script>,
    calls: Mutex<Vec<(String, GenerationMethod)>>,
}

impl ScriptedModelApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_discovery(mut self, models: Vec<ModelDescriptor>) -> Self {
        self.discovery = Some(Ok(models));
        self
    }

    pub fn with_failing_discovery(mut self, message: &str) -> Self {
        self.discovery = Some(Err(message.to_string()));
        self
    }

    pub fn respond(mut self, model: &str, method: GenerationMethod, body: Value) -> Self {
        self.scripts
            .insert((model.to_string(), method), Script::Respond(body));
        self
    }

    pub fn respond_text(self, model: &str, text: &str) -> Self {
        self.respond(
            model,
            GenerationMethod::GenerateContent,
            json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] }),
        )
    }

    pub fn fail(mut self, model: &str, method: GenerationMethod, message: &str) -> Self {
        self.scripts
            .insert((model.to_string(), method), Script::Fail(message.to_string()));
        self
    }

    pub fn hang(mut self, model: &str, method: GenerationMethod) -> Self {
        self.scripts.insert((model.to_string(), method), Script::Hang);
        self
    }

    pub fn calls(&self) -> Vec<(String, GenerationMethod)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn called_models(&self) -> Vec<String> {
        let mut models: Vec<String> = Vec::new();
        for (model, _) in self.calls() {
            if !models.contains(&model) {
                models.push(model);
            }
        }
        models
    }
}

#[async_trait]
impl GenerativeModelApi for ScriptedModelApi {
    fn supports_discovery(&self) -> bool {
        self.discovery.is_some()
    }

    async fn list_models(&self, _api_key: &ApiKey) -> Result<Vec<ModelDescriptor>, ModelApiError> {
        match &self.discovery {
            Some(Ok(models)) => Ok(models.clone()),
            Some(Err(message)) => Err(ModelApiError::ApiRequestFailed(message.clone())),
            None => Err(ModelApiError::DiscoveryUnsupported),
        }
    }

    async fn invoke(
        &self,
        _api_key: &ApiKey,
        model_id: &str,
        method: GenerationMethod,
        _prompt: &str,
        _config: &GenerationConfig,
    ) -> Result<RawResult, ModelApiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((model_id.to_string(), method));
        }

        match self.scripts.get(&(model_id.to_string(), method)) {
            Some(Script::Respond(body)) => Ok(RawResult(body.clone())),
            Some(Script::Fail(message)) => Err(ModelApiError::ApiRequestFailed(message.clone())),
            Some(Script::Hang) => {
                std::future::pending::<()>().await;
                Err(ModelApiError::InvalidResponse("unreachable".to_string()))
            }
            None => Err(ModelApiError::ApiRequestFailed(format!(
                "HTTP 404: model {model_id} is not found for {method}"
            ))),
        }
    }
}
