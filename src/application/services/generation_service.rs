use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{
    Generation, GenerationError, GenerativeBackend, GenerativeModelApi,
};
use crate::domain::{ApiKey, CredentialSource, GenerationConfig, ModelCandidate};

use super::invocation_adapter::{InvocationAdapter, extract_text};
use super::model_resolver::ModelResolver;

pub struct GenerationService {
    resolver: ModelResolver,
    candidates: Vec<ModelCandidate>,
}

impl GenerationService {
    pub fn new(
        api: Arc<dyn GenerativeModelApi>,
        candidates: Vec<ModelCandidate>,
        invocation_timeout: Duration,
        discovery_enabled: bool,
    ) -> Self {
        let adapter = InvocationAdapter::new(api.clone(), invocation_timeout);
        Self {
            resolver: ModelResolver::new(api, adapter, discovery_enabled),
            candidates,
        }
    }
}

#[async_trait]
impl GenerativeBackend for GenerationService {
    #[tracing::instrument(skip_all, fields(prompt_chars = prompt.len()))]
    async fn generate(
        &self,
        api_key: &ApiKey,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<Generation, GenerationError> {
        if api_key.source() == CredentialSource::Client {
            tracing::warn!("Using client-supplied API key; configure GEMINI_API_KEY on the server");
        }

        let resolution = self
            .resolver
            .resolve(api_key, &self.candidates, prompt, config)
            .await?;
        let invocation = resolution.invocation;
        let text = extract_text(&invocation.raw, &invocation.model_id)?;

        tracing::info!(
            model = %invocation.model_id,
            method = %invocation.method,
            attempts = resolution.attempts.len(),
            chars = text.len(),
            "Generation complete"
        );

        Ok(Generation {
            model_id: invocation.model_id,
            method: invocation.method,
            text,
        })
    }
}
