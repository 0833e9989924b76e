use std::sync::Arc;

use crate::application::ports::{GenerativeModelApi, ResolutionError};
use crate::domain::{ApiKey, AttemptLog, GenerationConfig, ModelCandidate, ModelDescriptor};

use super::invocation_adapter::{Invocation, InvocationAdapter};

#[derive(Debug)]
pub struct Resolution {
    pub invocation: Invocation,
    pub attempts: AttemptLog,
}

pub struct ModelResolver {
    api: Arc<dyn GenerativeModelApi>,
    adapter: InvocationAdapter,
    discovery_enabled: bool,
}

impl ModelResolver {
    pub fn new(
        api: Arc<dyn GenerativeModelApi>,
        adapter: InvocationAdapter,
        discovery_enabled: bool,
    ) -> Self {
        Self {
            api,
            adapter,
            discovery_enabled,
        }
    }

    #[tracing::instrument(skip_all, fields(candidates = candidates.len()))]
    pub async fn resolve(
        &self,
        api_key: &ApiKey,
        candidates: &[ModelCandidate],
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<Resolution, ResolutionError> {
        let mut attempts = AttemptLog::default();

        for candidate in self.discover(api_key).await {
            if let Some(invocation) = self
                .try_candidate(api_key, &candidate, prompt, config, &mut attempts)
                .await
            {
                return Ok(Resolution {
                    invocation,
                    attempts,
                });
            }
        }

        for candidate in candidates {
            if attempts.has_attempted(&candidate.id) {
                tracing::debug!(model = %candidate.id, "Skipping candidate already tried");
                continue;
            }
            if let Some(invocation) = self
                .try_candidate(api_key, candidate, prompt, config, &mut attempts)
                .await
            {
                return Ok(Resolution {
                    invocation,
                    attempts,
                });
            }
        }

        tracing::error!(
            attempts = attempts.len(),
            failed_models = ?attempts.failed_models(),
            last_error = attempts.last_error().unwrap_or_default(),
            "No usable model found"
        );
        Err(ResolutionError::NoModelAvailable {
            attempts: attempts.len(),
            last_error: attempts.last_error().map(str::to_string),
        })
    }

    async fn discover(&self, api_key: &ApiKey) -> Vec<ModelCandidate> {
        if !self.discovery_enabled || !self.api.supports_discovery() {
            return Vec::new();
        }

        match self.api.list_models(api_key).await {
            Ok(models) => {
                let discovered: Vec<ModelCandidate> = models
                    .into_iter()
                    .filter(ModelDescriptor::suggests_text_generation)
                    .map(ModelCandidate::discovered)
                    .collect();
                tracing::debug!(count = discovered.len(), "Discovered generation models");
                discovered
            }
            Err(e) => {
                tracing::warn!(error = %e, "Model discovery failed, using static candidates");
                Vec::new()
            }
        }
    }

    async fn try_candidate(
        &self,
        api_key: &ApiKey,
        candidate: &ModelCandidate,
        prompt: &str,
        config: &GenerationConfig,
        attempts: &mut AttemptLog,
    ) -> Option<Invocation> {
        match self
            .adapter
            .invoke(api_key, candidate, prompt, config, attempts)
            .await
        {
            Ok(invocation) => {
                tracing::info!(
                    model = %invocation.model_id,
                    method = %invocation.method,
                    origin = ?candidate.origin,
                    "Model resolved"
                );
                Some(invocation)
            }
            Err(e) => {
                tracing::warn!(model = %candidate.id, error = %e, "Model candidate failed");
                None
            }
        }
    }
}
