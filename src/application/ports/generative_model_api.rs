use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ApiKey, GenerationConfig, GenerationMethod, ModelDescriptor};

#[derive(Debug, Clone, PartialEq)]
pub struct RawResult(pub Value);

#[async_trait]
pub trait GenerativeModelApi: Send + Sync {
    fn supports_discovery(&self) -> bool {
        false
    }

    async fn list_models(&self, _api_key: &ApiKey) -> Result<Vec<ModelDescriptor>, ModelApiError> {
        Err(ModelApiError::DiscoveryUnsupported)
    }

    async fn invoke(
        &self,
        api_key: &ApiKey,
        model_id: &str,
        method: GenerationMethod,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<RawResult, ModelApiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelApiError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("model discovery is not supported")]
    DiscoveryUnsupported,
}
