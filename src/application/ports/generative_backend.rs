use async_trait::async_trait;

use crate::domain::{ApiKey, GenerationConfig, GenerationMethod};

use super::generative_model_api::ModelApiError;

#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(
        &self,
        api_key: &ApiKey,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<Generation, GenerationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub model_id: String,
    pub method: GenerationMethod,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    #[error("model {model} exposes no supported generation method")]
    NoSupportedMethod { model: String },
    #[error("{method} on {model} failed: {source}")]
    Failed {
        model: String,
        method: GenerationMethod,
        #[source]
        source: ModelApiError,
    },
    #[error("{method} on {model} timed out after {seconds}s")]
    TimedOut {
        model: String,
        method: GenerationMethod,
        seconds: u64,
    },
    #[error("AI returned an empty response.")]
    EmptyResponse { model: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error(
        "No supported model found. Last error: {}",
        .last_error.as_deref().unwrap_or("no model candidates configured")
    )]
    NoModelAvailable {
        attempts: usize,
        last_error: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Invocation(#[from] InvocationError),
}
