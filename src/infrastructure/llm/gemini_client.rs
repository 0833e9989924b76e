use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{GenerativeModelApi, ModelApiError, RawResult};
use crate::domain::{ApiKey, GenerationConfig, GenerationMethod, ModelDescriptor};
use crate::presentation::config::GeminiSettings;

const API_KEY_HEADER: &str = "x-goog-api-key";
const LIST_PAGE_SIZE: u32 = 1000;
const MAX_LIST_PAGES: usize = 10;

pub struct GeminiClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct SamplingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
}

impl From<&GenerationConfig> for SamplingParams {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_p: config.top_p,
            top_k: config.top_k,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<SamplingParams>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerateTextRequest<'a> {
    prompt: Part<'a>,
    #[serde(flatten)]
    sampling: SamplingParams,
}

#[derive(Serialize)]
struct GenerateMessageRequest<'a> {
    prompt: MessagePrompt<'a>,
    #[serde(flatten)]
    sampling: SamplingParams,
}

#[derive(Serialize)]
struct MessagePrompt<'a> {
    messages: Vec<MessageContent<'a>>,
}

#[derive(Serialize)]
struct MessageContent<'a> {
    content: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelEntry {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl GeminiClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn model_url(&self, model_id: &str, method: GenerationMethod) -> String {
        let path = if model_id.contains('/') {
            model_id.to_string()
        } else {
            format!("models/{model_id}")
        };
        format!("{}/{}:{}", self.base_url, path, method.as_str())
    }

    fn request_body(
        method: GenerationMethod,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<Value, ModelApiError> {
        let sampling = SamplingParams::from(config);
        let body = match method {
            GenerationMethod::GenerateContent => serde_json::to_value(GenerateContentRequest {
                contents: vec![Content {
                    role: "user",
                    parts: vec![Part { text: prompt }],
                }],
                generation_config: (!config.is_default()).then_some(sampling),
            }),
            GenerationMethod::GenerateText => serde_json::to_value(GenerateTextRequest {
                prompt: Part { text: prompt },
                sampling,
            }),
            GenerationMethod::GenerateMessage => serde_json::to_value(GenerateMessageRequest {
                prompt: MessagePrompt {
                    messages: vec![MessageContent { content: prompt }],
                },
                sampling,
            }),
        };
        body.map_err(|e| ModelApiError::InvalidResponse(format!("failed to encode request: {e}")))
    }

    async fn send(&self, request: RequestBuilder, api_key: &ApiKey) -> Result<Response, ModelApiError> {
        let response = request
            .header(API_KEY_HEADER, api_key.expose())
            .send()
            .await
            .map_err(|e| ModelApiError::ApiRequestFailed(e.without_url().to_string()))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(ModelApiError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(ModelApiError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                message
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl GenerativeModelApi for GeminiClient {
    fn supports_discovery(&self) -> bool {
        true
    }

    #[tracing::instrument(skip_all)]
    async fn list_models(&self, api_key: &ApiKey) -> Result<Vec<ModelDescriptor>, ModelApiError> {
        let mut descriptors = Vec::new();
        let mut page_token: Option<String> = None;

        for _ in 0..MAX_LIST_PAGES {
            let mut request = self
                .client
                .get(format!("{}/models", self.base_url))
                .query(&[("pageSize", LIST_PAGE_SIZE.to_string())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let page: ListModelsResponse = self
                .send(request, api_key)
                .await?
                .json()
                .await
                .map_err(|e| ModelApiError::InvalidResponse(e.to_string()))?;

            descriptors.extend(
                page.models
                    .into_iter()
                    .map(|m| ModelDescriptor::new(m.name, m.supported_generation_methods)),
            );

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(count = descriptors.len(), "Listed models");
        Ok(descriptors)
    }

    #[tracing::instrument(skip(self, api_key, prompt, config), fields(prompt_chars = prompt.len()))]
    async fn invoke(
        &self,
        api_key: &ApiKey,
        model_id: &str,
        method: GenerationMethod,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<RawResult, ModelApiError> {
        let body = Self::request_body(method, prompt, config)?;
        let request = self.client.post(self.model_url(model_id, method)).json(&body);

        let value: Value = self
            .send(request, api_key)
            .await?
            .json()
            .await
            .map_err(|e| ModelApiError::InvalidResponse(e.to_string()))?;

        Ok(RawResult(value))
    }
}

pub fn create_gemini_client(settings: &GeminiSettings) -> Result<GeminiClient, ModelApiError> {
    let client = Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| ModelApiError::ApiRequestFailed(format!("failed to build HTTP client: {e}")))?;

    Ok(GeminiClient::new(client, &settings.base_url))
}
