mod gemini_client;
mod scripted_model_api;

pub use gemini_client::{GeminiClient, create_gemini_client};
pub use scripted_model_api::ScriptedModelApi;
