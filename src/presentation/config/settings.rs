use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub extraction: ExtractionSettings,
    pub library: LibrarySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: String,
    pub fallback_models: Vec<String>,
    pub discovery_enabled: bool,
    pub invocation_timeout_seconds: u64,
}

impl GeminiSettings {
    pub fn invocation_timeout(&self) -> Duration {
        Duration::from_secs(self.invocation_timeout_seconds)
    }
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            fallback_models: [
                "gemini-2.5-flash",
                "gemini-2.0-flash",
                "gemini-1.5-flash",
                "gemini-1.5-pro",
                "chat-bison-001",
                "text-bison-001",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            discovery_enabled: true,
            invocation_timeout_seconds: 60,
        }
    }
}

impl fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("fallback_models", &self.fallback_models)
            .field("discovery_enabled", &self.discovery_enabled)
            .field("invocation_timeout_seconds", &self.invocation_timeout_seconds)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub fallback_min_chars: usize,
    pub analysis_min_chars: usize,
    pub translation_min_chars: usize,
    pub translation_max_chars: usize,
    pub timeout_seconds: u64,
    pub max_file_size_mb: usize,
}

impl ExtractionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            fallback_min_chars: 50,
            analysis_min_chars: 10,
            translation_min_chars: 50,
            translation_max_chars: 30_000,
            timeout_seconds: 30,
            max_file_size_mb: 25,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    pub directory: PathBuf,
    pub public_url_prefix: String,
    pub snippet_chars: usize,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("public/cases"),
            public_url_prefix: "/cases".to_string(),
            snippet_chars: 400,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json: bool,
}
