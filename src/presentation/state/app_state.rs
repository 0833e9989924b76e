use std::sync::Arc;

use crate::application::ports::GenerativeBackend;
use crate::application::services::{LibraryService, TextExtractionService};
use crate::domain::ApiKey;
use crate::presentation::config::Settings;

pub struct AppState<B>
where
    B: GenerativeBackend,
{
    pub backend: Arc<B>,
    pub extractor: Arc<TextExtractionService>,
    pub library: Arc<LibraryService>,
    pub settings: Arc<Settings>,
}

impl<B> AppState<B>
where
    B: GenerativeBackend,
{
    pub fn server_api_key(&self) -> Option<&str> {
        self.settings.gemini.api_key.as_deref()
    }

    pub fn resolve_api_key(&self, client_key: Option<&str>) -> Option<ApiKey> {
        ApiKey::resolve(self.server_api_key(), client_key)
    }
}

impl<B> Clone for AppState<B>
where
    B: GenerativeBackend,
{
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            extractor: Arc::clone(&self.extractor),
            library: Arc::clone(&self.library),
            settings: Arc::clone(&self.settings),
        }
    }
}
