mod environment;
mod loader;
mod settings;

pub use environment::Environment;
pub use loader::SettingsError;
pub use settings::{
    ExtractionSettings, GeminiSettings, LibrarySettings, LoggingSettings, ServerSettings, Settings,
};
