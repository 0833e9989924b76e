use config::{Config, ConfigError, File};

use super::{Environment, Settings};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Environment(String),
}

impl Settings {
    /// Layers, lowest precedence first: built-in defaults,
    /// `appsettings.{environment}.toml`, `APP__SECTION__KEY` variables, then
    /// the plain `GEMINI_API_KEY` / `GEMINI_MODEL` / `SERVER_PORT` variables.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("gemini.fallback_models")
                    .try_parsing(true),
            )
            .set_override_option("gemini.api_key", non_empty_var("GEMINI_API_KEY"))?
            .set_override_option("gemini.model", non_empty_var("GEMINI_MODEL"))?
            .set_override_option("server.port", non_empty_var("SERVER_PORT"))?
            .build()?;

        let settings: Settings = configuration.try_deserialize()?;
        Ok(settings)
    }

    pub fn load_from_env() -> Result<(Environment, Self), SettingsError> {
        let environment = Environment::from_env().map_err(SettingsError::Environment)?;
        let settings = Self::load(environment)?;
        Ok((environment, settings))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
