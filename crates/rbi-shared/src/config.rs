//! Configuration management

use config::{
    builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat,
};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_APP_NAME, DEFAULT_HOST, DEFAULT_LAUNCH_FILE_URL,
    DEFAULT_MOCK_DELAY_MS, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::website::WebsiteConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub client: ClientSettings,
    pub mock: MockSettings,
    #[serde(default)]
    pub website: WebsiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

/// Settings for the shared HTTP client every API wrapper goes through.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub launch_file_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MockSettings {
    pub menu_delay_ms: u64,
}

impl AppConfig {
    /// Defaults, then `config/default`, then `config/{APP_ENV}`, then
    /// `APP__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .set_default("app.env", env.clone())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }

    /// Defaults overlaid with an in-memory TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", DEFAULT_HOST)?
            .set_default("app.port", i64::from(DEFAULT_PORT))?
            .set_default("app.name", DEFAULT_APP_NAME)?
            .set_default("client.base_url", DEFAULT_API_BASE_URL)?
            .set_default("client.timeout_seconds", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .set_default("client.launch_file_url", DEFAULT_LAUNCH_FILE_URL)?
            .set_default("mock.menu_delay_ms", DEFAULT_MOCK_DELAY_MS as i64)
    }
}
