use std::path::Path;

use config::{Config, Environment, File};
use url::Url;

pub const DEFAULT_CALL_TIMEOUT: u64 = 30;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("base_url must be an absolute http(s) URL, got {0:?}")]
    InvalidBaseUrl(String),
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct PagaConfig {
    /// Root of the business REST service; method names are appended to it.
    pub base_url: String,
    #[serde(default = "default_call_timeout")]
    pub call_timeout: u64,
}

fn default_call_timeout() -> u64 {
    DEFAULT_CALL_TIMEOUT
}

impl PagaConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            base_url: base_url.into(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        };
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let usable = Url::parse(self.base_url.trim())
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host());
        if !usable {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(())
    }
}

/// Loads [`PagaConfig`] from an optional file overlaid with `PAGA__*`
/// environment variables (`PAGA__BASE_URL`, `PAGA__CALL_TIMEOUT`).
pub fn load_config(path: Option<impl AsRef<Path>>) -> Result<PagaConfig, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        log::info!("Loading Paga config from {}", path.as_ref().display());
        builder = builder.add_source(File::from(path.as_ref()).required(true));
    }
    let config = builder
        .add_source(
            Environment::with_prefix("PAGA")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<PagaConfig>()?;
    config.check()?;
    Ok(config)
}
