//! Process configuration read from the environment.

use callov_api::{Client, DEFAULT_BASE_URL};
use thiserror::Error;

pub const API_KEY_VAR: &str = "CALLOV_API_KEY";
pub const BASE_URL_VAR: &str = "CALLOV_BASE_URL";

/// Errors from loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingApiKey(&'static str),
    #[error("Failed to build client: {0}")]
    Client(#[from] callov_api::Error),
}

/// API key and base URL for a [`Client`].
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Reads `CALLOV_API_KEY` (required) and `CALLOV_BASE_URL` (optional).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self { api_key, base_url })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn client(&self) -> Result<Client, ConfigError> {
        Ok(Client::with_base_url(&self.base_url, self.api_key.clone())?)
    }
}
