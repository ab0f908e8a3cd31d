//! # laudo-config
//!
//! Layered configuration loading for the LaudoSync client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LAUDOSYNC_*` prefix, `__` as separator)
//! 2. Project-level `.laudosync/config.toml`
//! 3. User-level `~/.config/laudosync/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LAUDOSYNC_API__URL` -> `api.url` and
//! `LAUDOSYNC_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`.
//!
//! # Usage
//!
//! ```no_run
//! use laudo_config::LaudoConfig;
//!
//! let config = LaudoConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url());
//! ```
//!
//! The resulting [`ApiConfig`] is handed to the client explicitly; nothing
//! downstream reads the environment.

mod api;
mod error;
mod general;

pub use api::{ApiConfig, DEFAULT_API_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LaudoConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LaudoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".laudosync/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LAUDOSYNC_").split("__"))
    }

    /// Replace the backend URL (e.g., from a command-line flag) and revalidate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the new URL is invalid.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        self.api.url = url.into();
        self.validate()?;
        Ok(self)
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("laudosync").join("config.toml"))
    }
}
