//! Audit backend connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Local backend address used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

fn default_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the audit backend (e.g., `https://api.laudosync.example`).
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Base URL without trailing slashes.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Join an absolute route path (starting with `/`) onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }

    /// Check that the URL is non-empty and uses an HTTP scheme.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for empty or non-HTTP URLs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.url".into(),
                reason: format!("'{url}' must start with http:// or https://"),
            });
        }
        Ok(())
    }
}
