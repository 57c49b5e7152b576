//! API boundary configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle is static, so the API base address is fixed at compile
//! time from `STARTEASE_API_URL`. Everything that talks to the network reads
//! it through [`ApiConfig`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Compile-time override for the API base address.
const API_URL_OVERRIDE: Option<&str> = option_env!("STARTEASE_API_URL");

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("api base url is empty")]
    EmptyBaseUrl,
    #[error("api base url must start with http:// or https://, got {0}")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build the config baked into this bundle.
    ///
    /// An invalid override is logged and replaced by the default so a bad
    /// build flag never leaves the client without an API.
    pub fn from_build_env() -> Self {
        match Self::from_raw(API_URL_OVERRIDE) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring STARTEASE_API_URL: {e}");
                Self::default()
            }
        }
    }

    /// Parse an optional raw base address.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the value is blank or not an http(s) URL.
    pub fn from_raw(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(trimmed.to_owned()));
        }
        Ok(Self { base_url: trimmed.trim_end_matches('/').to_owned() })
    }

    /// Join an API path (`/users/me/`) onto the base address.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
