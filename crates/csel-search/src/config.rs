//! Search service client configuration.
//!
//! Defaults point at the public demo endpoint. Override via environment
//! variables or explicit construction for tests.

use url::Url;

/// Configuration for connecting to the user-search service.
#[derive(Debug, Clone)]
pub struct SearchApiConfig {
    /// Base URL of the search service.
    /// Default: <https://dummyjson.com>
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl SearchApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CSEL_SEARCH_URL` (default: `https://dummyjson.com`)
    /// - `CSEL_SEARCH_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("CSEL_SEARCH_URL", "https://dummyjson.com")?,
            timeout_secs: std::env::var("CSEL_SEARCH_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        })
    }

    /// Create a configuration pointing at a local mock server (for tests).
    pub fn local_mock(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(base_url)
                .map_err(|e| ConfigError::InvalidUrl(base_url.to_string(), e.to_string()))?,
            timeout_secs: 5,
        })
    }
}

impl Default for SearchApiConfig {
    fn default() -> Self {
        Self {
            // The default URL is a compile-time constant and always parses.
            base_url: Url::parse("https://dummyjson.com")
                .unwrap_or_else(|_| unreachable!("default search URL is valid")),
            timeout_secs: 10,
        }
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A URL failed to parse.
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
