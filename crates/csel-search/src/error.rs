//! Structured errors for the search client.
//!
//! Every variant carries the endpoint that failed so operators can diagnose
//! which call misbehaved without request tracing.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors from the user-search client.
#[derive(Debug, Error)]
pub enum SearchApiError {
    /// Client configuration was invalid.
    #[error("search client configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The HTTP request itself failed (connect, timeout, abort).
    #[error("HTTP request failed for {endpoint}: {source}")]
    Http {
        /// The logical endpoint, e.g. `GET /users/search`.
        endpoint: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("search service returned {status} for {endpoint}: {body}")]
    Api {
        /// The logical endpoint.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body text, best-effort.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        /// The logical endpoint.
        endpoint: String,
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_context() {
        let err = SearchApiError::Api {
            endpoint: "GET /users/search".into(),
            status: 503,
            body: "maintenance".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("GET /users/search"));
        assert!(msg.contains("maintenance"));
    }

    #[test]
    fn config_error_converts() {
        let err = SearchApiError::from(ConfigError::InvalidUrl("X".into(), "bad".into()));
        assert!(err.to_string().contains("configuration"));
    }
}
