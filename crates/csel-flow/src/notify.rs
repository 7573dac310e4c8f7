//! Change notification to the logging endpoint.
//!
//! The HTTP implementation POSTs action records to `POST {base}/api/log` and
//! drills into error responses for the most specific message available:
//! a server-provided `message`, then `error`, then the bare status.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use csel_core::LogRequest;

use crate::ports::ChangeNotifier;

/// Acknowledgement from the logging endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogAck {
    /// True when the server could not reach its journal and recorded the
    /// entry on its diagnostic channel instead.
    pub logged_to_console: bool,
}

/// Errors delivering a record to the logging endpoint.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The request never completed (connect, timeout).
    #[error("log request failed: {source}")]
    Transport {
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status or `ok: false`.
    #[error("logging endpoint rejected the request ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Most specific message the response offered.
        message: String,
    },

    /// The endpoint answered 2xx but the body was unreadable.
    #[error("failed to parse server response")]
    BadResponse,

    /// The base URL could not be extended with the log path.
    #[error("invalid logging endpoint URL: {0}")]
    InvalidUrl(String),
}

/// The `{ok, error?, message?, loggedToConsole?}` response body.
#[derive(Debug, Deserialize)]
struct LogResponseBody {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "loggedToConsole")]
    logged_to_console: bool,
}

impl LogResponseBody {
    fn best_message(&self, status: u16) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| format!("Server responded with status {status}"))
    }
}

// ---------------------------------------------------------------------------
// HttpChangeNotifier
// ---------------------------------------------------------------------------

/// Reqwest-backed notifier for the logging endpoint.
#[derive(Debug, Clone)]
pub struct HttpChangeNotifier {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpChangeNotifier {
    /// Create a notifier for the server at `base_url`.
    pub fn new(base_url: Url) -> Result<Self, NotifyError> {
        let endpoint = base_url
            .join("api/log")
            .map_err(|e| NotifyError::InvalidUrl(e.to_string()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }
}

#[async_trait]
impl ChangeNotifier for HttpChangeNotifier {
    async fn notify(&self, request: &LogRequest) -> Result<LogAck, NotifyError> {
        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|source| NotifyError::Transport { source })?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            // Prefer the server's own message when the error body parses.
            let message = match resp.json::<LogResponseBody>().await {
                Ok(body) => body.best_message(status),
                Err(_) => format!("Server responded with status {status}"),
            };
            return Err(NotifyError::Rejected { status, message });
        }

        let body: LogResponseBody =
            resp.json().await.map_err(|_| NotifyError::BadResponse)?;
        if !body.ok {
            return Err(NotifyError::Rejected {
                status,
                message: body.best_message(status),
            });
        }
        Ok(LogAck {
            logged_to_console: body.logged_to_console,
        })
    }
}

// ---------------------------------------------------------------------------
// NullNotifier
// ---------------------------------------------------------------------------

/// A notifier that drops every record. For tests and offline operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

#[async_trait]
impl ChangeNotifier for NullNotifier {
    async fn notify(&self, _request: &LogRequest) -> Result<LogAck, NotifyError> {
        Ok(LogAck {
            logged_to_console: false,
        })
    }
}
