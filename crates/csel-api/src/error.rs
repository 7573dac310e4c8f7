//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every error maps to the endpoint's `{ok: false, error, message}` wire
//! body. Internal failure detail is logged for operators but never returned
//! to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always `false` for errors.
    pub ok: bool,
    /// Short error label, e.g. "Invalid request format".
    pub error: String,
    /// Human-readable detail.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body was not parseable JSON (400).
    #[error("invalid JSON in request body: {0}")]
    InvalidJson(String),

    /// Request body parsed but is not a valid log request (400).
    #[error("invalid request format: {0}")]
    InvalidFormat(String),

    /// Unexpected failure while handling the request (500). The inner
    /// message is logged but not returned to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Return the HTTP status and the short error label for this error.
    fn status_and_label(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidJson(_) => (StatusCode::BAD_REQUEST, "Invalid JSON in request body"),
            Self::InvalidFormat(_) => (StatusCode::BAD_REQUEST, "Invalid request format"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to write log entry"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, label) = self.status_and_label();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::InvalidJson(detail) | Self::InvalidFormat(detail) => detail.clone(),
            Self::Internal(_) => {
                tracing::error!(error = %self, "internal error handling log request");
                "An internal error occurred".to_string()
            }
        };

        let body = ErrorBody {
            ok: false,
            error: label.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
