//! # Logging Endpoint
//!
//! **POST `/api/log`** — validate an action record, stamp it with the
//! current UTC time, and append it as one JSON line to the journal.
//!
//! Validation happens before any filesystem access, with distinct messages
//! for unparseable JSON, non-object bodies, and actions outside
//! `{create, update, submit}`. Extra body fields are accepted but not
//! persisted — the journal format is exactly
//! `{timestamp, action, field?, payload?}`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use csel_core::{LogAction, LogEntry, LogRequest};

use crate::error::ApiError;
use crate::journal::AppendOutcome;
use crate::state::AppState;

/// Success response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LogAckBody {
    /// Always `true` on success.
    pub ok: bool,
    /// Present (and `true`) only when storage was unwritable and the entry
    /// went to the diagnostic channel instead.
    #[serde(rename = "loggedToConsole", skip_serializing_if = "Option::is_none")]
    pub logged_to_console: Option<bool>,
}

impl From<AppendOutcome> for LogAckBody {
    fn from(outcome: AppendOutcome) -> Self {
        Self {
            ok: true,
            logged_to_console: match outcome {
                AppendOutcome::Persisted => None,
                AppendOutcome::Console => Some(true),
            },
        }
    }
}

/// Build the log router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/log", post(append_log))
}

/// POST /api/log — append one audit entry.
#[utoipa::path(
    post,
    path = "/api/log",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Entry appended (or recorded on the diagnostic channel)", body = LogAckBody),
        (status = 400, description = "Malformed JSON, non-object body, or invalid action", body = crate::error::ErrorBody),
        (status = 500, description = "Unexpected failure", body = crate::error::ErrorBody),
    ),
    tag = "log"
)]
pub(crate) async fn append_log(
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<LogAckBody>, ApiError> {
    let value = body
        .map(|Json(v)| v)
        .map_err(|rejection| ApiError::InvalidJson(rejection.body_text()))?;

    let request = parse_log_request(value)?;
    let entry = LogEntry::stamp(request);

    let outcome = state
        .journal
        .append(&entry)
        .await
        .map_err(|e| ApiError::Internal(format!("log entry serialization failed: {e}")))?;

    if outcome == AppendOutcome::Console {
        tracing::warn!(action = %entry.action, "log entry recorded to console only");
    }
    Ok(Json(LogAckBody::from(outcome)))
}

/// Validate the raw body into a [`LogRequest`].
///
/// Rejects non-objects and unknown actions before anything touches the
/// journal. `field` must be a string when present; `payload` is carried
/// through unchanged.
fn parse_log_request(value: serde_json::Value) -> Result<LogRequest, ApiError> {
    let serde_json::Value::Object(body) = value else {
        return Err(ApiError::InvalidFormat(
            "Request body must be an object".to_string(),
        ));
    };

    let action = body
        .get("action")
        .and_then(serde_json::Value::as_str)
        .and_then(LogAction::parse)
        .ok_or_else(|| {
            ApiError::InvalidFormat(
                "Action must be 'create', 'update', or 'submit'".to_string(),
            )
        })?;

    let field = body
        .get("field")
        .and_then(serde_json::Value::as_str)
        .map(String::from);
    let payload = body.get("payload").cloned();

    Ok(LogRequest {
        action,
        field,
        payload,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
