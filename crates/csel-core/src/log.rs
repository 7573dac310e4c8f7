//! # Audit Log Wire Format
//!
//! The action record clients POST to the logging endpoint, and the stamped
//! entry the endpoint appends to its journal. Entries are append-only: once
//! written they are never mutated or removed.
//!
//! All timestamps are UTC and serialize as ISO 8601 with a `Z` suffix.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::slot::SlotKey;

// ---------------------------------------------------------------------------
// LogAction
// ---------------------------------------------------------------------------

/// The user action an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogAction {
    /// A contact was created through the draft flow.
    Create,
    /// An existing contact was edited through the draft flow.
    Update,
    /// The full selection state was submitted.
    Submit,
}

impl LogAction {
    /// Return the string value used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Submit => "submit",
        }
    }

    /// Parse a wire value. Returns `None` for anything outside the action set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "submit" => Some(Self::Submit),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LogRequest
// ---------------------------------------------------------------------------

/// The request body clients POST to the logging endpoint.
///
/// `field` is a plain string on the wire; typed producers go through
/// [`LogRequest::contact_saved`], which writes the slot's wire name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    /// The recorded action.
    pub action: LogAction,
    /// The slot the action applies to (create/update only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Action payload: the saved contact, or the full selection state for
    /// submits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl LogRequest {
    /// Build a create/update record for one saved contact.
    pub fn contact_saved(action: LogAction, slot: SlotKey, payload: serde_json::Value) -> Self {
        Self {
            action,
            field: Some(slot.as_str().to_string()),
            payload: Some(payload),
        }
    }

    /// Build a submit record carrying the full selection state.
    pub fn submission(payload: serde_json::Value) -> Self {
        Self {
            action: LogAction::Submit,
            field: None,
            payload: Some(payload),
        }
    }
}

// ---------------------------------------------------------------------------
// LogEntry
// ---------------------------------------------------------------------------

/// One stamped, newline-terminated journal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// UTC timestamp assigned by the endpoint at append time.
    pub timestamp: DateTime<Utc>,
    /// The recorded action.
    pub action: LogAction,
    /// The slot the action applies to, when present in the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// The request payload, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl LogEntry {
    /// Stamp a request with the current UTC time.
    pub fn stamp(request: LogRequest) -> Self {
        Self {
            timestamp: Utc::now(),
            action: request.action,
            field: request.field,
            payload: request.payload,
        }
    }

    /// Serialize to a single newline-terminated JSON line.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}
