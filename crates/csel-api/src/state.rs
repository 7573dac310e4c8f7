//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. The journal is the only shared resource; the
//! endpoint is otherwise stateless across requests.

use std::sync::Arc;

use crate::journal::Journal;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The append-only journal writer.
    pub journal: Arc<Journal>,
}

impl AppState {
    /// Create state around a journal.
    pub fn new(journal: Journal) -> Self {
        Self {
            journal: Arc::new(journal),
        }
    }
}
