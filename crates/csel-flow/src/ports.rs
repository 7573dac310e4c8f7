//! Injected dependencies for the controllers.
//!
//! Object-safe async ports so the picker and flow can be driven in tests
//! without a browser or network: a contact lookup and a change notifier.

use async_trait::async_trait;

use csel_core::{Contact, LogRequest};
use csel_search::{SearchApiError, SearchClient};

use crate::notify::{LogAck, NotifyError};

/// Contact lookup port. Production implementation: [`SearchClient`].
#[async_trait]
pub trait Searcher: Send + Sync {
    /// Search contacts by free-text query.
    async fn search(&self, query: &str) -> Result<Vec<Contact>, SearchApiError>;
}

#[async_trait]
impl Searcher for SearchClient {
    async fn search(&self, query: &str) -> Result<Vec<Contact>, SearchApiError> {
        SearchClient::search(self, query).await
    }
}

/// Change notification port targeting the logging endpoint.
///
/// Production implementation: [`crate::notify::HttpChangeNotifier`].
#[async_trait]
pub trait ChangeNotifier: Send + Sync {
    /// Deliver one action record to the logging endpoint.
    async fn notify(&self, request: &LogRequest) -> Result<LogAck, NotifyError>;
}
