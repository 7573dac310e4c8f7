//! # csel-search — Typed Client for the External User-Search Service
//!
//! Provides typed access to the third-party user-search API the picker
//! queries while the user types. This crate is the only path through which
//! the stack talks to the search service; response DTOs are resilient to
//! schema drift (`#[serde(default)]`, no `deny_unknown_fields`) and every
//! result is mapped into a [`Contact`] with a `remote-{id}` synthetic
//! identifier.
//!
//! ## API Path
//!
//! `GET {base_url}/users/search?q={query}` — free-text query, one page of
//! results, no pagination handling (the picker only ever shows the first
//! page).
//!
//! [`Contact`]: csel_core::Contact

pub mod config;
pub mod error;
pub mod users;

pub use config::{ConfigError, SearchApiConfig};
pub use error::SearchApiError;
pub use users::{RemoteUser, UserSearchResponse};

use std::time::Duration;

use csel_core::Contact;

/// Client for the external user-search service.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl SearchClient {
    /// Create a new client from configuration.
    pub fn new(config: SearchApiConfig) -> Result<Self, SearchApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Search users by free-text query and map the results into contacts.
    ///
    /// Calls `GET {base_url}/users/search?q={query}`. The caller is expected
    /// to have trimmed the query; empty queries are a client-side concern
    /// (the picker never issues them).
    pub async fn search(&self, query: &str) -> Result<Vec<Contact>, SearchApiError> {
        let endpoint = "GET /users/search";
        let url = self
            .base_url
            .join("users/search")
            .map_err(|e| SearchApiError::Config(ConfigError::InvalidUrl(
                "users/search".to_string(),
                e.to_string(),
            )))?;

        let resp = self
            .http
            .get(url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| SearchApiError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchApiError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let parsed: UserSearchResponse =
            resp.json().await.map_err(|e| SearchApiError::Deserialization {
                endpoint: endpoint.into(),
                source: e,
            })?;

        tracing::debug!(query, results = parsed.users.len(), "user search completed");
        Ok(parsed.users.into_iter().map(users::into_contact).collect())
    }
}
