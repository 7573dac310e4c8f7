//! # csel-api — Logging Endpoint for the Contact Selection Stack
//!
//! A small Axum application exposing the audit logging endpoint the client
//! flow POSTs to. Stateless across requests apart from the shared journal
//! file; no request affects another's outcome.
//!
//! ## API Surface
//!
//! | Method | Path                | Purpose                          |
//! |--------|---------------------|----------------------------------|
//! | POST   | `/api/log`          | Append one audit entry           |
//! | GET    | `/openapi.json`     | OpenAPI 3.1 document             |
//! | GET    | `/health/liveness`  | Process liveness probe           |
//! | GET    | `/health/readiness` | Readiness probe                  |
//!
//! ## Error Contract
//!
//! All errors map to `{ok: false, error, message}` via [`ApiError`];
//! success bodies are `{ok: true}` with `loggedToConsole: true` added when
//! storage was unwritable and the entry went to the diagnostic channel.

pub mod error;
pub mod journal;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use journal::{AppendOutcome, Journal};
pub use state::AppState;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Assemble the application router.
///
/// Health probes are mounted outside the traced API router so probe noise
/// stays out of the request logs.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::log::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the endpoint has no dependencies to wait on.
async fn readiness() -> &'static str {
    "ready"
}
