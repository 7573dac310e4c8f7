//! # OpenAPI Document
//!
//! Auto-generated OpenAPI 3.1 spec for the logging endpoint, served at
//! `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// The API document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact Selection Stack — Logging API",
        description = "Append-only audit logging for the contact selection flow."
    ),
    paths(crate::routes::log::append_log),
    components(schemas(crate::routes::log::LogAckBody, crate::error::ErrorBody)),
    tags((name = "log", description = "Audit log append"))
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
