//! # csel-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the logging endpoint.
//! Binds to a configurable port (default 8080).

use csel_api::{AppState, Journal};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    // Journal location from CSEL_LOG_DIR, defaulting to ./logs. Ephemeral
    // runtimes should point CSEL_LOG_DIR at a temp directory; an unwritable
    // journal degrades to console records rather than failing requests.
    let journal = Journal::from_env();
    tracing::info!(path = %journal.path().display(), "journal configured");

    let state = AppState::new(journal);
    let app = csel_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("csel-api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
