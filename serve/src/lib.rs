//! HTTP server for the Talmud passage viewer (axum).
//!
//! Serves the browser UI at `/`, the fetch endpoint at `POST /fetch`, plus
//! `/corpus` and `/health`. Listens on http://127.0.0.1:8080 by default.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`ServeConfig`].

mod app;
mod fetch;
mod ui;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use app::{router, AppState};
pub use app::{serve_config_from_env, ServeConfig};
use talmud::SefariaClient;

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8080";

/// Runs the server on an existing listener. Used by tests (bind to
/// 127.0.0.1:0 then pass the listener in).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    config: ServeConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("talmud server listening on http://{}", addr);

    let client = SefariaClient::with_base_url(&config.sefaria_base_url)?;
    let state = Arc::new(AppState { client });

    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Runs the server. Listens on `addr` (default 127.0.0.1:8080).
pub async fn run_serve(
    addr: Option<&str>,
    config: ServeConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = addr.unwrap_or(DEFAULT_HTTP_ADDR);
    let listener = TcpListener::bind(addr).await?;
    run_serve_on_listener(listener, config).await
}
