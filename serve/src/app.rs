//! Axum app: state, config, and router.

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use talmud::{corpus, SefariaClient, DEFAULT_BASE_URL};

use super::fetch::{fetch_handler, method_not_allowed};
use super::ui;

/// Server configuration resolved once at startup.
#[derive(Clone, Debug)]
pub struct ServeConfig {
    /// Base URL of the Sefaria texts endpoint. Overridable so tests can point
    /// the server at a mock upstream.
    pub sefaria_base_url: String,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            sefaria_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Builds [`ServeConfig`] from environment variables, falling back to
/// [`Default`] for unset values.
///
/// - `SEFARIA_BASE_URL` (default `https://www.sefaria.org/api/texts/`)
pub fn serve_config_from_env() -> ServeConfig {
    let default = ServeConfig::default();
    ServeConfig {
        sefaria_base_url: std::env::var("SEFARIA_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or(default.sefaria_base_url),
    }
}

/// Shared state, cloned per request via `Arc`.
pub(crate) struct AppState {
    /// Upstream client; holds the connection pool for both fetch attempts.
    pub(crate) client: SefariaClient,
}

/// Builds the router: browser UI, fetch endpoint, corpus tables, health.
/// `/fetch` answers 405 with a JSON body for anything that is not a POST.
pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/static/script.js", get(ui::script))
        .route("/fetch", post(fetch_handler).fallback(method_not_allowed))
        .route("/corpus", get(corpus_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Tractate names and daf pages for the UI dropdowns.
async fn corpus_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "tractates": &corpus::TRACTATES[..],
        "pages": corpus::pages(),
    }))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
