//! Shared helpers for e2e tests: spawn a mock Sefaria upstream and the server
//! under test, both on random ports, plus small request wrappers.

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;

use serve::ServeConfig;

/// Canned upstream: `Berakhot.2a` resolves directly, `Yoma.2a` only under the
/// `"Bavli "` prefix, everything else is 404. Path extraction percent-decodes,
/// so the prefixed reference arrives with a literal space.
async fn upstream_handler(Path(reference): Path<String>) -> impl IntoResponse {
    eprintln!("[e2e] upstream asked for: {}", reference);
    match reference.as_str() {
        "Berakhot.2a" | "Bavli Yoma.2a" => Json(serde_json::json!({
            "he": ["א.", "ב."],
            "text": ["One.", "Two."],
        }))
        .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Could not find title in reference" })),
        )
            .into_response(),
    }
}

/// Binds the mock upstream to a random port and returns its texts base URL.
pub async fn spawn_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/api/texts/*reference", get(upstream_handler));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api/texts/", addr)
}

/// Spawns the mock upstream plus the server under test. Returns the server's
/// base URL and a client.
pub async fn spawn_server() -> (String, reqwest::Client) {
    let sefaria_base_url = spawn_upstream().await;
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let config = ServeConfig { sefaria_base_url };
    tokio::spawn(serve::run_serve_on_listener(listener, config));
    (format!("http://{}", addr), reqwest::Client::new())
}

/// POSTs a JSON body to `/fetch` and returns the status plus parsed body.
pub async fn post_fetch(
    client: &reqwest::Client,
    base: &str,
    body: serde_json::Value,
) -> (reqwest::StatusCode, serde_json::Value) {
    let response = client
        .post(format!("{}/fetch", base))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    let body: serde_json::Value = response.json().await.unwrap();
    eprintln!("[e2e] received: {} {}", status, body);
    (status, body)
}
