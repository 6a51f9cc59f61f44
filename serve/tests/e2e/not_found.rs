use super::common;
use serde_json::json;

#[tokio::test]
async fn e2e_both_upstream_attempts_failing_is_404() {
    let (base, client) = common::spawn_server().await;

    let (status, body) = common::post_fetch(
        &client,
        &base,
        json!({ "input_method": "dropdown", "tractate": "Nowhere", "page": "2a" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Text not found" }));
}
