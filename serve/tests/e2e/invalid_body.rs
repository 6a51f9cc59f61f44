use super::common;

#[tokio::test]
async fn e2e_malformed_body_is_400_json() {
    let (base, client) = common::spawn_server().await;

    let response = client
        .post(format!("{}/fetch", base))
        .header("content-type", "application/json")
        .body("not valid json")
        .send()
        .await
        .unwrap();
    let status = response.status();
    let body: serde_json::Value = response.json().await.unwrap();
    eprintln!("[e2e] received: {} {}", status, body);

    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "Invalid request body" }));
}
