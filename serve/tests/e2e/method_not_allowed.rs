use super::common;

#[tokio::test]
async fn e2e_non_post_method_is_405_json() {
    let (base, client) = common::spawn_server().await;

    for request in [
        client.get(format!("{}/fetch", base)),
        client.put(format!("{}/fetch", base)).body("{}"),
        client.delete(format!("{}/fetch", base)),
    ] {
        let response = request.send().await.unwrap();
        let status = response.status();
        let body: serde_json::Value = response.json().await.unwrap();
        eprintln!("[e2e] received: {} {}", status, body);

        assert_eq!(status, reqwest::StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, serde_json::json!({ "error": "Method not allowed" }));
    }
}
