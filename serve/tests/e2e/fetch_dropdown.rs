use super::common;
use serde_json::json;

#[tokio::test]
async fn e2e_dropdown_single_section() {
    let (base, client) = common::spawn_server().await;

    let (status, body) = common::post_fetch(
        &client,
        &base,
        json!({ "input_method": "dropdown", "tractate": "Berakhot", "page": "2a", "section": "1" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "span": "Berakhot 2a:1",
            "sections": [{ "hebrew": ["א."], "english": ["One."] }],
        })
    );
}

#[tokio::test]
async fn e2e_dropdown_whole_page() {
    let (base, client) = common::spawn_server().await;

    let (status, body) = common::post_fetch(
        &client,
        &base,
        json!({ "input_method": "dropdown", "tractate": "Berakhot", "page": "2a" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["span"], "Berakhot 2a");
    assert_eq!(body["sections"].as_array().unwrap().len(), 2);
    assert_eq!(body["sections"][1]["english"], json!(["Two."]));
}

#[tokio::test]
async fn e2e_out_of_range_section_is_empty_success() {
    let (base, client) = common::spawn_server().await;

    let (status, body) = common::post_fetch(
        &client,
        &base,
        json!({ "input_method": "dropdown", "tractate": "Berakhot", "page": "2a", "section": "9" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["span"], "Berakhot 2a:9");
    assert_eq!(body["sections"], json!([]));
}

#[tokio::test]
async fn e2e_non_numeric_section_fetches_whole_page() {
    let (base, client) = common::spawn_server().await;

    let (status, body) = common::post_fetch(
        &client,
        &base,
        json!({ "input_method": "dropdown", "tractate": "Berakhot", "page": "2a", "section": "abc" }),
    )
    .await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["span"], "Berakhot 2a");
    assert_eq!(body["sections"].as_array().unwrap().len(), 2);
}
