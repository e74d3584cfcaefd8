use picurl::domain::{INVALID_URL_MESSAGE, NON_NUMERIC_DIMENSION_MESSAGE};
use serde_json::{Value, json};

use crate::helpers::spawn_app;

#[tokio::test]
async fn valid_request_returns_generated_url() {
    let app = spawn_app().await;

    let response = app
        .send_post(
            "v1/api_url",
            &json!({
                "photo_url": "https://unsplash.com/photos/abc123",
                "width": "100",
                "height": "200"
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["api_url"], "https://source.unsplash.com/abc123/100x200");
}

#[tokio::test]
async fn dimensions_may_be_omitted() {
    let app = spawn_app().await;

    let response = app
        .send_post(
            "v1/api_url",
            &json!({ "photo_url": "https://unsplash.com/photos/abc123" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["api_url"], "https://source.unsplash.com/abc123");
}

#[tokio::test]
async fn invalid_input_returns_400_with_the_message() {
    let app = spawn_app().await;
    let test_cases = [
        (
            json!({ "photo_url": "https://example.com/abc123" }),
            INVALID_URL_MESSAGE,
        ),
        (
            json!({
                "photo_url": "https://unsplash.com/photos/abc123",
                "width": "1e3",
                "height": "200"
            }),
            NON_NUMERIC_DIMENSION_MESSAGE,
        ),
    ];

    for (payload, message) in test_cases {
        let response = app.send_post("v1/api_url", &payload).await;

        assert_eq!(response.status().as_u16(), 400, "payload: {payload}");
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["code"], 400);
        assert_eq!(body["message"], message);
    }
}

#[tokio::test]
async fn json_api_never_copies() {
    let app = spawn_app().await;

    app.send_post(
        "v1/api_url",
        &json!({ "photo_url": "https://unsplash.com/photos/abc123" }),
    )
    .await;

    assert!(app.clipboard.writes().is_empty());
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = spawn_app().await;

    let response = app.send_post("v1/api_url", &json!({ "width": "1" })).await;

    assert_eq!(response.status().as_u16(), 400);
}
