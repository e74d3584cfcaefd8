use picurl::domain::{
    EMPTY_URL_MESSAGE, INVALID_PICTURE_ID_MESSAGE, INVALID_URL_MESSAGE, MISSING_DIMENSION_MESSAGE,
    NON_NUMERIC_DIMENSION_MESSAGE,
};

use crate::helpers::{RenderedPage, spawn_app};

#[tokio::test]
async fn page_renders_every_element_empty() {
    let app = spawn_app().await;

    let response = app.send_get("").await;
    assert_eq!(response.status().as_u16(), 200);
    let page = RenderedPage::parse(&response.text().await.unwrap());

    assert!(page.has_element("generate"));
    for id in ["photo-url", "width", "height", "api-url"] {
        assert_eq!(page.value_of(id).as_deref(), Some(""), "#{id}");
    }
    assert!(page.alerts().is_empty());
}

#[tokio::test]
async fn valid_url_populates_api_url_without_alert() {
    let app = spawn_app().await;

    let page = app
        .click_generate(&[
            ("photo-url", "https://unsplash.com/photos/abc123"),
            ("width", ""),
            ("height", ""),
            ("api-url", ""),
        ])
        .await;

    assert!(page.alerts().is_empty());
    assert_eq!(
        page.value_of("api-url").as_deref(),
        Some("https://source.unsplash.com/abc123")
    );
    assert_eq!(
        page.value_of("photo-url").as_deref(),
        Some("https://unsplash.com/photos/abc123")
    );
    assert_eq!(
        app.clipboard.writes(),
        ["https://source.unsplash.com/abc123"]
    );
}

#[tokio::test]
async fn width_and_height_are_appended() {
    let app = spawn_app().await;

    let page = app
        .click_generate(&[
            ("photo-url", "https://unsplash.com/photos/abc123"),
            ("width", "100"),
            ("height", "200"),
        ])
        .await;

    assert_eq!(
        page.value_of("api-url").as_deref(),
        Some("https://source.unsplash.com/abc123/100x200")
    );
}

#[tokio::test]
async fn invalid_url_alerts_once_and_keeps_the_previous_output() {
    let app = spawn_app().await;

    let page = app
        .click_generate(&[
            ("photo-url", "https://example.com/photos/abc123"),
            ("api-url", "https://source.unsplash.com/previous"),
        ])
        .await;

    assert_eq!(page.alerts(), [INVALID_URL_MESSAGE]);
    assert_eq!(
        page.value_of("api-url").as_deref(),
        Some("https://source.unsplash.com/previous")
    );
}

#[tokio::test]
async fn stale_output_is_still_copied_after_a_rejected_click() {
    let app = spawn_app().await;

    app.click_generate(&[
        ("photo-url", "https://unsplash.com/photos/abc/"),
        ("api-url", "https://source.unsplash.com/previous"),
    ])
    .await;

    assert_eq!(
        app.clipboard.writes(),
        ["https://source.unsplash.com/previous"]
    );
}

#[tokio::test]
async fn each_rejection_shows_its_own_message() {
    let app = spawn_app().await;
    let test_cases = [
        (
            vec![("photo-url", "")],
            EMPTY_URL_MESSAGE,
            "empty photo url",
        ),
        (
            vec![("photo-url", "https://unsplash.com/photos/abc/")],
            INVALID_PICTURE_ID_MESSAGE,
            "trailing slash",
        ),
        (
            vec![
                ("photo-url", "https://unsplash.com/photos/abc"),
                ("width", "100"),
            ],
            MISSING_DIMENSION_MESSAGE,
            "width without height",
        ),
        (
            vec![
                ("photo-url", "https://unsplash.com/photos/abc"),
                ("width", "10a"),
                ("height", "20"),
            ],
            NON_NUMERIC_DIMENSION_MESSAGE,
            "non numeric width",
        ),
    ];

    for (fields, message, description) in test_cases {
        let page = app.click_generate(&fields).await;

        assert_eq!(page.alerts(), [message], "Unexpected alerts for {description}");
        assert_eq!(
            page.value_of("api-url").as_deref(),
            Some(""),
            "Output changed for {description}"
        );
    }
}

#[tokio::test]
async fn missing_form_fields_read_as_empty() {
    let app = spawn_app().await;

    let page = app.click_generate(&[]).await;

    assert_eq!(page.alerts(), [EMPTY_URL_MESSAGE]);
    assert_eq!(app.clipboard.writes(), [""]);
}
