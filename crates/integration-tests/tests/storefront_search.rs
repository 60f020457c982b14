//! Integration tests for the mock search panel.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use sharp_style_integration_tests::{ALWAYS_MISS, TestApp};

#[tokio::test]
async fn test_search_hit_lists_sample_products() {
    let app = TestApp::spawn().await;

    let resp = app.get_htmx("/search?q=jersey").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains(r#"data-state="visible""#));
    for code in ["SJ15", "SJ16", "SJ17"] {
        assert!(body.contains(&format!("Full Sleeve Dawah Jersey - {code}")));
    }
    assert!(body.contains("275৳"));
    assert!(body.contains("<s>550৳</s>"));
    assert!(!body.contains("No results found"));
}

#[tokio::test]
async fn test_sentinel_query_has_no_results() {
    let app = TestApp::spawn().await;

    let body = app.get_htmx("/search?q=NotFound").await.text().await.unwrap();
    assert!(body.contains(r#"No results found for "NotFound""#));
    assert!(body.contains(r#"data-state="visible""#));
    assert!(!body.contains("Dawah Jersey"));
}

#[tokio::test]
async fn test_blank_query_hides_panel() {
    let app = TestApp::spawn().await;

    for path in ["/search?q=", "/search?q=%20%20", "/search"] {
        let body = app.get_htmx(path).await.text().await.unwrap();
        assert!(body.contains(r#"data-state="hidden""#), "{path}");
        assert!(!body.contains("No results found"), "{path}");
        assert!(!body.contains("Dawah Jersey"), "{path}");
    }
}

#[tokio::test]
async fn test_random_miss_shows_no_results() {
    let app = TestApp::spawn_with_draw(ALWAYS_MISS).await;

    let body = app.get_htmx("/search?q=jersey").await.text().await.unwrap();
    assert!(body.contains(r#"No results found for "jersey""#));
}

#[tokio::test]
async fn test_query_is_escaped() {
    let app = TestApp::spawn_with_draw(ALWAYS_MISS).await;

    let body = app
        .get_htmx("/search?q=%3Cscript%3E")
        .await
        .text()
        .await
        .unwrap();
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}
