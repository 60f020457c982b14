//! Integration tests for the dark-mode toggle.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use sharp_style_integration_tests::TestApp;

const LIGHT: &str = r#"<html lang="en" data-theme="light">"#;
const DARK: &str = r#"<html lang="en" data-theme="dark">"#;

#[tokio::test]
async fn test_toggle_with_htmx_refreshes() {
    let app = TestApp::spawn().await;
    assert!(app.page("/").await.contains(LIGHT));

    let resp = app.post_form_htmx("/theme/toggle", &[]).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(resp.headers()["hx-refresh"], "true");

    assert!(app.page("/").await.contains(DARK));
}

#[tokio::test]
async fn test_double_toggle_restores_theme() {
    let app = TestApp::spawn().await;

    app.post_form_htmx("/theme/toggle", &[]).await;
    app.post_form_htmx("/theme/toggle", &[]).await;

    assert!(app.page("/products").await.contains(LIGHT));
}

#[tokio::test]
async fn test_plain_form_toggle_redirects_home() {
    let app = TestApp::spawn().await;

    let resp = app.post_form("/theme/toggle", &[]).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/");

    assert!(app.page("/").await.contains(DARK));
}

#[tokio::test]
async fn test_theme_survives_cart_changes() {
    let app = TestApp::spawn().await;
    app.post_form_htmx("/theme/toggle", &[]).await;
    app.post_form_htmx("/cart/remove", &[("id", "1")]).await;

    let body = app.page("/cart").await;
    assert!(body.contains(DARK));
    assert!(body.contains("Your cart is empty."));
}
