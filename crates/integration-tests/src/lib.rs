//! Integration tests for the SharpStyle storefront.
//!
//! Each test spawns the full router (sessions, middleware, templates) on an
//! ephemeral port and talks to it over HTTP with a cookie-keeping client, so
//! one [`TestApp`] behaves like one visitor.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sharp-style-integration-tests
//! ```

use std::path::PathBuf;

use reqwest::{Client, Response};
use sharp_style_storefront::app;
use sharp_style_storefront::config::StorefrontConfig;
use sharp_style_storefront::services::FixedRandom;
use sharp_style_storefront::state::AppState;

/// Draw that never falls under the default miss rate.
pub const ALWAYS_HIT: f64 = 0.99;

/// Draw that falls under any positive miss rate.
pub const ALWAYS_MISS: f64 = 0.0;

/// A running storefront plus a client holding one visitor's session cookie.
pub struct TestApp {
    pub base_url: String,
    pub client: Client,
}

impl TestApp {
    /// Spawn a storefront whose searches always hit.
    pub async fn spawn() -> Self {
        Self::spawn_with_draw(ALWAYS_HIT).await
    }

    /// Spawn a storefront whose search RNG always returns `draw`.
    pub async fn spawn_with_draw(draw: f64) -> Self {
        let config = StorefrontConfig {
            static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/static"),
            ..StorefrontConfig::default()
        };
        let state = AppState::with_random_source(config, Box::new(FixedRandom(draw)));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app(state))
                .await
                .expect("Test server error");
        });

        let client = Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: format!("http://{addr}"),
            client,
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Plain browser GET.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// GET as issued by HTMX.
    pub async fn get_htmx(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .header("HX-Request", "true")
            .send()
            .await
            .expect("HTMX GET request failed")
    }

    /// Plain form POST.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }

    /// Form POST as issued by HTMX.
    pub async fn post_form_htmx(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .header("HX-Request", "true")
            .form(form)
            .send()
            .await
            .expect("HTMX POST request failed")
    }

    /// GET `path` and return the body, asserting a 200.
    pub async fn page(&self, path: &str) -> String {
        let resp = self.get(path).await;
        assert_eq!(resp.status(), reqwest::StatusCode::OK, "GET {path}");
        resp.text().await.expect("Failed to read response body")
    }
}
