//! SharpStyle storefront shell.
//!
//! Server-rendered navigation bar and page footer for the SharpStyle shop:
//! cart drawer backed by the visitor's session, mock product search, dark
//! mode, scroll-aware header and the newsletter form. HTMX drives the
//! interactive fragments.
//!
//! The router is exposed through [`app`] so it can be exercised by the
//! integration tests without going through `main`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;

use axum::{Router, body::Body, http::Request, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use sharp_style_core::types::cart::PLACEHOLDER_IMAGE;

use crate::state::AppState;

/// Build the storefront router with its middleware stack.
///
/// Sentry layers are not included; `main` adds them around this router.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());
    let static_dir = &state.config().static_dir;
    let placeholder = ServeFile::new(static_dir.join("placeholder.svg"));
    let static_files = ServeDir::new(static_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .route_service(PLACEHOLDER_IMAGE, placeholder)
        .nest_service("/static", static_files)
        .fallback(routes::not_found)
        .layer(session_layer)
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use crate::config::StorefrontConfig;

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(AppState::new(StorefrontConfig::default()));

        let response = app.oneshot(request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_fallback_is_not_found() {
        let app = app(AppState::new(StorefrontConfig::default()));

        let response = app.oneshot(request("/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }
}
