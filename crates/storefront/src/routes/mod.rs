//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Pages (navbar + footer shell)
//! GET  /products               - Products page
//! GET  /account                - Account page
//! GET  /wishlist               - Wishlist page
//! GET  /cart                   - Cart page
//! GET  /checkout               - Checkout page
//!
//! # Search (HTMX fragments)
//! GET  /search?q=              - Results panel
//!
//! # Cart (HTMX fragments)
//! GET  /cart/drawer            - Open cart drawer
//! POST /cart/remove            - Remove line (returns drawer, triggers cart-updated)
//!
//! # Theme
//! POST /theme/toggle           - Flip dark mode (HX-Refresh)
//!
//! # Newsletter (HTMX fragments)
//! POST /newsletter             - Subscribe (returns confirmation or form)
//! GET  /newsletter/form        - Input-ready form
//! ```

pub mod cart;
pub mod newsletter;
pub mod pages;
pub mod search;
pub mod theme;

use axum::{
    Router,
    http::{HeaderMap, Uri},
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Response header asking HTMX to fire a client-side event.
pub const HX_TRIGGER: &str = "HX-Trigger";

/// Response header asking HTMX to reload the whole page.
pub const HX_REFRESH: &str = "HX-Refresh";

/// Event fired after the cart contents change.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// Whether the request was issued by HTMX rather than a plain form post.
#[must_use]
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .is_some_and(|value| value.as_bytes() == b"true")
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::cart))
        .route("/drawer", get(cart::drawer))
        .route("/remove", post(cart::remove))
}

/// Create the newsletter routes router.
pub fn newsletter_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(newsletter::subscribe))
        .route("/form", get(newsletter::form))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/products", get(pages::products))
        .route("/account", get(pages::account))
        .route("/wishlist", get(pages::wishlist))
        .route("/checkout", get(pages::checkout))
        .route("/search", get(search::results))
        .route("/theme/toggle", post(theme::toggle))
        .nest("/cart", cart_routes())
        .nest("/newsletter", newsletter_routes())
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
