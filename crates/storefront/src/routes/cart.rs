//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the visitor's session under `cartItems`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::OriginalUri,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use sharp_style_core::CartItemId;
use tower_sessions::Session;
use tracing::instrument;

use crate::components::NavigationBar;
use crate::error::{Result, add_breadcrumb};
use crate::routes::{CART_UPDATED_EVENT, HX_TRIGGER, is_htmx};
use crate::storage::SessionStorage;

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: CartItemId,
}

/// Cart drawer fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "fragments/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub nav: NavigationBar,
}

/// Render the open cart drawer.
#[instrument(skip(session))]
pub async fn drawer(session: Session, OriginalUri(uri): OriginalUri) -> CartDrawerTemplate {
    let store = SessionStorage::new(session);
    let mut nav = NavigationBar::mount(Some(&store), uri.path()).await;
    nav.open_cart();

    CartDrawerTemplate { nav }
}

/// Remove a line from the cart (HTMX).
///
/// Returns the refreshed drawer and fires `cart-updated`. Plain form posts
/// are redirected to the cart page.
///
/// # Errors
///
/// Returns `AppError::Storage` if the updated cart cannot be written.
#[instrument(skip_all, fields(id = %form.id))]
pub async fn remove(
    session: Session,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let store = SessionStorage::new(session);
    let mut nav = NavigationBar::mount(Some(&store), uri.path()).await;

    nav.remove_from_cart(Some(&store), form.id).await?;

    let item_id = form.id.to_string();
    add_breadcrumb("cart", "Removed cart item", Some(&[("item_id", item_id.as_str())]));
    tracing::info!(remaining = nav.cart_len(), "Cart item removed");

    if !is_htmx(&headers) {
        return Ok(Redirect::to("/cart").into_response());
    }

    nav.open_cart();
    Ok((
        AppendHeaders([(HX_TRIGGER, CART_UPDATED_EVENT)]),
        CartDrawerTemplate { nav },
    )
        .into_response())
}
