//! Dark-mode toggle handler.

use axum::{
    http::{HeaderMap, StatusCode, Uri},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::components::NavigationBar;
use crate::error::{Result, add_breadcrumb};
use crate::routes::{HX_REFRESH, is_htmx};
use crate::storage::SessionStorage;

/// Flip the visitor's theme.
///
/// HTMX requests get `HX-Refresh` so the page re-renders with the new
/// `data-theme`; plain form posts are redirected home.
///
/// # Errors
///
/// Returns `AppError::Storage` if the preference cannot be written. The
/// theme is left as it was.
#[instrument(skip(session, headers))]
pub async fn toggle(session: Session, uri: Uri, headers: HeaderMap) -> Result<Response> {
    let store = SessionStorage::new(session);
    let mut nav = NavigationBar::mount(Some(&store), uri.path()).await;

    let dark = nav.toggle_dark_mode(Some(&store)).await?;
    add_breadcrumb("theme", "Toggled dark mode", Some(&[("theme", nav.theme_attr())]));
    tracing::info!(dark, "Theme toggled");

    if is_htmx(&headers) {
        Ok((AppendHeaders([(HX_REFRESH, "true")]), StatusCode::NO_CONTENT).into_response())
    } else {
        Ok(Redirect::to("/").into_response())
    }
}
