//! Navigation bar component.
//!
//! Owns the header's UI state: cart drawer, mobile menu, search session,
//! dark-mode setting and scroll visibility. Storage-backed pieces are loaded
//! in [`NavigationBar::mount`]; everything else starts closed.
//!
//! A bar is mounted fresh for every request, so rendered pages always start
//! visible with the menu closed and the search panel hidden. The event
//! methods (`on_scroll`, `on_pointer_down`, `focus_search`, `open_menu`,
//! `close_menu`) model what `static/js/navbar.js` does in the browser after
//! the page loads. The script flips the same `data-visibility` and
//! `data-state` attributes these methods compute.

use sharp_style_core::{CartItem, CartItemId, Price};

use crate::components::trackers::{Dismissal, PointerDown, ScrollTracker};
use crate::models::navigation::{self, NavLinkView};
use crate::services::cart;
use crate::services::{DarkModeSetting, MockSearch, RandomSource, SearchSession};
use crate::storage::{KeyValueStore, StorageError};

/// Header state for one page view.
#[derive(Debug, Clone, Default)]
pub struct NavigationBar {
    current_path: String,
    cart: Vec<CartItem>,
    cart_open: bool,
    menu_open: bool,
    search: SearchSession,
    dark_mode: DarkModeSetting,
    scroll: ScrollTracker,
}

impl NavigationBar {
    /// Mount the bar for `current_path`, loading the cart and theme.
    pub async fn mount<S: KeyValueStore>(store: Option<&S>, current_path: &str) -> Self {
        let cart = cart::load_initial_cart(store).await;
        let dark_mode = DarkModeSetting::load(store).await;

        Self {
            current_path: current_path.to_string(),
            cart,
            dark_mode,
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Category links with their active state.
    #[must_use]
    pub fn categories(&self) -> Vec<NavLinkView> {
        navigation::CATEGORIES
            .into_iter()
            .map(|entry| NavLinkView::resolve(entry, &self.current_path))
            .collect()
    }

    #[must_use]
    pub fn account_link(&self) -> NavLinkView {
        NavLinkView::resolve(navigation::ACCOUNT, &self.current_path)
    }

    #[must_use]
    pub fn wishlist_link(&self) -> NavLinkView {
        NavLinkView::resolve(navigation::WISHLIST, &self.current_path)
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Number of lines, as shown on the badge.
    #[must_use]
    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    /// Units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        cart::item_count(&self.cart)
    }

    #[must_use]
    pub fn subtotal(&self) -> Price {
        cart::compute_subtotal(&self.cart)
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub const fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub const fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Remove a line and persist the rest.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails; the cart is unchanged.
    pub async fn remove_from_cart<S: KeyValueStore>(
        &mut self,
        store: Option<&S>,
        id: CartItemId,
    ) -> Result<(), StorageError> {
        self.cart = cart::remove_item(store, &self.cart, id).await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Mobile menu
    // -------------------------------------------------------------------------

    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub const fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub const fn close_menu(&mut self) {
        self.menu_open = false;
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    #[must_use]
    pub const fn search(&self) -> &SearchSession {
        &self.search
    }

    pub fn submit_search(&mut self, query: &str, engine: &MockSearch, rng: &mut dyn RandomSource) {
        self.search.submit(query, engine, rng);
    }

    pub fn focus_search(&mut self) {
        self.search.focus();
    }

    // -------------------------------------------------------------------------
    // Theme
    // -------------------------------------------------------------------------

    #[must_use]
    pub const fn is_dark_mode(&self) -> bool {
        self.dark_mode.is_dark()
    }

    /// Value for `<html data-theme=...>`.
    #[must_use]
    pub const fn theme_attr(&self) -> &'static str {
        self.dark_mode.attr()
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the preference cannot be written.
    pub async fn toggle_dark_mode<S: KeyValueStore>(
        &mut self,
        store: Option<&S>,
    ) -> Result<bool, StorageError> {
        self.dark_mode.toggle(store).await
    }

    // -------------------------------------------------------------------------
    // Pointer and scroll
    // -------------------------------------------------------------------------

    /// Close whichever panels the pointer-down landed outside of.
    pub fn on_pointer_down(&mut self, event: PointerDown) {
        let dismissal = Dismissal::from_pointer(event);
        if dismissal.close_search {
            self.search.dismiss();
        }
        if dismissal.close_cart {
            self.cart_open = false;
        }
    }

    /// Feed a scroll offset. Returns whether the bar is now visible.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.scroll.on_scroll(offset)
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.scroll.is_visible()
    }

    /// Animation state for the bar itself.
    #[must_use]
    pub const fn visibility_state(&self) -> &'static str {
        if self.is_visible() { "visible" } else { "hidden" }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::FixedRandom;
    use crate::storage::{CART_ITEMS_KEY, DARK_MODE_KEY, MemoryStorage};

    #[tokio::test]
    async fn test_mount_seeds_demo_cart_and_light_theme() {
        let store = MemoryStorage::new();
        let nav = NavigationBar::mount(Some(&store), "/").await;

        assert_eq!(nav.cart(), &[CartItem::demo()]);
        assert_eq!(nav.subtotal(), Price::from_units(990));
        assert_eq!(nav.unit_count(), 1);
        assert_eq!(nav.theme_attr(), "light");
        assert!(!nav.is_cart_open());
        assert!(!nav.is_menu_open());
        assert!(nav.is_visible());
    }

    #[tokio::test]
    async fn test_mount_without_storage() {
        let nav = NavigationBar::mount::<MemoryStorage>(None, "/").await;
        assert_eq!(nav.cart_len(), 0);
        assert_eq!(nav.subtotal(), Price::ZERO);
        assert!(!nav.is_dark_mode());
    }

    #[tokio::test]
    async fn test_categories_follow_current_path() {
        let nav = NavigationBar::mount::<MemoryStorage>(None, "/products/jersey").await;
        let active: Vec<&str> = nav
            .categories()
            .iter()
            .filter(|link| link.active)
            .map(|link| link.label)
            .collect();
        assert_eq!(active, vec!["PRODUCTS"]);
        assert!(!nav.account_link().active);
    }

    #[tokio::test]
    async fn test_remove_from_cart_updates_storage() {
        let store = MemoryStorage::new();
        let mut nav = NavigationBar::mount(Some(&store), "/").await;

        nav.remove_from_cart(Some(&store), CartItemId::new(1))
            .await
            .unwrap();

        assert_eq!(nav.cart_len(), 0);
        assert_eq!(store.peek(CART_ITEMS_KEY).as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_toggle_dark_mode() {
        let store = MemoryStorage::new();
        let mut nav = NavigationBar::mount(Some(&store), "/").await;

        assert!(nav.toggle_dark_mode(Some(&store)).await.unwrap());
        assert_eq!(nav.theme_attr(), "dark");
        assert_eq!(store.peek(DARK_MODE_KEY).as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn test_outside_click_closes_search_and_cart() {
        let mut nav = NavigationBar::mount::<MemoryStorage>(None, "/").await;
        nav.submit_search("jersey", &MockSearch::new(0.0), &mut FixedRandom(0.5));
        nav.open_cart();
        assert!(nav.search().is_panel_visible());

        nav.on_pointer_down(PointerDown {
            on_cart_toggle: true,
            ..PointerDown::outside()
        });
        assert!(nav.is_cart_open());
        assert!(!nav.search().is_panel_visible());

        nav.focus_search();
        assert!(nav.search().is_panel_visible());

        nav.on_pointer_down(PointerDown::outside());
        assert!(!nav.is_cart_open());
    }

    #[tokio::test]
    async fn test_scroll_visibility_state() {
        let mut nav = NavigationBar::mount::<MemoryStorage>(None, "/").await;
        assert_eq!(nav.visibility_state(), "visible");
        assert!(!nav.on_scroll(400.0));
        assert_eq!(nav.visibility_state(), "hidden");
        assert!(nav.on_scroll(390.0));
    }

    #[tokio::test]
    async fn test_menu_open_close() {
        let mut nav = NavigationBar::default();
        nav.open_menu();
        assert!(nav.is_menu_open());
        nav.close_menu();
        assert!(!nav.is_menu_open());
    }
}
