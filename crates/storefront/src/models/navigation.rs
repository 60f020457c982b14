//! Navigation entries and active-route matching.

/// A destination in the site navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavEntry {
    /// Whether this entry should be highlighted for `current_path`.
    ///
    /// Exact match, or a prefix ending on a path-segment boundary. The root
    /// only matches itself.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active_path(self.path, current_path)
    }
}

pub const HOME: NavEntry = NavEntry {
    label: "HOME",
    path: "/",
};
pub const PRODUCTS: NavEntry = NavEntry {
    label: "PRODUCTS",
    path: "/products",
};
pub const ACCOUNT: NavEntry = NavEntry {
    label: "Account",
    path: "/account",
};
pub const WISHLIST: NavEntry = NavEntry {
    label: "Wishlist",
    path: "/wishlist",
};
pub const CART: NavEntry = NavEntry {
    label: "View cart",
    path: "/cart",
};
pub const CHECKOUT: NavEntry = NavEntry {
    label: "Checkout",
    path: "/checkout",
};

/// Category links shown in the header, side pins and mobile menu.
pub const CATEGORIES: [NavEntry; 2] = [HOME, PRODUCTS];

/// Every path the navigation can resolve to.
pub const ALL: [NavEntry; 6] = [HOME, PRODUCTS, ACCOUNT, WISHLIST, CART, CHECKOUT];

/// Exact or segment-prefix match of `current` against `target`.
#[must_use]
pub fn is_active_path(target: &str, current: &str) -> bool {
    if target == "/" {
        return current == "/";
    }
    current
        .strip_prefix(target)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// A navigation entry resolved against the current path, ready to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLinkView {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

impl NavLinkView {
    #[must_use]
    pub fn resolve(entry: NavEntry, current_path: &str) -> Self {
        Self {
            label: entry.label,
            path: entry.path,
            active: entry.is_active(current_path),
        }
    }

    /// Animation state for the link: `active` or `inactive`.
    #[must_use]
    pub const fn state(&self) -> &'static str {
        if self.active { "active" } else { "inactive" }
    }
}
