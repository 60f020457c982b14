//! Page shell components.
//!
//! Each component is a plain state struct rendered by the templates in
//! `templates/partials/`. Event handlers are methods, so the behaviour can be
//! exercised without a browser.

pub mod footer;
pub mod navbar;
pub mod trackers;

pub use footer::PageFooter;
pub use navbar::NavigationBar;
pub use trackers::{Dismissal, PointerDown, ScrollTracker};
