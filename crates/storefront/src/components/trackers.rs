//! Two-sample trackers for pointer and scroll events.
//!
//! These hold just enough state to turn a stream of raw events into the
//! visible/hidden decisions the navigation bar renders.
//!
//! `static/js/navbar.js` runs the same rules in the browser; keep the two in
//! step when changing a threshold.

/// Offsets below this always keep the navigation bar visible.
pub const NEAR_TOP_THRESHOLD: f64 = 10.0;

/// Shows the bar when scrolling up or near the top, hides it otherwise.
///
/// Compares each sample only with the previous one. Rapid direction changes
/// flip the state on every sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    previous: f64,
    visible: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            previous: 0.0,
            visible: true,
        }
    }
}

impl ScrollTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a new vertical offset. Returns the new visibility.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.visible = offset < self.previous || offset < NEAR_TOP_THRESHOLD;
        self.previous = offset;
        self.visible
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn previous_offset(&self) -> f64 {
        self.previous
    }
}

/// Where a pointer-down landed, relative to the open panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerDown {
    /// Inside the search box or its results panel.
    pub in_search: bool,
    /// Inside the cart drawer.
    pub in_cart: bool,
    /// On the button that opens the cart.
    pub on_cart_toggle: bool,
}

impl PointerDown {
    /// A pointer-down outside every tracked region.
    #[must_use]
    pub const fn outside() -> Self {
        Self {
            in_search: false,
            in_cart: false,
            on_cart_toggle: false,
        }
    }
}

/// Which panels an outside click closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dismissal {
    pub close_search: bool,
    pub close_cart: bool,
}

impl Dismissal {
    /// Classify a pointer-down. The cart toggle counts as inside the cart
    /// so opening the drawer does not immediately close it.
    #[must_use]
    pub const fn from_pointer(event: PointerDown) -> Self {
        Self {
            close_search: !event.in_search,
            close_cart: !event.in_cart && !event.on_cart_toggle,
        }
    }
}
