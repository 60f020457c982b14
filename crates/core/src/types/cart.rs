//! Cart line type.

use serde::{Deserialize, Serialize};

use crate::{CartItemId, Price};

/// Image shown when an item has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A single line in the visitor's cart.
///
/// The persisted form matches the storefront's `cartItems` JSON list:
///
/// ```json
/// {"id": 1, "name": "...", "price": "990", "quantity": 1, "image": "/placeholder.svg"}
/// ```
///
/// Quantity is taken as given; it is not checked against any catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique within the cart. Removal matches on this.
    pub id: CartItemId,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Price,
    pub quantity: u32,
    #[serde(rename = "image", default)]
    pub image_ref: String,
}

impl CartItem {
    /// The seeded demo line used when a visitor has no stored cart.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            id: CartItemId::new(1),
            name: "Refreshing Perfume Oil Box 2.0 - L".to_string(),
            unit_price: Price::from_units(990),
            quantity: 1,
            image_ref: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }

    /// Image to render, falling back to the placeholder.
    #[must_use]
    pub fn image_or_placeholder(&self) -> &str {
        if self.image_ref.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image_ref
        }
    }
}
