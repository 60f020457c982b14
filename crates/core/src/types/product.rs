//! Product summary shown in search results.

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId};

/// A product as listed in the search results panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(rename = "originalPrice")]
    pub original_price: Price,
    #[serde(rename = "image")]
    pub image_ref: String,
}

impl ProductSummary {
    /// Whether the current price is below the original price.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.price < self.original_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_discounted() {
        let product = ProductSummary {
            id: ProductId::new(1),
            name: "Full Sleeve Dawah Jersey - SJ15".to_string(),
            price: Price::from_units(275),
            original_price: Price::from_units(550),
            image_ref: "/placeholder.svg".to_string(),
        };
        assert!(product.is_discounted());

        let full_price = ProductSummary {
            price: Price::from_units(550),
            ..product
        };
        assert!(!full_price.is_discounted());
    }
}
