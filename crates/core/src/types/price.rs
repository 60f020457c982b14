//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are whole-unit amounts in Bangladeshi taka and render with the
//! trailing taka sign, e.g. `990৳`.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount.
///
/// Serialized transparently as the underlying decimal, so a persisted cart
/// line stores `"price": "990"`. Plain JSON numbers (`"price": 990`) are
/// accepted on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Currency sign appended when displaying a price.
    pub const CURRENCY_SIGN: char = '৳';

    /// A zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole-unit amount.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.normalize(), Self::CURRENCY_SIGN)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_appends_taka_sign() {
        assert_eq!(Price::from_units(990).to_string(), "990৳");
        assert_eq!(Price::new(Decimal::new(27550, 2)).to_string(), "275.5৳");
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::from_units(275).times(2), Price::from_units(990)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_units(1540));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Price = std::iter::empty().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn test_deserialize_accepts_number_and_string() {
        let from_number: Price = serde_json::from_str("990").unwrap();
        let from_string: Price = serde_json::from_str("\"990\"").unwrap();
        assert_eq!(from_number, from_string);
    }
}
