//! Core types for SharpStyle.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod price;
pub mod product;
pub mod theme;

pub use cart::CartItem;
pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
pub use product::ProductSummary;
pub use theme::Theme;
