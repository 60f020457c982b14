//! SharpStyle Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront shell:
//! - cart lines held in the visitor's persisted storage
//! - product summaries shown in search results
//! - prices, newsletter emails and the colour theme
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no session access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and themes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
