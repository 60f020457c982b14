//! View models for the page shell.
//!
//! Static navigation and footer content, kept separate from the stateful
//! components that render them.

pub mod footer;
pub mod navigation;

pub use navigation::{NavEntry, NavLinkView};
