//! Business logic services for the storefront shell.
//!
//! # Services
//!
//! - `cart` - Cart lines persisted in visitor storage
//! - `search` - Mock product search with an injectable random source
//! - `theme` - Dark-mode preference
//! - `newsletter` - Footer signup form with a timed confirmation

pub mod cart;
pub mod newsletter;
pub mod search;
pub mod theme;

pub use newsletter::{CONFIRMATION_DURATION, NewsletterForm, SubmitOutcome};
pub use search::{
    FixedRandom, MockSearch, RandomSource, SearchOutcome, SearchSession, ThreadRandom,
};
pub use theme::DarkModeSetting;
