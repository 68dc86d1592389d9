//! Core building blocks: randomness, configuration, and errors.
//!
//! Nothing here knows about tarot; the deck, spread, and animation
//! modules build on these types.

pub mod config;
pub mod error;
pub mod rng;

pub use config::DeckConfig;
pub use error::{CatalogError, EasingParseError};
pub use rng::{DeckRng, RandomSource};
