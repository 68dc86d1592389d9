//! Spreads: named layouts of positions that drawn cards are dealt into.

pub mod layout;

pub use layout::{SpreadPlacement, SpreadPosition, TarotSpread};
