//! Deck simulation for a reading session.
//!
//! ## Key Types
//!
//! - `DeckManager`: Owns the deck and drawn history; shuffle, draw, reset
//! - `DrawnCard`: A card with its orientation and draw position
//! - `Orientation`: Upright or reversed
//! - `DeckEvent`: Change notification delivered to subscribers
//!
//! Drawing from an empty deck returns `None`; an exhausted deck is an
//! ordinary state that `reset` recovers from.

pub mod drawn;
pub mod events;
pub mod manager;

pub use drawn::{DrawnCard, Orientation};
pub use events::{DeckCallback, DeckEvent, SubscriptionId, Subscribers};
pub use manager::DeckManager;
