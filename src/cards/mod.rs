//! Card data: immutable card records and the catalog they come from.
//!
//! ## Key Types
//!
//! - `CardId`: Stable card identifier
//! - `Card`: Immutable card record (name key, number, category)
//! - `CardCategory`, `Arcana`, `Suit`: Card groupings
//! - `CardDetails`: i18n keys for name, description, and meanings
//! - `CardCatalog`: Ordered card set with lookup (Marseille built in)

pub mod card;
pub mod catalog;

pub use card::{Arcana, Card, CardCategory, CardDetails, CardId, Suit};
pub use catalog::CardCatalog;
