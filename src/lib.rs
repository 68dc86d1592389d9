//! # tarot-deck
//!
//! In-memory tarot deck simulation and deterministic menu animation.
//!
//! ## Design Principles
//!
//! 1. **Plain Owned State**: A `DeckManager` owns its deck and drawn
//!    history outright. Observers poll accessors or subscribe to
//!    `DeckEvent`s; nothing is implicitly reactive.
//!
//! 2. **Injectable Randomness**: Every random decision goes through
//!    `RandomSource`, so a seed (or a scripted source in tests) fixes the
//!    outcome of every shuffle, draw, and animation stagger.
//!
//! 3. **Empty Is Normal**: Drawing from an exhausted deck returns `None`.
//!    Only external data (catalog JSON, easing names) can be rejected.
//!
//! ## Modules
//!
//! - `core`: Random sources, session configuration, errors
//! - `cards`: Card records and the Marseille catalog
//! - `deck`: Deck manager, drawn cards, change events
//! - `spread`: Spread layouts and dealing
//! - `anim`: Easing, staggers, timelines, and the menu animation

pub mod anim;
pub mod cards;
pub mod core;
pub mod deck;
pub mod spread;

// Re-export commonly used types
pub use crate::core::{CatalogError, DeckConfig, DeckRng, EasingParseError, RandomSource};

pub use crate::cards::{Arcana, Card, CardCatalog, CardCategory, CardDetails, CardId, Suit};

pub use crate::deck::{DeckEvent, DeckManager, DrawnCard, Orientation, SubscriptionId};

pub use crate::spread::{SpreadPlacement, SpreadPosition, TarotSpread};

pub use crate::anim::{
    AnimationEasing, AnimationTiming, Easing, MenuAnimation, MenuState, Navigation, Stage, Timeline,
};
