//! Drawn cards and their orientation.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Whether a drawn card landed upright or reversed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Orientation::Reversed)
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Upright => f.write_str("upright"),
            Orientation::Reversed => f.write_str("reversed"),
        }
    }
}

/// A card taken from the deck, with its orientation and draw order.
///
/// Immutable once drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    pub card: Card,
    pub orientation: Orientation,
    /// Zero-based draw order within the session.
    pub position: usize,
}

impl DrawnCard {
    /// i18n key for the meaning that applies to this orientation.
    #[must_use]
    pub fn meaning_key(&self) -> String {
        let details = self.card.details();
        match self.orientation {
            Orientation::Upright => details.meaning_up,
            Orientation::Reversed => details.meaning_reversed,
        }
    }
}
