//! Spread layouts and dealing.
//!
//! A spread is data: an id, a name key, and an ordered list of positions
//! with 3D placement hints for the view. `deal` is the only behavior.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::RandomSource;
use crate::deck::{DeckManager, DrawnCard};

/// One slot in a spread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpreadPosition {
    pub index: usize,
    pub name_key: String,
    pub description_key: String,
    /// 3D position hint.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation in radians.
    #[serde(default)]
    pub rotation: Option<f32>,
}

impl SpreadPosition {
    #[must_use]
    pub fn new(index: usize, name_key: impl Into<String>, description_key: impl Into<String>) -> Self {
        Self {
            index,
            name_key: name_key.into(),
            description_key: description_key.into(),
            x: 0.0,
            y: 0.0,
            z: 0.0,
            rotation: None,
        }
    }

    #[must_use]
    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    #[must_use]
    pub fn rotated(mut self, radians: f32) -> Self {
        self.rotation = Some(radians);
        self
    }
}

/// A named layout of positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TarotSpread {
    pub id: String,
    pub name_key: String,
    pub positions: SmallVec<[SpreadPosition; 10]>,
}

/// A drawn card placed into a spread position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpreadPlacement {
    pub position: SpreadPosition,
    pub drawn: DrawnCard,
}

impl TarotSpread {
    #[must_use]
    pub fn new(id: impl Into<String>, name_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name_key: name_key.into(),
            positions: SmallVec::new(),
        }
    }

    /// Append a position; its index is set to the next slot.
    #[must_use]
    pub fn with_position(mut self, mut position: SpreadPosition) -> Self {
        position.index = self.positions.len();
        self.positions.push(position);
        self
    }

    /// A single card.
    #[must_use]
    pub fn single_card() -> Self {
        Self::new("single", "spreads.single.name").with_position(SpreadPosition::new(
            0,
            "spreads.single.positions.card.name",
            "spreads.single.positions.card.description",
        ))
    }

    /// Past, present, future in a row.
    #[must_use]
    pub fn three_card() -> Self {
        ["past", "present", "future"]
            .iter()
            .enumerate()
            .fold(Self::new("three-card", "spreads.threeCard.name"), |spread, (i, slot)| {
                spread.with_position(
                    SpreadPosition::new(
                        i,
                        format!("spreads.threeCard.positions.{slot}.name"),
                        format!("spreads.threeCard.positions.{slot}.description"),
                    )
                    .at((i as f32 - 1.0) * 1.5, 0.0, 0.0),
                )
            })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Draw one card per position, in position order.
    ///
    /// Stops early if the deck runs out, so the result may be shorter
    /// than the spread.
    pub fn deal<R: RandomSource>(&self, deck: &mut DeckManager<R>) -> Vec<SpreadPlacement> {
        let mut placements = Vec::with_capacity(self.positions.len());
        for position in &self.positions {
            let Some(drawn) = deck.draw_card() else {
                break;
            };
            placements.push(SpreadPlacement {
                position: position.clone(),
                drawn,
            });
        }

        debug!(
            spread = %self.id,
            dealt = placements.len(),
            wanted = self.positions.len(),
            "spread dealt"
        );
        placements
    }
}
