//! Menu animation timing and easing configuration.
//!
//! Defaults reproduce the shipped menu feel. Both structs deserialize from
//! partial JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use super::easing::Easing;

/// Durations and delays, in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationTiming {
    /// Delay before the entrance sequence starts.
    pub initial_delay: f32,
    pub particle_fade_in: f32,
    /// Decorative cards entrance.
    pub card_entrance: f32,
    pub title_appear: f32,
    pub menu_cards_entrance: f32,
    /// Delay between consecutive menu cards.
    pub menu_card_stagger: f32,
    pub exit_duration: f32,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            initial_delay: 0.1,
            particle_fade_in: 0.6,
            card_entrance: 1.2,
            title_appear: 0.8,
            menu_cards_entrance: 0.7,
            menu_card_stagger: 0.1,
            exit_duration: 0.5,
        }
    }
}

impl AnimationTiming {
    /// Scale every duration and delay, e.g. `0.0` for instant menus in tests.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        let factor = factor.max(0.0);
        Self {
            initial_delay: self.initial_delay * factor,
            particle_fade_in: self.particle_fade_in * factor,
            card_entrance: self.card_entrance * factor,
            title_appear: self.title_appear * factor,
            menu_cards_entrance: self.menu_cards_entrance * factor,
            menu_card_stagger: self.menu_card_stagger * factor,
            exit_duration: self.exit_duration * factor,
        }
    }
}

/// Easing curve per animation role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationEasing {
    pub card_entrance: Easing,
    pub card_float: Easing,
    pub menu_card_entrance: Easing,
    pub title_entrance: Easing,
    pub exit: Easing,
    pub particle: Easing,
}

impl Default for AnimationEasing {
    fn default() -> Self {
        Self {
            card_entrance: Easing::ElasticOut { amplitude: 1.0, period: 0.6 },
            card_float: Easing::SineInOut,
            menu_card_entrance: Easing::BackOut(1.7),
            title_entrance: Easing::PowerOut(3),
            exit: Easing::PowerIn(2),
            particle: Easing::PowerOut(2),
        }
    }
}
