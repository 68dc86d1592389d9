//! Deterministic menu animation.
//!
//! Nothing here renders. A `Stage` holds the visual state of every
//! element, `Timeline`s move those numbers over time, and `MenuAnimation`
//! strings the menu's timelines together into a small state machine that
//! the caller drives with `tick(dt)`.
//!
//! ## Key Types
//!
//! - `Easing`: Named easing curves (`power2.out`, `back.out(1.7)`, ...)
//! - `Stagger`: Per-element start offsets
//! - `Stage`, `Group`, `Property`, `Value`: Animated elements and values
//! - `Timeline`, `Tween`, `Placement`: Declarative sequencing
//! - `AnimationTiming`, `AnimationEasing`: Serde-loadable configuration
//! - `MenuAnimation`: Entrance, ambient, floating, and exit sequences

pub mod easing;
pub mod menu;
pub mod scene;
pub mod stage;
pub mod stagger;
pub mod timeline;
pub mod timing;

pub use easing::Easing;
pub use menu::{MenuAnimation, MenuState, Navigation};
pub use scene::{
    generate_decorative_cards, generate_particles, menu_item, DecorativeCard, MenuItem, Particle,
    DECORATIVE_CARD_COUNT, MENU_ITEMS, PARTICLE_COUNT,
};
pub use stage::{Group, Property, Stage, Value, VisualState};
pub use stagger::{Stagger, StaggerFrom};
pub use timeline::{Marker, Placement, Repeat, Targets, Timeline, Tween};
pub use timing::{AnimationEasing, AnimationTiming};
