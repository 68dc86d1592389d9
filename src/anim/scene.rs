//! Menu scene content: background particles, decorative cards, menu items.

use serde::Serialize;

use crate::core::RandomSource;

/// Number of background particles.
pub const PARTICLE_COUNT: usize = 35;

/// Number of decorative floating cards.
pub const DECORATIVE_CARD_COUNT: usize = 12;

/// A background particle. Positions are percentages of the screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Particle {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub opacity: f32,
    pub delay: f32,
}

/// A decorative card placed around the screen edges.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DecorativeCard {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    /// Resting rotation in degrees.
    pub rotation: f32,
    pub scale: f32,
    pub delay: f32,
}

/// A main-menu navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
    pub title_key: &'static str,
    pub desc_key: &'static str,
}

/// Main menu entries in display order.
pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem {
        id: "explore",
        icon: "🃏",
        route: "/explore",
        title_key: "menu.explore",
        desc_key: "menu.exploreDesc",
    },
    MenuItem {
        id: "draw",
        icon: "✨",
        route: "/draw",
        title_key: "menu.simpleDraw",
        desc_key: "menu.simpleDrawDesc",
    },
    MenuItem {
        id: "resources",
        icon: "📚",
        route: "/resources",
        title_key: "menu.resources",
        desc_key: "menu.resourcesDesc",
    },
    MenuItem {
        id: "about",
        icon: "💫",
        route: "/about",
        title_key: "menu.about",
        desc_key: "menu.aboutDesc",
    },
];

/// Look up a menu entry by id.
#[must_use]
pub fn menu_item(id: &str) -> Option<&'static MenuItem> {
    MENU_ITEMS.iter().find(|item| item.id == id)
}

/// Scatter `count` particles over the screen.
pub fn generate_particles<R: RandomSource>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|id| Particle {
            id,
            x: rng.range_f64(0.0, 100.0) as f32,
            y: rng.range_f64(0.0, 100.0) as f32,
            size: rng.range_f64(1.0, 4.0) as f32,
            opacity: rng.range_f64(0.1, 0.5) as f32,
            delay: rng.range_f64(0.0, 2.0) as f32,
        })
        .collect()
}

/// Ring `count` decorative cards around the screen center.
pub fn generate_decorative_cards<R: RandomSource>(rng: &mut R, count: usize) -> Vec<DecorativeCard> {
    (0..count)
        .map(|id| {
            let angle = id as f64 / count as f64 * std::f64::consts::TAU;
            let radius_x = rng.range_f64(42.0, 52.0);
            let radius_y = rng.range_f64(38.0, 48.0);

            DecorativeCard {
                id,
                x: (50.0 + angle.cos() * radius_x) as f32,
                y: (50.0 + angle.sin() * radius_y) as f32,
                rotation: rng.range_f64(-20.0, 20.0) as f32,
                scale: rng.range_f64(0.6, 1.0) as f32,
                delay: id as f32 * 0.08,
            }
        })
        .collect()
}
