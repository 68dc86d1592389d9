//! Main-menu entrance, ambient, floating, and exit sequences.
//!
//! `MenuAnimation` drives a `Stage` through four phases:
//!
//! 1. **Entering**: particles fade in, decorative cards spiral in from the
//!    edges, the title drops in, then the menu cards fan in.
//! 2. **Ready**: menu and decorative cards float gently. Only now are
//!    navigation requests accepted.
//! 3. **Exiting**: floating stops, cards fly out, the title and the
//!    container fade.
//! 4. **Navigated**: the exit finished; the route is handed back to the
//!    caller exactly once.
//!
//! Background particles drift for as long as the menu is alive.

use smallvec::smallvec;
use tracing::debug;

use super::scene::{DecorativeCard, Particle, MENU_ITEMS};
use super::stage::{Group, Property, Stage, Value};
use super::stagger::{Stagger, StaggerFrom};
use super::timeline::{Marker, Placement, Targets, Timeline, Tween};
use super::timing::{AnimationEasing, AnimationTiming};
use super::Easing;
use crate::core::{DeckConfig, DeckRng, RandomSource};

const MENU_CARDS_IN: Marker = Marker("menu-cards-in");

/// Phase of the menu animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuState {
    Idle,
    Entering,
    Ready,
    Exiting { route: String },
    Navigated { route: String },
}

/// A finished exit: the caller should now switch to `route`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub route: String,
}

/// Menu animation controller.
///
/// ```
/// use tarot_deck::anim::{AnimationEasing, AnimationTiming, MenuAnimation, MenuState};
/// use tarot_deck::core::DeckRng;
///
/// let mut menu = MenuAnimation::with_scene(
///     AnimationTiming::default(),
///     AnimationEasing::default(),
///     DeckRng::new(1),
/// );
/// menu.start();
/// assert!(!menu.navigate_to("/draw"));
///
/// menu.tick(menu.entrance_duration() + 0.01);
/// assert!(menu.is_ready());
/// assert!(menu.navigate_to("/draw"));
///
/// let navigation = menu.tick(5.0).unwrap();
/// assert_eq!(navigation.route, "/draw");
/// assert_eq!(menu.state(), &MenuState::Navigated { route: "/draw".into() });
/// ```
#[derive(Debug)]
pub struct MenuAnimation<R = DeckRng> {
    timing: AnimationTiming,
    easing: AnimationEasing,
    particles: Vec<Particle>,
    decorative: Vec<DecorativeCard>,
    menu_cards: usize,
    stage: Stage,
    state: MenuState,
    entrance: Option<Timeline>,
    ambient: Option<Timeline>,
    floating: Option<Timeline>,
    exit: Option<Timeline>,
    rng: R,
}

impl MenuAnimation<DeckRng> {
    /// Standard scene on the config's `"menu"` stream, so building and
    /// running the menu never changes the session's shuffles.
    #[must_use]
    pub fn with_config(config: &DeckConfig, timing: AnimationTiming, easing: AnimationEasing) -> Self {
        Self::with_scene(timing, easing, config.rng_for("menu"))
    }
}

impl<R: RandomSource> MenuAnimation<R> {
    /// Controller for the given scene content and `menu_cards` menu entries.
    #[must_use]
    pub fn new(
        particles: Vec<Particle>,
        decorative: Vec<DecorativeCard>,
        menu_cards: usize,
        timing: AnimationTiming,
        easing: AnimationEasing,
        rng: R,
    ) -> Self {
        let stage = Self::build_stage(particles.len(), decorative.len(), menu_cards);
        Self {
            timing,
            easing,
            particles,
            decorative,
            menu_cards,
            stage,
            state: MenuState::Idle,
            entrance: None,
            ambient: None,
            floating: None,
            exit: None,
            rng,
        }
    }

    /// Controller with generated particles and decorative cards and the
    /// standard menu entries.
    #[must_use]
    pub fn with_scene(timing: AnimationTiming, easing: AnimationEasing, mut rng: R) -> Self {
        let particles = super::scene::generate_particles(&mut rng, super::scene::PARTICLE_COUNT);
        let decorative = super::scene::generate_decorative_cards(&mut rng, super::scene::DECORATIVE_CARD_COUNT);
        Self::new(particles, decorative, MENU_ITEMS.len(), timing, easing, rng)
    }

    fn build_stage(particles: usize, decorative: usize, menu_cards: usize) -> Stage {
        Stage::new()
            .with_group(Group::Particle, particles)
            .with_group(Group::DecorativeCard, decorative)
            .with_group(Group::AppTitle, 1)
            .with_group(Group::AppSubtitle, 1)
            .with_group(Group::MenuCard, menu_cards)
            .with_group(Group::Container, 1)
    }

    #[must_use]
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    /// True once the entrance has finished and navigation is allowed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == MenuState::Ready
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn decorative_cards(&self) -> &[DecorativeCard] {
        &self.decorative
    }

    /// Total length of the entrance sequence, 0 before `start`.
    #[must_use]
    pub fn entrance_duration(&self) -> f32 {
        self.entrance.as_ref().map_or(0.0, Timeline::duration)
    }

    /// Hide everything and begin the entrance. Restarts from scratch if
    /// called again.
    pub fn start(&mut self) {
        self.kill_all();
        self.floating = None;
        self.exit = None;
        self.stage = Self::build_stage(self.particles.len(), self.decorative.len(), self.menu_cards);
        self.set_initial_states();
        self.entrance = Some(self.build_entrance());
        self.ambient = Some(self.build_ambient());
        self.transition(MenuState::Entering);
    }

    /// Advance every running sequence by `dt` seconds.
    ///
    /// Returns the navigation once the exit sequence has finished.
    pub fn tick(&mut self, dt: f32) -> Option<Navigation> {
        let mut markers = Vec::new();
        for timeline in [&mut self.entrance, &mut self.ambient, &mut self.floating, &mut self.exit]
            .into_iter()
            .flatten()
        {
            markers.extend(timeline.advance(&mut self.stage, dt));
        }

        if markers.contains(&MENU_CARDS_IN) && self.state == MenuState::Entering {
            self.transition(MenuState::Ready);
            self.floating = Some(self.build_floating());
        }

        let exit_done = self.exit.as_ref().is_some_and(Timeline::is_complete);
        if let (true, MenuState::Exiting { route }) = (exit_done, &self.state) {
            let route = route.clone();
            self.transition(MenuState::Navigated { route: route.clone() });
            return Some(Navigation { route });
        }

        None
    }

    /// Play the exit sequence and navigate to `route` when it finishes.
    ///
    /// Ignored (returns `false`) unless the menu is ready.
    pub fn navigate_to(&mut self, route: impl Into<String>) -> bool {
        if !self.is_ready() {
            return false;
        }

        if let Some(floating) = self.floating.as_mut() {
            floating.kill();
        }
        self.exit = Some(self.build_exit());
        self.transition(MenuState::Exiting { route: route.into() });
        true
    }

    /// Stop every sequence and return to `Idle`. Elements keep their values.
    pub fn cleanup(&mut self) {
        self.kill_all();
        self.transition(MenuState::Idle);
    }

    fn kill_all(&mut self) {
        for timeline in [&mut self.entrance, &mut self.ambient, &mut self.floating, &mut self.exit]
            .into_iter()
            .flatten()
        {
            timeline.kill();
        }
    }

    fn transition(&mut self, next: MenuState) {
        debug!(from = ?self.state, to = ?next, "menu animation state");
        self.state = next;
    }

    fn set_initial_states(&mut self) {
        let stage = &mut self.stage;

        stage.set(Group::Particle, Property::Opacity, &Value::To(0.0));
        stage.set(Group::Particle, Property::Scale, &Value::To(0.0));

        stage.set(Group::DecorativeCard, Property::Opacity, &Value::To(0.0));
        stage.set(Group::DecorativeCard, Property::Scale, &Value::To(0.0));
        let hidden_rotation = self.decorative.iter().map(|card| card.rotation - 180.0).collect();
        stage.set(Group::DecorativeCard, Property::Rotation, &Value::PerIndex(hidden_rotation));

        stage.set(Group::AppTitle, Property::Opacity, &Value::To(0.0));
        stage.set(Group::AppTitle, Property::Y, &Value::To(-40.0));
        stage.set(Group::AppTitle, Property::Scale, &Value::To(0.9));

        stage.set(Group::AppSubtitle, Property::Opacity, &Value::To(0.0));
        stage.set(Group::AppSubtitle, Property::Y, &Value::To(-20.0));

        stage.set(Group::MenuCard, Property::Opacity, &Value::To(0.0));
        stage.set(Group::MenuCard, Property::Y, &Value::To(80.0));
        stage.set(Group::MenuCard, Property::Scale, &Value::To(0.7));
        stage.set(Group::MenuCard, Property::RotateX, &Value::To(-20.0));
    }

    fn build_entrance(&mut self) -> Timeline {
        let timing = &self.timing;
        let easing = &self.easing;
        let seed = stagger_seed(&mut self.rng);
        let mut timeline = Timeline::new(timing.initial_delay);

        timeline
            .add(
                &self.stage,
                Tween::new(Group::Particle, timing.particle_fade_in)
                    .to(Property::Opacity, Value::PerIndex(self.particles.iter().map(|p| p.opacity).collect()))
                    .to(Property::Scale, Value::To(1.0))
                    .stagger(Stagger::new(0.015, StaggerFrom::Random(seed)))
                    .ease(easing.particle),
                Placement::Sequential,
            )
            .add(
                &self.stage,
                Tween::new(Group::DecorativeCard, timing.card_entrance)
                    .to(Property::Opacity, Value::To(0.7))
                    .to(Property::Scale, Value::PerIndex(self.decorative.iter().map(|c| c.scale).collect()))
                    .to(Property::Rotation, Value::PerIndex(self.decorative.iter().map(|c| c.rotation).collect()))
                    .stagger(Stagger::new(0.06, StaggerFrom::Edges))
                    .ease(easing.card_entrance),
                Placement::Offset(-0.3),
            )
            .add(
                &self.stage,
                Tween::new(Group::AppTitle, timing.title_appear)
                    .to(Property::Opacity, Value::To(1.0))
                    .to(Property::Y, Value::To(0.0))
                    .to(Property::Scale, Value::To(1.0))
                    .ease(easing.title_entrance),
                Placement::Offset(-0.8),
            )
            .add(
                &self.stage,
                Tween::new(Group::AppSubtitle, 0.5)
                    .to(Property::Opacity, Value::To(1.0))
                    .to(Property::Y, Value::To(0.0))
                    .ease(Easing::PowerOut(2)),
                Placement::Offset(-0.4),
            )
            .add(
                &self.stage,
                Tween::new(Group::MenuCard, timing.menu_cards_entrance)
                    .to(Property::Opacity, Value::To(1.0))
                    .to(Property::Y, Value::To(0.0))
                    .to(Property::Scale, Value::To(1.0))
                    .to(Property::RotateX, Value::To(0.0))
                    .stagger(Stagger::new(timing.menu_card_stagger, StaggerFrom::Center))
                    .ease(easing.menu_card_entrance)
                    .on_complete(MENU_CARDS_IN),
                Placement::Offset(-0.3),
            );

        timeline
    }

    /// Particles drift up and sideways forever, each on its own period.
    fn build_ambient(&mut self) -> Timeline {
        let mut timeline = Timeline::new(0.0);
        let seed = stagger_seed(&mut self.rng);
        let starts = Stagger::new(0.2, StaggerFrom::Random(seed)).delays(self.particles.len());

        for (i, start) in starts.into_iter().enumerate() {
            let drift = if i % 2 == 0 { 8.0 } else { -8.0 };
            let duration = self.rng.range_f64(5.0, 10.0) as f32;
            timeline.add(
                &self.stage,
                Tween::new(Targets::Element(Group::Particle, i), duration)
                    .to(Property::Y, Value::By(-20.0))
                    .to(Property::X, Value::By(drift))
                    .ease(self.easing.card_float)
                    .repeat_forever(true),
                Placement::At(start),
            );
        }

        timeline
    }

    fn build_floating(&mut self) -> Timeline {
        let mut timeline = Timeline::new(0.0);

        for i in 0..self.decorative.len() {
            let sway = if i % 2 == 0 { 5.0 } else { -5.0 };
            let tilt = (self.rng.next_f64() as f32 - 0.5) * 8.0;
            let duration = 3.0 + self.rng.next_f64() as f32 * 2.0;
            timeline.add(
                &self.stage,
                Tween::new(Targets::Element(Group::DecorativeCard, i), duration)
                    .to(Property::Y, Value::By(-12.0))
                    .to(Property::X, Value::By(sway))
                    .to(Property::Rotation, Value::By(tilt))
                    .ease(self.easing.card_float)
                    .repeat_forever(true),
                Placement::At(0.0),
            );
        }

        for i in 0..self.menu_cards {
            timeline.add(
                &self.stage,
                Tween::new(Targets::Element(Group::MenuCard, i), 2.0 + i as f32 * 0.2)
                    .to(Property::Y, Value::By(-4.0))
                    .ease(self.easing.card_float)
                    .repeat_forever(true),
                Placement::At(0.0),
            );
        }

        timeline
    }

    fn build_exit(&mut self) -> Timeline {
        let exit_ease = self.easing.exit;
        let seed = stagger_seed(&mut self.rng);
        let mut timeline = Timeline::new(0.0);

        timeline
            .add(
                &self.stage,
                Tween::new(Group::MenuCard, self.timing.exit_duration)
                    .to(Property::Y, Value::To(-50.0))
                    .to(Property::Opacity, Value::To(0.0))
                    .to(Property::Scale, Value::To(0.8))
                    .stagger(Stagger::new(0.04, StaggerFrom::Start))
                    .ease(exit_ease),
                Placement::Sequential,
            )
            .add(
                &self.stage,
                Tween::new(Group::DecorativeCard, 0.4)
                    .to(Property::Scale, Value::To(0.0))
                    .to(Property::Opacity, Value::To(0.0))
                    .to(Property::Rotation, Value::By(90.0))
                    .stagger(Stagger::new(0.02, StaggerFrom::Random(seed)))
                    .ease(exit_ease),
                Placement::Offset(-0.3),
            )
            .add(
                &self.stage,
                Tween::new(Targets::Groups(smallvec![Group::AppTitle, Group::AppSubtitle]), 0.3)
                    .to(Property::Opacity, Value::To(0.0))
                    .to(Property::Y, Value::To(-30.0))
                    .ease(exit_ease),
                Placement::Offset(-0.3),
            )
            .add(
                &self.stage,
                Tween::new(Group::Container, 0.2).to(Property::Opacity, Value::To(0.0)),
                Placement::Offset(-0.1),
            );

        timeline
    }
}

/// Seed for a random stagger order, drawn from the menu's own RNG.
fn stagger_seed<R: RandomSource>(rng: &mut R) -> u64 {
    (rng.next_f64() * u64::MAX as f64) as u64
}
