//! Declarative tween sequencing.
//!
//! A `Timeline` is a list of tweens placed on a shared clock. Placement
//! works like animation-library position parameters: after everything so
//! far, overlapping the end by an offset (`"-=0.3"` is `Offset(-0.3)`), or
//! at an absolute time.
//!
//! Time only moves forward through `advance`. Each target captures its
//! start values the first time its tween reaches it, so a tween always
//! continues from wherever earlier tweens left the element.
//!
//! ```
//! use tarot_deck::anim::{Easing, Group, Placement, Property, Stage, Timeline, Tween, Value};
//!
//! let mut stage = Stage::new().with_group(Group::AppTitle, 1);
//! stage.set(Group::AppTitle, Property::Opacity, &Value::To(0.0));
//!
//! let mut timeline = Timeline::new(0.0);
//! timeline.add(
//!     &stage,
//!     Tween::new(Group::AppTitle, 1.0)
//!         .to(Property::Opacity, Value::To(1.0))
//!         .ease(Easing::Linear),
//!     Placement::Sequential,
//! );
//!
//! timeline.advance(&mut stage, 0.5);
//! assert_eq!(stage.get(Group::AppTitle, 0).unwrap().opacity, 0.5);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::easing::Easing;
use super::stage::{Group, Property, Stage, Value};
use super::stagger::Stagger;

/// What a tween animates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Targets {
    /// Every element of a group.
    Group(Group),
    /// One element.
    Element(Group, usize),
    /// Every element of several groups, in the order given.
    Groups(SmallVec<[Group; 2]>),
}

impl From<Group> for Targets {
    fn from(group: Group) -> Self {
        Targets::Group(group)
    }
}

impl Targets {
    fn resolve(&self, stage: &Stage) -> Vec<(Group, usize)> {
        match self {
            Targets::Group(group) => (0..stage.count(*group)).map(|i| (*group, i)).collect(),
            Targets::Element(group, index) => {
                if *index < stage.count(*group) {
                    vec![(*group, *index)]
                } else {
                    Vec::new()
                }
            }
            Targets::Groups(groups) => groups
                .iter()
                .flat_map(|group| (0..stage.count(*group)).map(move |i| (*group, i)))
                .collect(),
        }
    }
}

/// Repetition of a tween.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repeat {
    #[default]
    Once,
    /// Loop until the timeline is killed; `yoyo` plays every other cycle
    /// backwards.
    Forever { yoyo: bool },
}

/// Label reported by `advance` when a tween finishes on every target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Marker(pub &'static str);

/// Where a tween starts relative to the timeline built so far.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    /// At the current end of the timeline.
    Sequential,
    /// At the current end plus an offset (negative overlaps).
    Offset(f32),
    /// At an absolute time.
    At(f32),
}

/// One animation of one or more properties over a set of targets.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub targets: Targets,
    pub props: SmallVec<[(Property, Value); 4]>,
    /// Seconds per target (per cycle when repeating).
    pub duration: f32,
    pub ease: Easing,
    pub stagger: Option<Stagger>,
    pub repeat: Repeat,
    pub marker: Option<Marker>,
}

impl Tween {
    #[must_use]
    pub fn new(targets: impl Into<Targets>, duration: f32) -> Self {
        Self {
            targets: targets.into(),
            props: SmallVec::new(),
            duration,
            ease: Easing::default(),
            stagger: None,
            repeat: Repeat::Once,
            marker: None,
        }
    }

    #[must_use]
    pub fn to(mut self, property: Property, value: Value) -> Self {
        self.props.push((property, value));
        self
    }

    #[must_use]
    pub fn ease(mut self, ease: Easing) -> Self {
        self.ease = ease;
        self
    }

    #[must_use]
    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    #[must_use]
    pub fn repeat_forever(mut self, yoyo: bool) -> Self {
        self.repeat = Repeat::Forever { yoyo };
        self
    }

    #[must_use]
    pub fn on_complete(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Playhead in `[0, 1]` after `t` seconds, and whether the tween is done.
    fn progress(&self, t: f32) -> (f32, bool) {
        if self.duration <= 0.0 {
            return (1.0, self.repeat == Repeat::Once);
        }
        let cycles = t / self.duration;
        match self.repeat {
            Repeat::Once => (cycles.min(1.0), cycles >= 1.0),
            Repeat::Forever { yoyo } => {
                let cycle = cycles.floor();
                let frac = cycles - cycle;
                let backwards = yoyo && (cycle as u64) % 2 == 1;
                (if backwards { 1.0 - frac } else { frac }, false)
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Scheduled {
    tween: Tween,
    start: f32,
    targets: Vec<(Group, usize)>,
    delays: Vec<f32>,
    from: Vec<Option<SmallVec<[f32; 4]>>>,
    finished: bool,
}

impl Scheduled {
    fn end(&self) -> f32 {
        match self.tween.repeat {
            Repeat::Once => self.start + self.delays.iter().copied().fold(0.0, f32::max) + self.tween.duration,
            Repeat::Forever { .. } => f32::INFINITY,
        }
    }
}

/// Tweens on a shared clock.
#[derive(Clone, Debug)]
pub struct Timeline {
    delay: f32,
    scheduled: Vec<Scheduled>,
    end: f32,
    elapsed: f32,
    killed: bool,
}

impl Timeline {
    /// An empty timeline that starts playing after `delay` seconds.
    #[must_use]
    pub fn new(delay: f32) -> Self {
        Self {
            delay: delay.max(0.0),
            scheduled: Vec::new(),
            end: 0.0,
            elapsed: 0.0,
            killed: false,
        }
    }

    /// Place a tween. Targets are resolved against `stage` now.
    pub fn add(&mut self, stage: &Stage, tween: Tween, placement: Placement) -> &mut Self {
        let start = match placement {
            Placement::Sequential => self.end,
            Placement::Offset(offset) => (self.end + offset).max(0.0),
            Placement::At(time) => time.max(0.0),
        };

        let targets = tween.targets.resolve(stage);
        let delays = match tween.stagger {
            Some(stagger) => stagger.delays(targets.len()),
            None => vec![0.0; targets.len()],
        };

        let scheduled = Scheduled {
            from: vec![None; targets.len()],
            tween,
            start,
            targets,
            delays,
            finished: false,
        };

        let end = scheduled.end();
        if end.is_finite() {
            self.end = self.end.max(end);
        }
        self.scheduled.push(scheduled);
        self
    }

    /// Length of the finite part, including the start delay.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.delay + self.end
    }

    /// True once every tween has finished. Never true with a repeating tween.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.scheduled.iter().all(|s| s.finished)
    }

    /// Stop the timeline where it is. Elements keep their current values.
    pub fn kill(&mut self) {
        self.killed = true;
    }

    /// Move the clock forward by `dt` seconds and write the new values to
    /// `stage`. Returns the markers of tweens that finished during this step.
    pub fn advance(&mut self, stage: &mut Stage, dt: f32) -> Vec<Marker> {
        let mut markers = Vec::new();
        if self.killed {
            return markers;
        }

        self.elapsed += dt.max(0.0);
        let local = self.elapsed - self.delay;

        for scheduled in &mut self.scheduled {
            if scheduled.finished {
                continue;
            }
            let Scheduled { tween, start, targets, delays, from, finished } = scheduled;

            let mut all_done = local >= *start;
            for (k, &(group, index)) in targets.iter().enumerate() {
                let t = local - *start - delays[k];
                if t < 0.0 {
                    all_done = false;
                    continue;
                }
                let Some(element) = stage.get_mut(group, index) else {
                    continue;
                };

                let starts = from[k].get_or_insert_with(|| {
                    tween.props.iter().map(|(property, _)| element.get(*property)).collect()
                });

                let (playhead, done) = tween.progress(t);
                let eased = tween.ease.apply(playhead);
                for ((property, value), &begin) in tween.props.iter().zip(starts.iter()) {
                    let end = value.resolve(k, begin);
                    let next = if eased == 1.0 { end } else { begin + (end - begin) * eased };
                    element.set(*property, next);
                }

                all_done &= done;
            }

            if targets.is_empty() {
                all_done = tween.repeat == Repeat::Once && local >= *start + tween.duration;
            }

            if all_done {
                *finished = true;
                if let Some(marker) = tween.marker {
                    markers.push(marker);
                }
            }
        }

        markers
    }
}
