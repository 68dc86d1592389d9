//! Visual state of every animated element on the menu screen.
//!
//! Elements are addressed by `Group` and index within the group, the way
//! a view addresses them by CSS class. The stage holds plain numbers; a
//! renderer reads them each frame.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A class of animated elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    Particle,
    DecorativeCard,
    AppTitle,
    AppSubtitle,
    MenuCard,
    Container,
}

/// An animatable property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    Opacity,
    Scale,
    X,
    Y,
    /// Degrees.
    Rotation,
    /// Degrees around the horizontal axis.
    RotateX,
}

/// Animatable properties of one element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    pub opacity: f32,
    pub scale: f32,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub rotate_x: f32,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            rotate_x: 0.0,
        }
    }
}

impl VisualState {
    #[must_use]
    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::Opacity => self.opacity,
            Property::Scale => self.scale,
            Property::X => self.x,
            Property::Y => self.y,
            Property::Rotation => self.rotation,
            Property::RotateX => self.rotate_x,
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        let slot = match property {
            Property::Opacity => &mut self.opacity,
            Property::Scale => &mut self.scale,
            Property::X => &mut self.x,
            Property::Y => &mut self.y,
            Property::Rotation => &mut self.rotation,
            Property::RotateX => &mut self.rotate_x,
        };
        *slot = value;
    }
}

/// End value of a property, optionally per element or relative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Same absolute value for every element.
    To(f32),
    /// Absolute value per element index; missing entries fall back to the
    /// last value given, or stay put when the list is empty.
    PerIndex(Vec<f32>),
    /// Offset from the element's value when the tween starts.
    By(f32),
    /// Offset per element index.
    ByPerIndex(Vec<f32>),
}

impl Value {
    /// Resolve the end value for element `index` starting from `start`.
    #[must_use]
    pub fn resolve(&self, index: usize, start: f32) -> f32 {
        let pick = |values: &[f32]| values.get(index).or_else(|| values.last()).copied();
        match self {
            Value::To(v) => *v,
            Value::PerIndex(values) => pick(values).unwrap_or(start),
            Value::By(delta) => start + delta,
            Value::ByPerIndex(deltas) => start + pick(deltas).unwrap_or(0.0),
        }
    }
}

/// All animated elements and their current visual state.
#[derive(Clone, Debug, Default)]
pub struct Stage {
    groups: FxHashMap<Group, Vec<VisualState>>,
}

impl Stage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a group of `count` elements in default state.
    #[must_use]
    pub fn with_group(mut self, group: Group, count: usize) -> Self {
        self.groups.insert(group, vec![VisualState::default(); count]);
        self
    }

    /// Number of elements in a group; 0 if the group is absent.
    #[must_use]
    pub fn count(&self, group: Group) -> usize {
        self.groups.get(&group).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn get(&self, group: Group, index: usize) -> Option<&VisualState> {
        self.groups.get(&group).and_then(|elements| elements.get(index))
    }

    pub fn get_mut(&mut self, group: Group, index: usize) -> Option<&mut VisualState> {
        self.groups.get_mut(&group).and_then(|elements| elements.get_mut(index))
    }

    /// Elements of a group in index order.
    #[must_use]
    pub fn group(&self, group: Group) -> &[VisualState] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Jump every element of a group to a value, without animating.
    pub fn set(&mut self, group: Group, property: Property, value: &Value) {
        if let Some(elements) = self.groups.get_mut(&group) {
            for (i, element) in elements.iter_mut().enumerate() {
                let next = value.resolve(i, element.get(property));
                element.set(property, next);
            }
        }
    }
}
