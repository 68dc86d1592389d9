//! Stagger offsets for tweens that animate many elements.

use serde::{Deserialize, Serialize};

use crate::core::{DeckRng, RandomSource};

/// Where a stagger starts counting from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaggerFrom {
    Start,
    End,
    /// Middle elements first, working outwards.
    Center,
    /// Outermost elements first, working inwards.
    Edges,
    /// A seeded random order.
    Random(u64),
}

/// Per-element start delays: `each` seconds between consecutive steps.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    pub each: f32,
    pub from: StaggerFrom,
}

impl Stagger {
    #[must_use]
    pub const fn new(each: f32, from: StaggerFrom) -> Self {
        Self { each, from }
    }

    /// Delay for each of `count` elements. The earliest delay is always 0.
    #[must_use]
    pub fn delays(&self, count: usize) -> Vec<f32> {
        self.steps(count).into_iter().map(|step| step * self.each).collect()
    }

    fn steps(&self, count: usize) -> Vec<f32> {
        let last = count.saturating_sub(1) as f32;
        let mid = last / 2.0;

        let raw: Vec<f32> = match self.from {
            StaggerFrom::Start => (0..count).map(|i| i as f32).collect(),
            StaggerFrom::End => (0..count).map(|i| last - i as f32).collect(),
            StaggerFrom::Center => (0..count).map(|i| (i as f32 - mid).abs()).collect(),
            StaggerFrom::Edges => (0..count).map(|i| (i as f32).min(last - i as f32)).collect(),
            StaggerFrom::Random(seed) => {
                let mut order: Vec<usize> = (0..count).collect();
                DeckRng::new(seed).shuffle(&mut order);
                order.into_iter().map(|rank| rank as f32).collect()
            }
        };

        let min = raw.iter().copied().fold(f32::INFINITY, f32::min);
        if min.is_finite() && min > 0.0 {
            raw.into_iter().map(|step| step - min).collect()
        } else {
            raw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-6, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_start_and_end() {
        approx(&Stagger::new(0.1, StaggerFrom::Start).delays(4), &[0.0, 0.1, 0.2, 0.3]);
        approx(&Stagger::new(0.1, StaggerFrom::End).delays(4), &[0.3, 0.2, 0.1, 0.0]);
    }

    #[test]
    fn test_center() {
        approx(&Stagger::new(1.0, StaggerFrom::Center).delays(5), &[2.0, 1.0, 0.0, 1.0, 2.0]);
        // Even counts have two middle elements starting together.
        approx(&Stagger::new(1.0, StaggerFrom::Center).delays(4), &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_edges() {
        approx(&Stagger::new(1.0, StaggerFrom::Edges).delays(5), &[0.0, 1.0, 2.0, 1.0, 0.0]);
        let widest = Stagger::new(0.06, StaggerFrom::Edges).delays(12).into_iter().fold(0.0, f32::max);
        assert!((widest - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_random_is_a_seeded_permutation() {
        let stagger = Stagger::new(1.0, StaggerFrom::Random(7));
        let a = stagger.delays(10);
        assert_eq!(a, stagger.delays(10));

        let mut sorted = a.clone();
        sorted.sort_by(f32::total_cmp);
        approx(&sorted, &(0..10).map(|i| i as f32).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_and_single() {
        assert!(Stagger::new(0.5, StaggerFrom::Center).delays(0).is_empty());
        approx(&Stagger::new(0.5, StaggerFrom::Edges).delays(1), &[0.0]);
    }
}
