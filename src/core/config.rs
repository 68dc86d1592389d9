//! Deck session configuration.
//!
//! A reading session is configured once at startup. The config only
//! decides where randomness comes from and whether the deck starts
//! shuffled; it never changes draw semantics.

use serde::{Deserialize, Serialize};

use super::rng::DeckRng;

/// Configuration for a `DeckManager` session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Seed for the session RNG.
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Shuffle once right after the deck is built.
    /// `reset()` still restores the original order.
    pub shuffle_on_start: bool,
}

impl DeckConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Shuffle the deck once on construction.
    #[must_use]
    pub fn shuffled(mut self) -> Self {
        self.shuffle_on_start = true;
        self
    }

    /// Build the RNG this config describes.
    #[must_use]
    pub fn rng(&self) -> DeckRng {
        match self.seed {
            Some(seed) => DeckRng::new(seed),
            None => DeckRng::from_entropy(),
        }
    }

    /// Build an independent stream for a named consumer such as `"menu"`.
    ///
    /// Drawing from it never shifts the session stream from `rng()`.
    #[must_use]
    pub fn rng_for(&self, context: &str) -> DeckRng {
        self.rng().for_context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RandomSource;

    #[test]
    fn test_default_config() {
        let config = DeckConfig::default();
        assert_eq!(config.seed, None);
        assert!(!config.shuffle_on_start);
    }

    #[test]
    fn test_builder_pattern() {
        let config = DeckConfig::default().with_seed(123).shuffled();
        assert_eq!(config.seed, Some(123));
        assert!(config.shuffle_on_start);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = DeckConfig::default().with_seed(8);
        assert_eq!(config.rng().next_f64(), config.rng().next_f64());
    }

    #[test]
    fn test_named_streams() {
        let config = DeckConfig::default().with_seed(8);
        assert_eq!(config.rng_for("menu").seed(), config.rng_for("menu").seed());
        assert_ne!(config.rng_for("menu").seed(), config.rng().seed());
        assert_ne!(config.rng_for("menu").seed(), config.rng_for("spread").seed());
    }

    #[test]
    fn test_serialization() {
        let config = DeckConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DeckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
