//! Game configuration.
//!
//! A `GameConfig` fixes everything about a game that isn't board state:
//! the RNG seed, the spawn odds, how many tiles a new game starts with and
//! the application URL used in the share message.

use serde::{Deserialize, Serialize};

use super::board::CELL_COUNT;
use super::rng::FOUR_PROBABILITY;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Probability that a spawned tile is a 4.
    pub four_probability: f64,

    /// Tiles placed on a fresh board.
    pub starting_tiles: usize,

    /// Application URL appended to the share message.
    pub app_url: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            four_probability: FOUR_PROBABILITY,
            starting_tiles: 2,
            app_url: String::new(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the probability of spawning a 4.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Four probability must be in [0, 1]"
        );
        self.four_probability = probability;
        self
    }

    /// Set how many tiles a new game starts with.
    #[must_use]
    pub fn with_starting_tiles(mut self, count: usize) -> Self {
        assert!(count <= CELL_COUNT, "At most 9 starting tiles");
        self.starting_tiles = count;
        self
    }

    /// Set the application URL for share messages.
    #[must_use]
    pub fn with_app_url(mut self, url: impl Into<String>) -> Self {
        self.app_url = url.into();
        self
    }
}
