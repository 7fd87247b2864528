//! Random tile sources.
//!
//! The engine never calls an ambient RNG. Every spawn draws from a
//! [`TileSource`], so a game can be driven by:
//!
//! - [`RandomTiles`]: seeded ChaCha8 RNG (from entropy by default)
//! - [`ScriptedTiles`]: fixed cell choices and tile values for tests
//!
//! ## Deterministic replay
//!
//! ```
//! use mini_2048::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let state = rng.state();
//! let first: Vec<_> = (0..5).map(|_| rng.gen_range_usize(0..9)).collect();
//!
//! let mut restored = GameRng::from_state(&state);
//! let again: Vec<_> = (0..5).map(|_| restored.gen_range_usize(0..9)).collect();
//! assert_eq!(first, again);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Default probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Deterministic RNG.
///
/// Uses ChaCha8 for speed. The seed and word position fully describe the
/// stream, so state capture and restore are O(1).
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread RNG.
    ///
    /// The seed is still recorded, so the game can be replayed from
    /// `state()`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Source of randomness for tile spawns.
///
/// `choose_cell` receives the number of empty cells (always > 0) and returns
/// an index into them. `roll_four` decides whether the new tile is a 4.
pub trait TileSource {
    /// Pick one of `empty_count` empty cells, uniformly.
    fn choose_cell(&mut self, empty_count: usize) -> usize;

    /// Return true if the spawned tile should be a 4.
    fn roll_four(&mut self, probability: f64) -> bool;
}

impl<T: TileSource + ?Sized> TileSource for &mut T {
    fn choose_cell(&mut self, empty_count: usize) -> usize {
        (**self).choose_cell(empty_count)
    }

    fn roll_four(&mut self, probability: f64) -> bool {
        (**self).roll_four(probability)
    }
}

impl TileSource for GameRng {
    fn choose_cell(&mut self, empty_count: usize) -> usize {
        self.gen_range_usize(0..empty_count)
    }

    fn roll_four(&mut self, probability: f64) -> bool {
        self.gen_bool(probability)
    }
}

/// Random tiles from a seeded [`GameRng`].
#[derive(Clone, Debug)]
pub struct RandomTiles {
    rng: GameRng,
}

impl RandomTiles {
    /// Seeded source.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// Source seeded from entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Seeded source when a seed is given, entropy-seeded otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Resume from a checkpoint.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    /// Underlying RNG.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Current RNG state.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl TileSource for RandomTiles {
    fn choose_cell(&mut self, empty_count: usize) -> usize {
        self.rng.choose_cell(empty_count)
    }

    fn roll_four(&mut self, probability: f64) -> bool {
        self.rng.roll_four(probability)
    }
}

/// Scripted tile source for deterministic tests and replays.
///
/// Each spawn pops one cell index and one tile value. Indices are taken
/// modulo the number of empty cells. When a queue runs dry the source falls
/// back to the first empty cell and a 2.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTiles {
    cells: VecDeque<usize>,
    values: VecDeque<u32>,
}

impl ScriptedTiles {
    /// Empty script: every spawn lands on the first empty cell as a 2.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a sequence of spawns as `(empty_cell_index, value)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if a value is not 2 or 4.
    #[must_use]
    pub fn with_spawns(spawns: &[(usize, u32)]) -> Self {
        let mut script = Self::new();
        for &(cell, value) in spawns {
            script.push(cell, value);
        }
        script
    }

    /// Queue one more spawn.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not 2 or 4.
    pub fn push(&mut self, cell: usize, value: u32) {
        assert!(value == 2 || value == 4, "Spawned tiles must be 2 or 4");
        self.cells.push_back(cell);
        self.values.push_back(value);
    }

    /// Number of scripted spawns not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cells.len()
    }
}

impl TileSource for ScriptedTiles {
    fn choose_cell(&mut self, empty_count: usize) -> usize {
        self.cells.pop_front().unwrap_or(0) % empty_count
    }

    fn roll_four(&mut self, _probability: f64) -> bool {
        self.values.pop_front() == Some(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let rng = GameRng::from_entropy();
        assert_eq!(rng.state().seed, rng.seed());
        assert_eq!(rng.state().word_pos, 0);
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.gen_range_usize(0..1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range_usize(0..1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_from_seed() {
        let mut seeded = RandomTiles::from_seed(Some(42));
        let mut plain = RandomTiles::new(42);
        assert_eq!(seeded.state(), plain.state());
        for _ in 0..20 {
            assert_eq!(seeded.choose_cell(9), plain.choose_cell(9));
        }

        let unseeded = RandomTiles::from_seed(None);
        assert_eq!(unseeded.state().word_pos, 0);
        assert_eq!(unseeded.state().seed, unseeded.rng().seed());
    }

    #[test]
    fn test_choose_cell_in_range() {
        let mut tiles = RandomTiles::new(7);
        for empty in 1..=9 {
            for _ in 0..50 {
                assert!(tiles.choose_cell(empty) < empty);
            }
        }
    }

    #[test]
    fn test_four_probability_roughly_respected() {
        let mut tiles = RandomTiles::new(99);
        let fours = (0..10_000).filter(|_| tiles.roll_four(FOUR_PROBABILITY)).count();
        // Expect ~1000
        assert!((800..1200).contains(&fours), "got {} fours", fours);

        assert!(!(0..100).any(|_| tiles.roll_four(0.0)));
        assert!((0..100).all(|_| tiles.roll_four(1.0)));
    }

    #[test]
    fn test_scripted_tiles() {
        let mut script = ScriptedTiles::with_spawns(&[(3, 4), (10, 2)]);
        assert_eq!(script.remaining(), 2);

        assert_eq!(script.choose_cell(5), 3);
        assert!(script.roll_four(0.0));

        // Index wraps around the empty-cell count
        assert_eq!(script.choose_cell(4), 2);
        assert!(!script.roll_four(1.0));

        // Exhausted: first empty cell, value 2
        assert_eq!(script.remaining(), 0);
        assert_eq!(script.choose_cell(6), 0);
        assert!(!script.roll_four(1.0));
    }

    #[test]
    #[should_panic(expected = "Spawned tiles must be 2 or 4")]
    fn test_scripted_rejects_bad_value() {
        let _ = ScriptedTiles::with_spawns(&[(0, 8)]);
    }
}
