//! # mini-2048
//!
//! A 3x3 variant of the 2048 tile-merging puzzle, as an embeddable engine.
//!
//! ## Design Principles
//!
//! 1. **Boards Are Values**: Every rule is a pure function from board to
//!    board. Nothing mutates in place.
//!
//! 2. **One Code Path**: All four directions rotate onto "left", compress
//!    each row, and rotate back.
//!
//! 3. **Injected Randomness**: Spawns draw from a `TileSource`, so games can
//!    be seeded, checkpointed, or fully scripted in tests.
//!
//! ## Quick Start
//!
//! ```
//! use mini_2048::{Direction, Game, GameConfig};
//!
//! let mut game = Game::new(GameConfig::new().with_seed(42).with_app_url("https://example.com"));
//!
//! let outcome = game.play(Direction::Left);
//! assert_eq!(outcome.score, game.score());
//!
//! if game.is_over() {
//!     println!("{}", game.share_text().unwrap());
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: Board, directions, move records, RNG, configuration, errors
//! - `rules`: Line compression, rotation, moves, spawns, terminal test
//! - `session`: `GameSession` state and the `Game` turn driver
//! - `share`: Share message for finished games
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod session;
pub mod share;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Line, Score, BOARD_SIZE, CELL_COUNT, MAX_TILE_SUM,
    Direction, MoveRecord, SpawnedTile,
    GameRng, GameRngState, RandomTiles, ScriptedTiles, TileSource, FOUR_PROBABILITY,
    GameConfig, GameError,
};

pub use crate::rules::{
    compress_line, has_moves, is_game_over, move_board, place_random_tile, rotate, spawn_random_tile,
};

pub use crate::session::{Game, GameCheckpoint, GameSession, TurnOutcome};

pub use crate::share::share_message;
