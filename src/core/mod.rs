//! Core engine types: board, directions, move records, RNG, configuration,
//! errors.
//!
//! Everything here is plain data. The rules that transform boards live in
//! `rules`.

pub mod board;
pub mod action;
pub mod rng;
pub mod config;
pub mod error;

pub use board::{Board, Line, Score, BOARD_SIZE, CELL_COUNT, MAX_TILE_SUM};
pub use action::{Direction, MoveRecord, SpawnedTile};
pub use rng::{GameRng, GameRngState, RandomTiles, ScriptedTiles, TileSource, FOUR_PROBABILITY};
pub use config::GameConfig;
pub use error::GameError;
