//! Game rules: line compression, rotation, moves, spawns and the terminal
//! test.
//!
//! Every function here is a pure transform over [`Board`](crate::core::Board)
//! values. Orchestration (turn protocol, history, logging) lives in
//! `session`.

pub mod engine;

pub use engine::{
    compress_line, has_moves, is_game_over, move_board, place_random_tile, rotate, spawn_random_tile,
};
