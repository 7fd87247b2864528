//! Game sessions and the turn driver.
//!
//! - [`GameSession`]: owned game state with explicit, value-returning
//!   transitions
//! - [`Game`]: a session plus its tile source and configuration, running
//!   the turn protocol for each input

mod game;
mod state;

pub use game::{Game, GameCheckpoint, TurnOutcome};
pub use state::GameSession;
