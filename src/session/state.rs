//! `GameSession`: the explicit, owned state of one game.
//!
//! A session is a value. `apply_move` never mutates `self`. It returns the
//! next session and whether the move was accepted. Score and game-over are
//! derived from the board on demand and never stored.
//!
//! History uses `im::Vector`, so cloning a session is O(1) no matter how
//! long the game has run.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::action::{Direction, MoveRecord};
use crate::core::board::{Board, Score};
use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::core::rng::{TileSource, FOUR_PROBABILITY};
use crate::rules::{has_moves, move_board, place_random_tile};
use crate::share::share_message;

/// One game: the current board plus the accepted moves that led to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    history: Vector<MoveRecord>,
}

impl GameSession {
    /// Start a standard game: empty board plus two random tiles.
    #[must_use]
    pub fn new<S: TileSource + ?Sized>(source: &mut S) -> Self {
        Self::start(source, &GameConfig::default())
    }

    /// Start a game using the spawn rules in `config`.
    #[must_use]
    pub fn start<S: TileSource + ?Sized>(source: &mut S, config: &GameConfig) -> Self {
        let mut board = Board::empty();
        for _ in 0..config.starting_tiles {
            if let Some((next, _)) = place_random_tile(&board, source, config.four_probability) {
                board = next;
            }
        }
        Self::from_board(board)
    }

    /// Resume from an arbitrary (already validated) board with no history.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vector::new(),
        }
    }

    // === Derived state ===

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Sum of all tiles.
    #[must_use]
    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Largest tile on the board.
    #[must_use]
    pub fn max_tile(&self) -> u32 {
        self.board.max_tile()
    }

    /// True when no move can change the board.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !has_moves(&self.board)
    }

    /// Number of accepted moves.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.history.len() as u32
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Share message, available once the game is over.
    #[must_use]
    pub fn share_text(&self, url: &str) -> Option<String> {
        self.is_over().then(|| share_message(self.score(), url))
    }

    // === Transitions ===

    /// Apply one move with the standard 2/4 spawn odds.
    ///
    /// Returns the next session and whether the board changed. A move that
    /// changes nothing is discarded: no spawn, no history entry.
    #[must_use]
    pub fn apply_move<S: TileSource + ?Sized>(&self, direction: Direction, source: &mut S) -> (Self, bool) {
        self.apply_move_with(direction, source, FOUR_PROBABILITY)
    }

    /// Apply one move, spawning a 4 with probability `four_probability`.
    #[must_use]
    pub fn apply_move_with<S: TileSource + ?Sized>(
        &self,
        direction: Direction,
        source: &mut S,
        four_probability: f64,
    ) -> (Self, bool) {
        let moved = move_board(&self.board, direction);
        if moved == self.board {
            return (self.clone(), false);
        }

        let (board, spawned) = match place_random_tile(&moved, source, four_probability) {
            Some((board, tile)) => (board, Some(tile)),
            None => (moved, None),
        };

        let mut history = self.history.clone();
        let sequence = history.len() as u32 + 1;
        history.push_back(MoveRecord::new(direction, spawned, board.score(), sequence));

        (Self { board, history }, true)
    }

    // === Snapshots ===

    /// Encode the session with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a session. The board is validated while decoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
