//! Game driver: owns a session, a tile source and the configuration, and
//! runs the turn protocol for each input.
//!
//! Turn protocol:
//! 1. compute the move
//! 2. if the board is unchanged, discard the input
//! 3. otherwise spawn one tile and adopt the new board
//! 4. report the derived score and game-over flag

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::core::action::{Direction, SpawnedTile};
use crate::core::board::{Board, Score};
use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::core::rng::{GameRngState, RandomTiles, TileSource};
use crate::share::share_message;

use super::state::GameSession;

/// What a single input did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Direction that was played.
    pub direction: Direction,
    /// False when the move was a no-op and got discarded.
    pub changed: bool,
    /// Tile spawned after an accepted move.
    pub spawned: Option<SpawnedTile>,
    /// Score after the turn.
    pub score: Score,
    /// Game-over flag after the turn.
    pub game_over: bool,
}

/// Saved game: session plus RNG position, enough to resume deterministically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCheckpoint {
    pub session: GameSession,
    pub rng: GameRngState,
}

/// A running game.
#[derive(Clone, Debug)]
pub struct Game<S = RandomTiles> {
    config: GameConfig,
    source: S,
    session: GameSession,
}

impl Game<RandomTiles> {
    /// Start a game with a seeded (or entropy-seeded) RNG.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let source = RandomTiles::from_seed(config.seed);
        Self::with_source(config, source)
    }

    /// Capture the session and RNG position.
    #[must_use]
    pub fn checkpoint(&self) -> GameCheckpoint {
        GameCheckpoint {
            session: self.session.clone(),
            rng: self.source.state(),
        }
    }

    /// Resume from a checkpoint.
    #[must_use]
    pub fn restore(config: GameConfig, checkpoint: GameCheckpoint) -> Self {
        debug!(
            seed = checkpoint.rng.seed,
            moves = checkpoint.session.move_count(),
            score = checkpoint.session.score(),
            "Restored game from checkpoint"
        );
        Self {
            config,
            source: RandomTiles::from_state(&checkpoint.rng),
            session: checkpoint.session,
        }
    }
}

impl<S: TileSource> Game<S> {
    /// Start a game drawing tiles from `source`.
    #[must_use]
    pub fn with_source(config: GameConfig, mut source: S) -> Self {
        let session = GameSession::start(&mut source, &config);
        debug!(score = session.score(), "Started new game");
        Self {
            config,
            source,
            session,
        }
    }

    /// Continue an existing session.
    #[must_use]
    pub fn from_session(config: GameConfig, source: S, session: GameSession) -> Self {
        Self {
            config,
            source,
            session,
        }
    }

    /// Play one direction.
    pub fn play(&mut self, direction: Direction) -> TurnOutcome {
        let (next, changed) = self
            .session
            .apply_move_with(direction, &mut self.source, self.config.four_probability);

        if !changed {
            trace!(%direction, "Ignored move that does not change the board");
            return self.outcome(direction, false, None);
        }

        let spawned = next.history().last().and_then(|record| record.spawned);
        self.session = next;

        debug!(
            %direction,
            score = self.session.score(),
            spawned = ?spawned,
            "Applied move"
        );

        let outcome = self.outcome(direction, true, spawned);
        if outcome.game_over {
            info!(
                score = outcome.score,
                moves = self.session.move_count(),
                max_tile = self.session.max_tile(),
                "Game over"
            );
        }
        outcome
    }

    /// Parse a direction from UI input and play it.
    ///
    /// Unknown directions are rejected before touching the board.
    pub fn handle_input(&mut self, input: &str) -> Result<TurnOutcome, GameError> {
        let direction: Direction = input.parse()?;
        Ok(self.play(direction))
    }

    /// Throw away the current session and start over.
    pub fn restart(&mut self) {
        self.session = GameSession::start(&mut self.source, &self.config);
        debug!(score = self.session.score(), "Restarted game");
    }

    fn outcome(&self, direction: Direction, changed: bool, spawned: Option<SpawnedTile>) -> TurnOutcome {
        TurnOutcome {
            direction,
            changed,
            spawned,
            score: self.session.score(),
            game_over: self.session.is_over(),
        }
    }

    // === Accessors ===

    /// Current session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.session.board()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> Score {
        self.session.score()
    }

    /// Game-over flag.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// Configuration this game runs with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Tile source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Share message with the configured URL, once the game is over.
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.is_over()
            .then(|| share_message(self.score(), &self.config.app_url))
    }
}
