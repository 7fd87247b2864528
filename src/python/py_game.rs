//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{Board, GameConfig, GameError, RandomTiles, BOARD_SIZE, CELL_COUNT, FOUR_PROBABILITY};
use crate::rules::compress_line;
use crate::session::{Game, GameSession, TurnOutcome};
use crate::share::share_message;

fn to_py_err(err: GameError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", err))
}

/// Python wrapper for TurnOutcome.
#[pyclass(name = "TurnOutcome")]
#[derive(Clone, Debug)]
pub struct PyTurnOutcome(pub TurnOutcome);

#[pymethods]
impl PyTurnOutcome {
    #[getter]
    fn direction(&self) -> &'static str {
        self.0.direction.as_str()
    }

    #[getter]
    fn changed(&self) -> bool {
        self.0.changed
    }

    /// Spawned tile as (row, col, value), or None.
    #[getter]
    fn spawned(&self) -> Option<(usize, usize, u32)> {
        self.0.spawned.map(|t| (t.row, t.col, t.value))
    }

    #[getter]
    fn score(&self) -> u32 {
        self.0.score
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.game_over
    }

    fn __repr__(&self) -> String {
        format!(
            "TurnOutcome(direction={}, changed={}, score={}, game_over={})",
            self.0.direction, self.0.changed, self.0.score, self.0.game_over
        )
    }
}

/// Python wrapper for Game.
#[pyclass(name = "Game")]
pub struct PyGame {
    inner: Game,
}

#[pymethods]
impl PyGame {
    /// Start a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed; None seeds from entropy
    /// - four_probability: Chance a spawned tile is a 4 (default: 0.1)
    /// - app_url: URL appended to the share message
    /// - board: Optional 3x3 starting grid
    #[new]
    #[pyo3(signature = (seed = None, four_probability = FOUR_PROBABILITY, app_url = String::new(), board = None))]
    fn new(
        seed: Option<u64>,
        four_probability: f64,
        app_url: String,
        board: Option<Vec<Vec<u32>>>,
    ) -> PyResult<Self> {
        if !(0.0..=1.0).contains(&four_probability) {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "four_probability must be in [0, 1]",
            ));
        }

        let mut config = GameConfig::new()
            .with_four_probability(four_probability)
            .with_app_url(app_url);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }

        let inner = match board {
            Some(rows) => {
                let board = Board::from_rows(&rows).map_err(to_py_err)?;
                let source = RandomTiles::from_seed(seed);
                Game::from_session(config, source, GameSession::from_board(board))
            }
            None => Game::new(config),
        };

        Ok(Self { inner })
    }

    /// Play a direction ("up", "down", "left", "right").
    fn play(&mut self, direction: &str) -> PyResult<PyTurnOutcome> {
        self.inner
            .handle_input(direction)
            .map(PyTurnOutcome)
            .map_err(to_py_err)
    }

    /// Start over with a fresh board.
    fn restart(&mut self) {
        self.inner.restart();
    }

    /// Board as nested lists.
    fn board(&self) -> Vec<Vec<u32>> {
        self.inner.board().to_rows()
    }

    /// Board as a 3x3 numpy array.
    fn board_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        let flat: Vec<u32> = self.inner.board().values().collect();
        debug_assert_eq!(flat.len(), CELL_COUNT);
        PyArray1::from_vec_bound(py, flat)
            .reshape([BOARD_SIZE, BOARD_SIZE])
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    #[getter]
    fn score(&self) -> u32 {
        self.inner.score()
    }

    #[getter]
    fn move_count(&self) -> u32 {
        self.inner.session().move_count()
    }

    fn is_over(&self) -> bool {
        self.inner.is_over()
    }

    /// Share message, or None while the game is still running.
    fn share_text(&self) -> Option<String> {
        self.inner.share_text()
    }

    /// Session snapshot as bytes.
    fn snapshot(&self) -> PyResult<Vec<u8>> {
        self.inner.session().to_bytes().map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(score={}, moves={}, over={})",
            self.inner.score(),
            self.inner.session().move_count(),
            self.inner.is_over()
        )
    }
}

/// Compress a single 3-cell line toward index 0.
#[pyfunction]
pub fn compress(line: [u32; BOARD_SIZE]) -> [u32; BOARD_SIZE] {
    compress_line(line)
}

/// Format the share message for a score.
#[pyfunction]
pub fn share(score: u32, url: &str) -> String {
    share_message(score, url)
}
