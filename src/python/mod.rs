//! Python bindings for the mini-2048 engine.
//!
//! # Quick Start
//!
//! ```python
//! import mini_2048
//!
//! game = mini_2048.Game(seed=42, app_url="https://example.com")
//! outcome = game.play("left")
//! print(game.board(), outcome.score)
//!
//! if game.is_over():
//!     print(game.share_text())
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// mini_2048: a 3x3 2048 engine.
#[pymodule]
fn mini_2048(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyTurnOutcome>()?;

    m.add_function(wrap_pyfunction!(py_game::compress, m)?)?;
    m.add_function(wrap_pyfunction!(py_game::share, m)?)?;

    Ok(())
}
