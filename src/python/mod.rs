//! Python bindings for the multi-player Reversi engine.
//!
//! # Quick Start
//!
//! ```python
//! import multi_reversi as mr
//!
//! game = mr.Reversi(side=8, players=2, othello=True)
//! while not game.done:
//!     row, col = game.available_moves[0]
//!     game.apply_move(row, col)
//!
//! print(game)
//! print(game.outcome)
//! ```

use pyo3::prelude::*;

mod py_reversi;

pub use py_reversi::*;

/// multi_reversi: N-player Reversi on square boards.
#[pymodule]
fn multi_reversi(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyReversi>()?;
    Ok(())
}
