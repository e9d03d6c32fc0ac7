//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{PlayerId, Position, ReversiError};
use crate::rules::Reversi;

impl From<ReversiError> for PyErr {
    fn from(err: ReversiError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for the Reversi engine.
///
/// Positions are `(row, col)` tuples; cells are `None` or a player number.
#[pyclass(name = "Reversi")]
#[derive(Clone)]
pub struct PyReversi(pub Reversi);

#[pymethods]
impl PyReversi {
    /// Create a new game.
    ///
    /// # Arguments
    /// - side: Board side length (>= 4, same parity as players)
    /// - players: Number of players
    /// - othello: Standard 4-piece start instead of the center-fill opening
    #[new]
    #[pyo3(signature = (side = 8, players = 2, othello = true))]
    fn new(side: usize, players: usize, othello: bool) -> PyResult<Self> {
        Ok(Self(Reversi::new(side, players, othello)?))
    }

    /// Board side length.
    #[getter]
    fn size(&self) -> usize {
        self.0.size()
    }

    #[getter]
    fn num_players(&self) -> usize {
        self.0.num_players()
    }

    #[getter]
    fn othello(&self) -> bool {
        self.0.othello_layout()
    }

    /// Player number to move.
    #[getter]
    fn turn(&self) -> u8 {
        self.0.turn().number()
    }

    /// Owner of a cell, or None if it is empty.
    fn piece_at(&self, row: usize, col: usize) -> PyResult<Option<u8>> {
        let owner = self.0.piece_at(Position::new(row, col))?;
        Ok(owner.map(PlayerId::number))
    }

    /// The board as a list of rows.
    #[getter]
    fn grid(&self) -> Vec<Vec<Option<u8>>> {
        self.0.save_game().grid
    }

    /// Number of cells owned by a player.
    fn piece_count(&self, player: u8) -> usize {
        self.0.piece_count(PlayerId::new(player))
    }

    #[getter]
    fn available_moves(&self) -> Vec<(usize, usize)> {
        self.0.available_moves().into_iter().map(Into::into).collect()
    }

    fn legal_move(&self, row: usize, col: usize) -> PyResult<bool> {
        Ok(self.0.legal_move(Position::new(row, col))?)
    }

    /// Play at `(row, col)` for the player to move.
    fn apply_move(&mut self, row: usize, col: usize) -> PyResult<()> {
        Ok(self.0.apply_move(Position::new(row, col))?)
    }

    #[getter]
    fn done(&self) -> bool {
        self.0.done()
    }

    /// Player numbers with the most pieces; empty while the game runs.
    #[getter]
    fn outcome(&self) -> Vec<u8> {
        self.0.outcome().into_iter().map(PlayerId::number).collect()
    }

    /// Replace the board and the player to move.
    fn load_game(&mut self, turn: u8, grid: Vec<Vec<Option<u8>>>) -> PyResult<()> {
        Ok(self.0.load_game(turn, &grid)?)
    }

    /// `(turn, grid)` for the current position.
    fn save_game(&self) -> (u8, Vec<Vec<Option<u8>>>) {
        let snapshot = self.0.save_game();
        (snapshot.turn, snapshot.grid)
    }

    /// Apply moves to a copy of this game and return the copy.
    fn simulate_moves(&self, moves: Vec<(usize, usize)>) -> PyResult<Self> {
        let moves: Vec<Position> = moves.into_iter().map(Position::from).collect();
        Ok(Self(self.0.simulate_moves(&moves)?))
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Reversi(side={}, players={}, turn={})",
            self.0.size(),
            self.0.num_players(),
            self.0.turn().number()
        )
    }
}
