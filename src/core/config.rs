//! Game configuration.
//!
//! A game is fixed at construction by three parameters:
//! - `side`: the board is `side` x `side`
//! - `num_players`: players numbered 1..=num_players
//! - `othello_layout`: standard 4-piece start, or an empty board with a
//!   center-fill opening phase
//!
//! The configuration never changes for the lifetime of an engine.

use serde::{Deserialize, Serialize};

use super::error::{ReversiError, ReversiResult};
use super::position::Position;

/// Smallest supported board side.
pub const MIN_SIDE: usize = 4;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of squares per side.
    pub side: usize,

    /// Number of players (1-255).
    pub num_players: usize,

    /// Start from the standard Othello cluster instead of the
    /// center-fill opening.
    pub othello_layout: bool,
}

impl GameConfig {
    /// Create a configuration with the center-fill opening.
    pub fn new(side: usize, num_players: usize) -> Self {
        Self {
            side,
            num_players,
            othello_layout: false,
        }
    }

    /// Standard two-player 8x8 Othello.
    pub fn othello() -> Self {
        Self::new(8, 2).with_othello_layout(true)
    }

    /// Set the initial layout mode.
    #[must_use]
    pub fn with_othello_layout(mut self, othello_layout: bool) -> Self {
        self.othello_layout = othello_layout;
        self
    }

    /// Check the construction invariants.
    ///
    /// `side` and `num_players` must share parity, `side` must be at least
    /// [`MIN_SIDE`], and without the Othello layout the `num_players` x
    /// `num_players` opening region must fit on the board. The Othello
    /// layout seeds players 1 and 2, so it needs at least two players.
    pub fn validate(&self) -> ReversiResult<()> {
        if self.num_players == 0 {
            return Err(ReversiError::NoPlayers);
        }
        if self.side % 2 != self.num_players % 2 {
            return Err(ReversiError::ParityMismatch {
                side: self.side,
                num_players: self.num_players,
            });
        }
        if self.side < MIN_SIDE {
            return Err(ReversiError::BoardTooSmall { side: self.side });
        }
        let region_too_big = !self.othello_layout && self.num_players > self.side;
        if region_too_big || self.num_players > u8::MAX as usize {
            return Err(ReversiError::TooManyPlayers {
                side: self.side,
                num_players: self.num_players,
            });
        }
        if self.othello_layout && self.num_players < 2 {
            return Err(ReversiError::OthelloNeedsTwoPlayers {
                num_players: self.num_players,
            });
        }
        Ok(())
    }

    /// Half-open row/column range of the central opening region.
    ///
    /// Only meaningful for a validated configuration.
    #[must_use]
    pub fn opening_region(&self) -> std::ops::Range<usize> {
        let lo = (self.side - self.num_players) / 2;
        lo..lo + self.num_players
    }

    /// Check whether `pos` lies inside the central opening region.
    #[must_use]
    pub fn in_opening_region(&self, pos: Position) -> bool {
        let region = self.opening_region();
        region.contains(&pos.row) && region.contains(&pos.col)
    }

    /// All cells of the opening region, row-major.
    pub fn opening_cells(&self) -> impl Iterator<Item = Position> {
        let region = self.opening_region();
        region
            .clone()
            .flat_map(move |row| region.clone().map(move |col| Position::new(row, col)))
    }

    /// Number of pieces on the board at which the opening phase ends.
    #[must_use]
    pub fn opening_piece_count(&self) -> usize {
        self.num_players * self.num_players
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::othello()
    }
}
