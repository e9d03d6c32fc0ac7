//! Engine error type.

use thiserror::Error;

use super::player::PlayerId;

/// Result alias used throughout the crate.
pub type ReversiResult<T> = Result<T, ReversiError>;

/// Errors raised by construction, position-accepting operations and
/// snapshot loading.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReversiError {
    #[error("board side {side} and player count {num_players} must have the same parity")]
    ParityMismatch { side: usize, num_players: usize },

    #[error("board side {side} is too small (minimum 4)")]
    BoardTooSmall { side: usize },

    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("the Othello layout needs at least two players, got {num_players}")]
    OthelloNeedsTwoPlayers { num_players: usize },

    #[error("{num_players} players do not fit on a board of side {side}")]
    TooManyPlayers { side: usize, num_players: usize },

    #[error("position ({row}, {col}) is outside the {side}x{side} board")]
    OutOfBounds { row: usize, col: usize, side: usize },

    #[error("turn {turn} is not a player number in 1..={num_players}")]
    InvalidTurn { turn: u8, num_players: usize },

    #[error("grid is {rows}x{cols}, expected {expected}x{expected}")]
    GridSizeMismatch { expected: usize, rows: usize, cols: usize },

    #[error("cell ({row}, {col}) holds {value}, not a player number in 1..={num_players}")]
    InvalidPlayer {
        row: usize,
        col: usize,
        value: u8,
        num_players: usize,
    },

    #[error("{player} cannot play at ({row}, {col})")]
    IllegalMove { row: usize, col: usize, player: PlayerId },

    #[error("the game is over")]
    GameOver,

    #[error("{got} bots supplied for {expected} players")]
    BotCountMismatch { expected: usize, got: usize },

    #[error("snapshot encoding failed: {0}")]
    Encoding(String),
}
