//! Board snapshots: the only persisted/exchanged state format.
//!
//! A snapshot is the player to move plus a `side` x `side` matrix of raw
//! player numbers, `None` marking an empty cell. Snapshots are plain data;
//! validation happens when one is loaded into an engine.

use serde::{Deserialize, Serialize};

use crate::core::{ReversiError, ReversiResult};

/// Full board state: whose turn it is and who owns each cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player number of the player to move.
    pub turn: u8,
    /// Rows of cells, top row first.
    pub grid: Vec<Vec<Option<u8>>>,
}

impl Snapshot {
    /// Create a snapshot.
    #[must_use]
    pub fn new(turn: u8, grid: Vec<Vec<Option<u8>>>) -> Self {
        Self { turn, grid }
    }

    /// Encode with `bincode`.
    pub fn to_bytes(&self) -> ReversiResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| ReversiError::Encoding(e.to_string()))
    }

    /// Decode a snapshot produced by [`Snapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> ReversiResult<Self> {
        bincode::deserialize(bytes).map_err(|e| ReversiError::Encoding(e.to_string()))
    }
}
