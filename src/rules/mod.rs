//! Rules engine for multi-player Reversi.
//!
//! `Reversi` owns the board and implements:
//! - Legal moves (center-fill opening, then flanking captures)
//! - Move application and turn skipping
//! - Game end and outcome
//! - Snapshot load/save and move simulation

pub mod engine;
pub mod result;
pub mod snapshot;

pub use engine::{Captures, Reversi};
pub use result::GameResult;
pub use snapshot::Snapshot;
