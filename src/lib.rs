//! # multi-reversi
//!
//! A rules engine for Reversi generalised to any even or odd square board
//! and any number of players.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Every API takes the player count as context.
//!    Players are numbered from 1; nothing assumes two players.
//!
//! 2. **Pure Queries**: Asking for moves, the outcome or a snapshot never
//!    changes the game. Turn skipping happens only after construction,
//!    `apply_move` and `load_game`.
//!
//! 3. **Cheap Simulation**: The board uses persistent structures from
//!    `im`, so `simulate_moves` clones in O(1) and bots can search freely.
//!
//! ## Modules
//!
//! - `core`: Players, positions, configuration, errors, RNG
//! - `board`: Grid plus per-player occupied sets, kept in sync
//! - `rules`: The `Reversi` engine, results and snapshots
//! - `bots`: Random, greedy and one-ply lookahead players
//! - `arena`: Batch play between bots

pub mod arena;
pub mod board;
pub mod bots;
pub mod core;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameRng, PlayerId, PlayerMap, Position, ReversiError, ReversiResult,
};

pub use crate::board::BoardStore;

pub use crate::rules::{GameResult, Reversi, Snapshot};

pub use crate::bots::{Bot, BotKind, GreedyBot, LookaheadBot, RandomBot};

pub use crate::arena::{play_game, run_matches, ArenaConfig, MatchStats};
