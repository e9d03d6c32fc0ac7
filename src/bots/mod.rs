//! Bot players.
//!
//! Bots only use the engine's public queries and `simulate_moves`, so they
//! never mutate the game they are asked about.

pub mod policy;

pub use policy::{Bot, BotKind, GreedyBot, LookaheadBot, RandomBot, UnknownBot};
