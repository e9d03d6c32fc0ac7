//! Core types: players, positions, configuration, errors, RNG.
//!
//! These are the building blocks shared by the board store, the rules
//! engine and every consumer of the engine.

pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;

pub use config::{GameConfig, MIN_SIDE};
pub use error::{ReversiError, ReversiResult};
pub use player::{PlayerId, PlayerMap};
pub use position::{Direction, Position};
pub use rng::GameRng;
