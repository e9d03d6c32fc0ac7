//! Board store: an indexed grid of cell owners plus per-player occupied sets.
//!
//! Pure data structure with no rules knowledge. The rules engine owns one
//! store and is responsible for bounds checking and player validation.

pub mod store;

pub use store::BoardStore;
