//! Deterministic random number generation for bots and batch play.
//!
//! The engine itself is fully deterministic; randomness only enters through
//! move choice. `GameRng` gives every game in a batch its own reproducible
//! stream:
//!
//! ```
//! use multi_reversi::core::GameRng;
//!
//! let mut batch = GameRng::new(42);
//! let mut game_rng = batch.fork();
//!
//! let moves = [10, 20, 30];
//! assert!(game_rng.choose(&moves).is_some());
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8: the same seed always yields the same sequence on every
/// platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent stream.
    ///
    /// The n-th fork of a given seed is always the same stream, regardless of
    /// how many values the parent has produced.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
