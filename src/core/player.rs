//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player number supporting 1-255 players. Players are numbered
//! from 1, matching the values stored in board snapshots.
//!
//! ## PlayerMap
//!
//! Efficient per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player number supporting 1-255 players.
///
/// Player numbers are 1-based: the first player is `PlayerId(1)`.
/// `PlayerId(0)` is never produced by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first in a new game.
    pub const FIRST: PlayerId = PlayerId(1);

    /// Create a new player ID from its 1-based number.
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Get the player number (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the storage index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// The next player in cyclic order, wrapping from `player_count` to 1.
    ///
    /// ```
    /// use multi_reversi::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(3).next(3), PlayerId::new(1));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        if self.0 as usize >= player_count {
            PlayerId::FIRST
        } else {
            PlayerId(self.0 + 1)
        }
    }

    /// Check whether this player exists in a game with `player_count` players.
    #[must_use]
    pub fn is_valid(self, player_count: usize) -> bool {
        self.0 >= 1 && (self.0 as usize) <= player_count
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use multi_reversi::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u8).map(PlayerId)
    }

    /// Iterate over every player once, in turn order, starting at `self`.
    pub fn cycle_from(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        std::iter::successors(Some(self), move |p| Some(p.next(player_count))).take(player_count)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use multi_reversi::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(4, 0);
///
/// wins[PlayerId::new(2)] += 1;
/// assert_eq!(wins[PlayerId::new(2)], 1);
/// assert_eq!(wins[PlayerId::new(1)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in player order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8 + 1), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);

        assert_eq!(p1.index(), 0);
        assert_eq!(p2.index(), 1);
        assert_eq!(p2.number(), 2);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_id_next_wraps() {
        assert_eq!(PlayerId::new(1).next(2), PlayerId::new(2));
        assert_eq!(PlayerId::new(2).next(2), PlayerId::new(1));
        assert_eq!(PlayerId::new(4).next(4), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).next(1), PlayerId::new(1));
    }

    #[test]
    fn test_player_id_cycle_from() {
        let order: Vec<_> = PlayerId::new(3).cycle_from(4).collect();
        assert_eq!(
            order,
            vec![PlayerId::new(3), PlayerId::new(4), PlayerId::new(1), PlayerId::new(2)]
        );
    }

    #[test]
    fn test_player_id_validity() {
        assert!(!PlayerId::new(0).is_valid(3));
        assert!(PlayerId::new(1).is_valid(3));
        assert!(PlayerId::new(3).is_valid(3));
        assert!(!PlayerId::new(4).is_valid(3));
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.number() as i32 * 10);

        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map[PlayerId::new(4)], 40);
    }

    #[test]
    fn test_player_map_with_default() {
        let map: PlayerMap<Vec<i32>> = PlayerMap::with_default(2);

        assert!(map[PlayerId::new(1)].is_empty());
        assert!(map[PlayerId::new(2)].is_empty());
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.number() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(1), &1));
        assert_eq!(pairs[2], (PlayerId::new(3), &3));
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.number() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }
}
