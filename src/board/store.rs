//! Board store: cell ownership and per-player occupied sets.
//!
//! The store keeps two views of the same data:
//! - a row-major grid of `Option<PlayerId>`, one entry per cell
//! - one set of occupied positions per player
//!
//! Both views are updated together by [`BoardStore::place`], the only
//! mutator. A cell is in a player's set iff the grid holds that player at
//! the cell.
//!
//! Both views use `im` persistent structures so cloning a store is O(1)
//! and clones never observe each other's writes.

use im::{HashSet as ImHashSet, Vector};

use crate::core::{PlayerId, PlayerMap, Position};

/// Cell ownership for a `side` x `side` board.
///
/// The store has no rules knowledge and performs no bounds checking;
/// callers pass on-board positions and valid player numbers.
#[derive(Clone, Debug)]
pub struct BoardStore {
    side: usize,
    grid: Vector<Option<PlayerId>>,
    pieces: PlayerMap<ImHashSet<Position>>,
    occupied: usize,
}

impl BoardStore {
    /// Create an empty board.
    #[must_use]
    pub fn new(side: usize, player_count: usize) -> Self {
        Self {
            side,
            grid: std::iter::repeat(None).take(side * side).collect(),
            pieces: PlayerMap::with_default(player_count),
            occupied: 0,
        }
    }

    /// Board side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    fn cell_index(&self, pos: Position) -> usize {
        pos.row * self.side + pos.col
    }

    /// Place a piece for `player` at `pos`.
    ///
    /// If another player owned the cell, it is moved out of that player's
    /// set before being added to `player`'s. Returns the previous owner.
    ///
    /// Panics if `pos` is off the board or `player` is not a player of this
    /// store.
    pub fn place(&mut self, player: PlayerId, pos: Position) -> Option<PlayerId> {
        let idx = self.cell_index(pos);
        let previous = self.grid.set(idx, Some(player));

        match previous {
            Some(owner) if owner == player => {}
            Some(owner) => {
                self.pieces[owner].remove(&pos);
                self.pieces[player].insert(pos);
            }
            None => {
                self.pieces[player].insert(pos);
                self.occupied += 1;
            }
        }

        previous
    }

    /// Owner of the cell at `pos`, if any.
    ///
    /// Panics if `pos` is off the board.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<PlayerId> {
        self.grid[self.cell_index(pos)]
    }

    /// Check whether the cell at `pos` is empty.
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Total number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// The set of cells owned by `player`.
    #[must_use]
    pub fn occupants_of(&self, player: PlayerId) -> &ImHashSet<Position> {
        &self.pieces[player]
    }

    /// Number of cells owned by `player`.
    #[must_use]
    pub fn count(&self, player: PlayerId) -> usize {
        self.pieces[player].len()
    }

    /// The grid as rows of owners, top row first.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Option<PlayerId>>> {
        (0..self.side)
            .map(|row| {
                (0..self.side)
                    .map(|col| self.piece_at(Position::new(row, col)))
                    .collect()
            })
            .collect()
    }
}
