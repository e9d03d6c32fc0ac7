//! Multi-player Reversi rules engine.
//!
//! The engine owns a [`BoardStore`] plus whose turn it is. It implements:
//! - move generation (center-fill opening, then the flanking rule)
//! - move application with captures in all eight directions
//! - turn advancement, skipping players without a legal move
//! - terminal detection and outcome
//! - snapshot loading and saving
//! - non-destructive simulation of move sequences
//!
//! All queries are pure. Construction and [`Reversi::apply_move`] finish by
//! moving the turn to the next player who can move. [`Reversi::load_game`]
//! sets the turn exactly as given.

use log::{debug, trace};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::BoardStore;
use crate::core::{
    Direction, GameConfig, PlayerId, PlayerMap, Position, ReversiError, ReversiResult,
};

use super::result::GameResult;
use super::snapshot::Snapshot;

/// Cells flipped by one move.
pub type Captures = SmallVec<[Position; 16]>;

/// A game of multi-player Reversi.
///
/// Cloning is O(1) thanks to the persistent board store, and a clone is
/// fully independent of its source.
///
/// ## Example
///
/// ```
/// use multi_reversi::core::{PlayerId, Position};
/// use multi_reversi::rules::Reversi;
///
/// let mut game = Reversi::new(8, 2, true).unwrap();
/// assert_eq!(game.available_moves().len(), 4);
///
/// game.apply_move(Position::new(2, 3)).unwrap();
/// assert_eq!(game.turn(), PlayerId::new(2));
/// assert_eq!(game.piece_at(Position::new(3, 3)).unwrap(), Some(PlayerId::new(1)));
/// ```
#[derive(Clone, Debug)]
pub struct Reversi {
    config: GameConfig,
    board: BoardStore,
    turn: PlayerId,
}

impl Reversi {
    /// Create a new game.
    ///
    /// With `othello` set, players 1 and 2 each get two diagonal pieces at
    /// the center of the board. This holds for any player count: in games
    /// with three or more players, players 3 and up start without pieces.
    /// Without `othello`, the board starts empty and the central
    /// `num_players` x `num_players` region has to be filled first.
    ///
    /// Fails if `side` and `num_players` differ in parity, if `side < 4`, or,
    /// without `othello`, if the opening region does not fit on the board.
    pub fn new(side: usize, num_players: usize, othello: bool) -> ReversiResult<Self> {
        Self::from_config(GameConfig::new(side, num_players).with_othello_layout(othello))
    }

    /// Create a new game from a configuration.
    pub fn from_config(config: GameConfig) -> ReversiResult<Self> {
        config.validate()?;

        let mut board = BoardStore::new(config.side, config.num_players);
        if config.othello_layout {
            let lo = config.side / 2 - 1;
            let hi = config.side / 2;
            let (p1, p2) = (PlayerId::new(1), PlayerId::new(2));
            board.place(p1, Position::new(hi, lo));
            board.place(p1, Position::new(lo, hi));
            board.place(p2, Position::new(hi, hi));
            board.place(p2, Position::new(lo, lo));
        }

        let mut game = Self {
            config,
            board,
            turn: PlayerId::FIRST,
        };
        game.advance_to_next_playable_turn(PlayerId::FIRST);
        Ok(game)
    }

    // === Configuration ===

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of squares per side.
    #[must_use]
    pub fn size(&self) -> usize {
        self.config.side
    }

    /// Number of players.
    #[must_use]
    pub fn num_players(&self) -> usize {
        self.config.num_players
    }

    /// Whether the game started from the Othello layout.
    #[must_use]
    pub fn othello_layout(&self) -> bool {
        self.config.othello_layout
    }

    // === Board queries ===

    /// The player who moves next. Meaningless once the game is over.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    /// Owner of the piece at `pos`, if any.
    pub fn piece_at(&self, pos: Position) -> ReversiResult<Option<PlayerId>> {
        self.check_bounds(pos)?;
        Ok(self.board.piece_at(pos))
    }

    /// The board as rows of owners, top row first.
    #[must_use]
    pub fn grid(&self) -> Vec<Vec<Option<PlayerId>>> {
        self.board.rows()
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn piece_count(&self, player: PlayerId) -> usize {
        if player.is_valid(self.num_players()) {
            self.board.count(player)
        } else {
            0
        }
    }

    /// Piece counts for every player.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<usize> {
        PlayerMap::new(self.num_players(), |p| self.board.count(p))
    }

    /// Whether the center-fill opening is still in progress.
    #[must_use]
    pub fn in_opening_phase(&self) -> bool {
        !self.config.othello_layout
            && self.board.occupied_count() < self.config.opening_piece_count()
    }

    // === Moves ===

    /// Legal moves for the player to move, sorted row-major.
    ///
    /// Empty once the game is over.
    #[must_use]
    pub fn available_moves(&self) -> Vec<Position> {
        self.moves_for(self.turn)
    }

    /// Legal moves for `player`, sorted row-major.
    #[must_use]
    pub fn moves_for(&self, player: PlayerId) -> Vec<Position> {
        if self.in_opening_phase() {
            return self
                .config
                .opening_cells()
                .filter(|&pos| self.board.is_empty(pos))
                .collect();
        }

        let mut moves = FxHashSet::default();
        for &origin in self.board.occupants_of(player) {
            for dir in Direction::ALL {
                if let Some(cell) = self.landing_cell(origin, dir, player) {
                    moves.insert(cell);
                }
            }
        }

        let mut moves: Vec<Position> = moves.into_iter().collect();
        moves.sort_unstable();
        moves
    }

    /// Check whether the player to move may play at `pos`.
    ///
    /// During the opening any empty cell of the central region is legal,
    /// capture or not. Afterwards a move must flank at least one run of
    /// opposing pieces.
    pub fn legal_move(&self, pos: Position) -> ReversiResult<bool> {
        self.check_bounds(pos)?;
        Ok(self.is_legal_for(pos, self.turn))
    }

    /// Place a piece for the player to move, flip every flanked run and
    /// pass the turn on.
    ///
    /// The turn goes to the next player in cyclic order who has a legal
    /// move; players without one are skipped. If nobody can move, the game
    /// is over and the turn value is meaningless.
    ///
    /// Fails with `OutOfBounds` for off-board positions, `GameOver` once
    /// no player can move, and `IllegalMove` for any other position that
    /// [`Reversi::legal_move`] rejects.
    pub fn apply_move(&mut self, pos: Position) -> ReversiResult<()> {
        self.check_bounds(pos)?;
        if self.done() {
            return Err(ReversiError::GameOver);
        }

        let player = self.turn;
        if !self.is_legal_for(pos, player) {
            return Err(ReversiError::IllegalMove {
                row: pos.row,
                col: pos.col,
                player,
            });
        }

        let captured = self.captures(pos, player);
        self.board.place(player, pos);
        for &cell in &captured {
            self.board.place(player, cell);
        }
        debug!("{} plays {}, flipping {} pieces", player, pos, captured.len());

        self.advance_to_next_playable_turn(player.next(self.num_players()));
        Ok(())
    }

    /// Cells that `player` would flip by playing at `pos`.
    ///
    /// Each of the eight directions is scanned independently from `pos`: a
    /// run of opposing pieces (of any opponent) is captured when the first
    /// cell after it holds one of `player`'s pieces.
    #[must_use]
    pub fn captures(&self, pos: Position, player: PlayerId) -> Captures {
        let mut captured = Captures::new();
        for dir in Direction::ALL {
            let mut run = Captures::new();
            for cell in pos.ray(dir, self.size()) {
                match self.board.piece_at(cell) {
                    Some(owner) if owner != player => run.push(cell),
                    Some(_) => {
                        captured.extend(run.drain(..));
                        break;
                    }
                    None => break,
                }
            }
        }
        captured
    }

    // === Game end ===

    /// Whether no player has a legal move.
    #[must_use]
    pub fn done(&self) -> bool {
        !self
            .turn
            .cycle_from(self.num_players())
            .any(|p| self.has_moves(p))
    }

    /// Players holding the most pieces once the game is over, in player
    /// order. Empty while the game is running.
    #[must_use]
    pub fn outcome(&self) -> Vec<PlayerId> {
        if !self.done() {
            return Vec::new();
        }

        let scores = self.scores();
        let best = scores.iter().map(|(_, &n)| n).max().unwrap_or(0);
        if best == 0 {
            return Vec::new();
        }
        scores
            .iter()
            .filter(|&(_, &n)| n == best)
            .map(|(p, _)| p)
            .collect()
    }

    /// Structured form of [`Reversi::outcome`]; `None` while the game is
    /// running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.done()
            .then(|| GameResult::from_winners(self.outcome()))
    }

    // === Snapshots ===

    /// Replace the whole game state with `grid` and `turn`.
    ///
    /// `turn` and every occupied cell must be a player number in
    /// `1..=num_players`, and `grid` must be `side` x `side`. Nothing is
    /// changed unless the whole input is valid. The turn is kept as given,
    /// even for a player without a legal move.
    pub fn load_game(&mut self, turn: u8, grid: &[Vec<Option<u8>>]) -> ReversiResult<()> {
        let num_players = self.num_players();
        let side = self.size();

        let turn = PlayerId::new(turn);
        if !turn.is_valid(num_players) {
            return Err(ReversiError::InvalidTurn {
                turn: turn.number(),
                num_players,
            });
        }
        if grid.len() != side || grid.iter().any(|row| row.len() != side) {
            return Err(ReversiError::GridSizeMismatch {
                expected: side,
                rows: grid.len(),
                cols: grid.iter().map(Vec::len).find(|&n| n != side).unwrap_or(side),
            });
        }

        let mut board = BoardStore::new(side, num_players);
        for (row, cells) in grid.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let Some(value) = cell else { continue };
                let player = PlayerId::new(value);
                if !player.is_valid(num_players) {
                    return Err(ReversiError::InvalidPlayer {
                        row,
                        col,
                        value,
                        num_players,
                    });
                }
                board.place(player, Position::new(row, col));
            }
        }

        self.board = board;
        self.turn = turn;
        debug!(
            "loaded game: {} pieces, {} to move",
            self.board.occupied_count(),
            turn
        );
        Ok(())
    }

    /// Load a [`Snapshot`]. See [`Reversi::load_game`].
    pub fn load_snapshot(&mut self, snapshot: &Snapshot) -> ReversiResult<()> {
        self.load_game(snapshot.turn, &snapshot.grid)
    }

    /// Capture the current state as a [`Snapshot`].
    #[must_use]
    pub fn save_game(&self) -> Snapshot {
        let grid = self
            .board
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.map(PlayerId::number)).collect())
            .collect();
        Snapshot::new(self.turn.number(), grid)
    }

    // === Simulation ===

    /// Apply `moves` to an independent copy of this game and return it.
    ///
    /// `self` is never modified. Turn skipping applies exactly as in
    /// [`Reversi::apply_move`], so the copy may have advanced more turns
    /// than there are moves. Fails on the first move the copy rejects.
    pub fn simulate_moves(&self, moves: &[Position]) -> ReversiResult<Reversi> {
        let mut sim = self.clone();
        for &pos in moves {
            sim.apply_move(pos)?;
        }
        Ok(sim)
    }

    // === Internals ===

    fn check_bounds(&self, pos: Position) -> ReversiResult<()> {
        if pos.on_board(self.size()) {
            Ok(())
        } else {
            Err(ReversiError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                side: self.size(),
            })
        }
    }

    fn is_legal_for(&self, pos: Position, player: PlayerId) -> bool {
        if !self.board.is_empty(pos) {
            return false;
        }
        if self.in_opening_phase() {
            return self.config.in_opening_region(pos);
        }
        !self.captures(pos, player).is_empty()
    }

    /// Walk from `origin` across a run of opposing pieces; the empty cell
    /// right after a non-empty run is a legal move.
    fn landing_cell(&self, origin: Position, dir: Direction, player: PlayerId) -> Option<Position> {
        let mut crossed = false;
        for cell in origin.ray(dir, self.size()) {
            match self.board.piece_at(cell) {
                Some(owner) if owner != player => crossed = true,
                Some(_) => return None,
                None => return crossed.then_some(cell),
            }
        }
        None
    }

    fn has_moves(&self, player: PlayerId) -> bool {
        if self.in_opening_phase() {
            return self
                .config
                .opening_cells()
                .any(|pos| self.board.is_empty(pos));
        }
        self.board.occupants_of(player).iter().any(|&origin| {
            Direction::ALL
                .iter()
                .any(|&dir| self.landing_cell(origin, dir, player).is_some())
        })
    }

    /// Hand the turn to the first player, starting at `from`, who has a
    /// legal move. Leaves the turn at `from` when nobody can move.
    fn advance_to_next_playable_turn(&mut self, from: PlayerId) {
        for player in from.cycle_from(self.num_players()) {
            if self.has_moves(player) {
                self.turn = player;
                return;
            }
            trace!("{} has no legal move, skipping", player);
        }
        self.turn = from;
        debug!("no player can move, game over: {:?}", self.outcome());
    }
}

impl std::fmt::Display for Reversi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.board.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(p) => p.number().to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
