//! Batch play between bots.
//!
//! Plays complete games with one bot per player and tallies the results.
//! Every game draws from its own fork of the arena seed, so a run is fully
//! reproducible.

use log::{debug, info};

use crate::bots::Bot;
use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap, ReversiError, ReversiResult};
use crate::rules::{GameResult, Reversi};

/// Configuration for a batch of games.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of games to play.
    pub games: u32,

    /// Seed for the batch RNG; each game uses a fork of it.
    pub seed: u64,

    /// Moves after which an unfinished game is abandoned.
    pub max_moves: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 0,
            max_moves: 10_000,
        }
    }
}

impl ArenaConfig {
    /// Create an arena config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the batch seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-game move cap.
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }
}

/// Tally of a batch of games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchStats {
    /// Games played.
    pub games: u32,

    /// Outright wins per player.
    pub wins: PlayerMap<u32>,

    /// Games won jointly, or ended with no pieces on the board.
    pub ties: u32,

    /// Games abandoned at the move cap.
    pub unfinished: u32,
}

impl MatchStats {
    fn new(player_count: usize) -> Self {
        Self {
            games: 0,
            wins: PlayerMap::with_value(player_count, 0),
            ties: 0,
            unfinished: 0,
        }
    }

    fn record(&mut self, result: Option<GameResult>) {
        self.games += 1;
        match result {
            Some(GameResult::Winner(player)) => self.wins[player] += 1,
            Some(GameResult::Winners(_)) | Some(GameResult::Draw) => self.ties += 1,
            None => self.unfinished += 1,
        }
    }

    /// Fraction of games `player` won outright.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 || !player.is_valid(self.wins.player_count()) {
            return 0.0;
        }
        f64::from(self.wins[player]) / f64::from(self.games)
    }

    /// Fraction of games that ended in a tie.
    #[must_use]
    pub fn tie_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.ties) / f64::from(self.games)
    }
}

/// Play one game from the initial position.
///
/// Stops when no player can move, when the bot to move returns no move, or
/// after `max_moves` moves. Returns the final game.
pub fn play_game(
    config: GameConfig,
    bots: &PlayerMap<Box<dyn Bot>>,
    rng: &mut GameRng,
    max_moves: usize,
) -> ReversiResult<Reversi> {
    check_bots(&config, bots)?;
    let mut game = Reversi::from_config(config)?;

    for _ in 0..max_moves {
        if game.done() {
            break;
        }

        let bot = &bots[game.turn()];
        let mv = match bot.choose_move(&game, rng) {
            Some(mv) => mv,
            None => break,
        };
        game.apply_move(mv)?;
    }

    Ok(game)
}

/// Play `arena.games` games and tally the results.
pub fn run_matches(
    config: GameConfig,
    bots: &PlayerMap<Box<dyn Bot>>,
    arena: ArenaConfig,
) -> ReversiResult<MatchStats> {
    config.validate()?;
    check_bots(&config, bots)?;

    let mut batch_rng = GameRng::new(arena.seed);
    let mut stats = MatchStats::new(config.num_players);

    for index in 0..arena.games {
        let mut rng = batch_rng.fork();
        let seed = rng.seed();
        let game = play_game(config, bots, &mut rng, arena.max_moves)?;
        let result = game.result();
        debug!(
            "game {} (seed {}): {:?}, scores {:?}",
            index,
            seed,
            result,
            game.scores()
        );
        stats.record(result);
    }

    let names: Vec<&str> = bots.iter().map(|(_, bot)| bot.name()).collect();
    info!(
        "{} games of {:?}: wins {:?}, ties {}, unfinished {}",
        stats.games, names, stats.wins, stats.ties, stats.unfinished
    );

    Ok(stats)
}

fn check_bots(config: &GameConfig, bots: &PlayerMap<Box<dyn Bot>>) -> ReversiResult<()> {
    if bots.player_count() == config.num_players {
        Ok(())
    } else {
        Err(ReversiError::BotCountMismatch {
            expected: config.num_players,
            got: bots.player_count(),
        })
    }
}
