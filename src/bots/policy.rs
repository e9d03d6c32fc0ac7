//! Move-choice policies built on the engine's public surface.
//!
//! - `RandomBot`: uniform over legal moves
//! - `GreedyBot`: most own pieces right after the move
//! - `LookaheadBot`: most own pieces on average after every reply

use std::str::FromStr;

use thiserror::Error;

use crate::core::{GameRng, Position};
use crate::rules::Reversi;

/// A move-choice policy for the player to move.
pub trait Bot: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Choose a move for `game.turn()`.
    ///
    /// Returns `None` if the player to move has no legal move.
    fn choose_move(&self, game: &Reversi, rng: &mut GameRng) -> Option<Position>;
}

/// Uniform random choice among the legal moves.
#[derive(Clone, Debug, Default)]
pub struct RandomBot;

impl Bot for RandomBot {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&self, game: &Reversi, rng: &mut GameRng) -> Option<Position> {
        let moves = game.available_moves();
        rng.choose(&moves).copied()
    }
}

/// Picks the move that leaves the mover with the most pieces.
///
/// Ties go to the first candidate in row-major order.
#[derive(Clone, Debug, Default)]
pub struct GreedyBot;

impl Bot for GreedyBot {
    fn name(&self) -> &'static str {
        "smart"
    }

    fn choose_move(&self, game: &Reversi, _rng: &mut GameRng) -> Option<Position> {
        let mover = game.turn();
        let mut best: Option<(Position, usize)> = None;

        for mv in game.available_moves() {
            let Ok(sim) = game.simulate_moves(&[mv]) else { continue };
            let count = sim.piece_count(mover);
            if best.map_or(true, |(_, b)| count > b) {
                best = Some((mv, count));
            }
        }

        best.map(|(mv, _)| mv)
    }
}

/// One-ply lookahead over the next player's replies.
///
/// For each candidate, every reply of whoever moves next is simulated and
/// the mover's piece counts are averaged. A candidate after which nobody
/// else can reply is taken immediately.
#[derive(Clone, Debug, Default)]
pub struct LookaheadBot;

impl Bot for LookaheadBot {
    fn name(&self) -> &'static str {
        "very-smart"
    }

    fn choose_move(&self, game: &Reversi, _rng: &mut GameRng) -> Option<Position> {
        let mover = game.turn();
        let mut best: Option<(Position, f64)> = None;

        for mv in game.available_moves() {
            let Ok(after) = game.simulate_moves(&[mv]) else { continue };
            let replies = after.available_moves();
            if replies.is_empty() {
                return Some(mv);
            }

            let total: usize = replies
                .iter()
                .filter_map(|&reply| game.simulate_moves(&[mv, reply]).ok())
                .map(|sim| sim.piece_count(mover))
                .sum();
            let average = total as f64 / replies.len() as f64;

            if best.map_or(true, |(_, b)| average > b) {
                best = Some((mv, average));
            }
        }

        best.map(|(mv, _)| mv)
    }
}

/// Named bot strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BotKind {
    Random,
    Greedy,
    Lookahead,
}

impl BotKind {
    /// Instantiate the strategy.
    #[must_use]
    pub fn build(self) -> Box<dyn Bot> {
        match self {
            BotKind::Random => Box::new(RandomBot),
            BotKind::Greedy => Box::new(GreedyBot),
            BotKind::Lookahead => Box::new(LookaheadBot),
        }
    }
}

/// Unrecognised strategy name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown bot strategy: {0:?} (expected random, smart or very-smart)")]
pub struct UnknownBot(pub String);

impl FromStr for BotKind {
    type Err = UnknownBot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "random" => Ok(BotKind::Random),
            "smart" | "greedy" => Ok(BotKind::Greedy),
            "very-smart" | "lookahead" => Ok(BotKind::Lookahead),
            other => Err(UnknownBot(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn grid(rows: &[&str]) -> Vec<Vec<Option<u8>>> {
        rows.iter()
            .map(|row| {
                row.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| c.to_digit(10).map(|d| d as u8))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_random_bot_picks_legal_move() {
        let game = Reversi::new(8, 2, true).unwrap();
        let mut rng = GameRng::new(42);

        for _ in 0..20 {
            let mv = RandomBot.choose_move(&game, &mut rng).unwrap();
            assert!(game.legal_move(mv).unwrap());
        }
    }

    #[test]
    fn test_greedy_prefers_bigger_capture() {
        let mut game = Reversi::new(6, 2, true).unwrap();
        game.load_game(
            1,
            &grid(&[
                "1 2 . . . .",
                ". . . . . .",
                ". . . . . .",
                "1 2 2 2 . .",
                ". . . . . .",
                ". . . . . .",
            ]),
        )
        .unwrap();

        let mut rng = GameRng::new(0);
        assert_eq!(
            GreedyBot.choose_move(&game, &mut rng),
            Some(Position::new(3, 4))
        );
    }

    #[test]
    fn test_greedy_tie_goes_to_first_move() {
        let game = Reversi::new(8, 2, true).unwrap();
        let mut rng = GameRng::new(0);
        // Every opening move flips exactly one piece.
        assert_eq!(
            GreedyBot.choose_move(&game, &mut rng),
            Some(Position::new(2, 3))
        );
    }

    #[test]
    fn test_lookahead_takes_move_that_ends_replies() {
        let mut game = Reversi::new(6, 2, true).unwrap();
        game.load_game(
            1,
            &grid(&[
                "1 2 . . . .",
                ". . . . . .",
                ". . . . . .",
                ". . . . . .",
                ". . . . . .",
                ". . . . . .",
            ]),
        )
        .unwrap();

        let mut rng = GameRng::new(0);
        let mv = LookaheadBot.choose_move(&game, &mut rng).unwrap();
        assert_eq!(mv, Position::new(0, 2));
        let after = game.simulate_moves(&[mv]).unwrap();
        assert!(after.done());
        assert_eq!(after.outcome(), vec![PlayerId::new(1)]);
    }

    #[test]
    fn test_no_moves_returns_none() {
        let mut game = Reversi::new(4, 2, true).unwrap();
        game.load_game(1, &grid(&["1 1 1 1"; 4])).unwrap();
        let mut rng = GameRng::new(0);

        assert_eq!(RandomBot.choose_move(&game, &mut rng), None);
        assert_eq!(GreedyBot.choose_move(&game, &mut rng), None);
        assert_eq!(LookaheadBot.choose_move(&game, &mut rng), None);
    }

    #[test]
    fn test_bot_kind_parse() {
        assert_eq!("random".parse::<BotKind>(), Ok(BotKind::Random));
        assert_eq!("smart".parse::<BotKind>(), Ok(BotKind::Greedy));
        assert_eq!("very-smart".parse::<BotKind>(), Ok(BotKind::Lookahead));
        assert_eq!("".parse::<BotKind>(), Ok(BotKind::Random));
        assert_eq!(
            "genius".parse::<BotKind>(),
            Err(UnknownBot("genius".to_string()))
        );
        assert_eq!(BotKind::Lookahead.build().name(), "very-smart");
    }
}
