//! Final result of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied for the most pieces.
    Winners(Vec<PlayerId>),
    /// Nobody has a piece on the board.
    Draw,
}

impl GameResult {
    /// Build a result from the list of players holding the most pieces.
    #[must_use]
    pub fn from_winners(mut winners: Vec<PlayerId>) -> Self {
        match winners.len() {
            0 => GameResult::Draw,
            1 => GameResult::Winner(winners[0]),
            _ => {
                winners.sort_unstable();
                GameResult::Winners(winners)
            }
        }
    }

    /// Check if a player won (alone or shared).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }

    /// Check if more than one player shares the win.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, GameResult::Winners(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(2));
        assert!(!result.is_winner(PlayerId::new(1)));
        assert!(result.is_winner(PlayerId::new(2)));
        assert!(!result.is_tie());

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(1)));

        let tie = GameResult::Winners(vec![PlayerId::new(1), PlayerId::new(3)]);
        assert!(tie.is_winner(PlayerId::new(1)));
        assert!(!tie.is_winner(PlayerId::new(2)));
        assert!(tie.is_winner(PlayerId::new(3)));
        assert!(tie.is_tie());
    }

    #[test]
    fn test_from_winners() {
        assert_eq!(GameResult::from_winners(vec![]), GameResult::Draw);
        assert_eq!(
            GameResult::from_winners(vec![PlayerId::new(3)]),
            GameResult::Winner(PlayerId::new(3))
        );
        assert_eq!(
            GameResult::from_winners(vec![PlayerId::new(2), PlayerId::new(1)]),
            GameResult::Winners(vec![PlayerId::new(1), PlayerId::new(2)])
        );
    }
}
