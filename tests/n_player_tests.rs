//! N-player capability verification tests.
//!
//! These tests verify that the engine has no hidden 2-player assumptions
//! and works for any player count the board can hold.

use multi_reversi::bots::{Bot, GreedyBot, RandomBot};
use multi_reversi::core::{GameConfig, GameRng, PlayerId, PlayerMap, Position};
use multi_reversi::rules::Reversi;

/// Play a game to the end with the given bot for every seat.
fn play_out(config: GameConfig, bot: &dyn Bot, seed: u64) -> Reversi {
    let mut game = Reversi::from_config(config).unwrap();
    let mut rng = GameRng::new(seed);
    while let Some(mv) = bot.choose_move(&game, &mut rng) {
        game.apply_move(mv).unwrap();
    }
    game
}

/// Test that player IDs cycle through every player count.
#[test]
fn test_player_cycle_all_counts() {
    for player_count in 1..=8 {
        let order: Vec<PlayerId> = PlayerId::new(1).cycle_from(player_count).collect();
        assert_eq!(order, PlayerId::all(player_count).collect::<Vec<_>>());

        let last = PlayerId::new(player_count as u8);
        assert_eq!(last.next(player_count), PlayerId::new(1));
        assert!(last.is_valid(player_count));
        assert!(!PlayerId::new(player_count as u8 + 1).is_valid(player_count));
    }
}

/// Test that the opening region is centred and sized by player count.
#[test]
fn test_opening_region_sizes() {
    for (side, num_players, start) in [(4, 2, 1), (5, 3, 1), (8, 4, 2), (9, 5, 2), (7, 7, 0)] {
        let game = Reversi::new(side, num_players, false).unwrap();
        let cells: Vec<Position> = game.config().opening_cells().collect();

        assert_eq!(cells.len(), num_players * num_players);
        assert_eq!(cells[0], Position::new(start, start));
        assert_eq!(game.available_moves(), cells);
        assert!(game.in_opening_phase());
    }
}

/// Test that each player fills an equal share of the opening region.
#[test]
fn test_opening_share_n_players() {
    for num_players in [3, 5] {
        let config = GameConfig::new(num_players + 4, num_players);
        let mut game = Reversi::from_config(config).unwrap();
        let mut rng = GameRng::new(7);

        for _ in 0..config.opening_piece_count() {
            assert!(game.in_opening_phase());
            let mv = RandomBot.choose_move(&game, &mut rng).unwrap();
            game.apply_move(mv).unwrap();
        }

        assert!(!game.in_opening_phase());
        let total: usize = game.scores().iter().map(|(_, &n)| n).sum();
        assert_eq!(total, num_players * num_players);
    }
}

/// Test that the Othello layout with four players seeds only players 1 and 2.
#[test]
fn test_othello_layout_four_players() {
    let game = Reversi::new(6, 4, true).unwrap();

    assert_eq!(game.piece_count(PlayerId::new(1)), 2);
    assert_eq!(game.piece_count(PlayerId::new(2)), 2);
    assert_eq!(game.piece_count(PlayerId::new(3)), 0);
    assert_eq!(game.piece_count(PlayerId::new(4)), 0);
    assert!(game.moves_for(PlayerId::new(3)).is_empty());
    assert_eq!(game.turn(), PlayerId::new(1));
}

/// Test that a player with no pieces never gets the turn.
#[test]
fn test_pieceless_players_always_skipped() {
    let mut game = Reversi::new(6, 4, true).unwrap();
    let mut rng = GameRng::new(1);

    while let Some(mv) = RandomBot.choose_move(&game, &mut rng) {
        let mover = game.turn();
        assert!(mover == PlayerId::new(1) || mover == PlayerId::new(2));
        game.apply_move(mv).unwrap();
    }

    assert!(game.done());
    assert_eq!(game.piece_count(PlayerId::new(3)), 0);
    assert_eq!(game.piece_count(PlayerId::new(4)), 0);
}

/// Test complete games for a range of player counts.
#[test]
fn test_full_games_various_player_counts() {
    for (side, num_players) in [(4, 2), (5, 3), (6, 4), (7, 5), (8, 6), (9, 7), (8, 8)] {
        let config = GameConfig::new(side, num_players);
        let game = play_out(config, &GreedyBot, 0);

        assert!(game.done(), "{num_players} players on {side}x{side}");
        let scores = game.scores();
        assert_eq!(scores.player_count(), num_players);

        let on_board = game.grid().iter().flatten().filter(|c| c.is_some()).count();
        let total: usize = scores.iter().map(|(_, &n)| n).sum();
        assert_eq!(total, on_board);

        let winners = game.outcome();
        assert!(!winners.is_empty());
        let best = winners
            .iter()
            .map(|&p| game.piece_count(p))
            .max()
            .unwrap();
        for (player, &count) in scores.iter() {
            assert!(count <= best);
            assert_eq!(winners.contains(&player), count == best);
        }
    }
}

/// Test that PlayerMap scales to large player counts.
#[test]
fn test_player_map_many_players() {
    let mut wins: PlayerMap<u32> = PlayerMap::with_value(12, 0);
    for player in PlayerId::all(12) {
        wins[player] += u32::from(player.number());
    }

    assert_eq!(wins.player_count(), 12);
    assert_eq!(wins[PlayerId::new(12)], 12);
    assert_eq!(wins.iter().map(|(_, &w)| w).sum::<u32>(), 78);
}

/// Test a board that the opening region covers completely.
#[test]
fn test_twelve_players() {
    let game = Reversi::new(12, 12, false).unwrap();
    assert_eq!(game.available_moves().len(), 144);

    let game = play_out(GameConfig::new(12, 12), &RandomBot, 5);
    assert!(game.done());
    assert_eq!(game.grid().iter().flatten().filter(|c| c.is_some()).count(), 144);
}
