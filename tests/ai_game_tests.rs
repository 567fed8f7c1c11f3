use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{AiPlayer, Coord, Game, GameConfig, GameStatus, Grid, NullReporter, Player, Side};

fn ai_game(seed: u64) -> Game {
    Game::new(
        &GameConfig::default(),
        [
            Box::new(AiPlayer::named("Computer 1")),
            Box::new(AiPlayer::named("Computer 2")),
        ],
        SmallRng::seed_from_u64(seed),
        Box::new(NullReporter),
    )
    .unwrap()
}

#[test]
fn test_ai_targets_stay_on_grid() {
    let mut ai = AiPlayer::new();
    let mut rng = SmallRng::seed_from_u64(11);
    let grid = Grid::new(6);
    for _ in 0..500 {
        let t: Coord = ai.select_target(&mut rng, &grid).unwrap();
        assert!(!grid.is_out_of_bounds(t));
    }
}

#[test]
fn test_ai_cannot_aim_at_empty_grid() {
    let mut ai = AiPlayer::new();
    let mut rng = SmallRng::seed_from_u64(11);
    assert!(ai.select_target(&mut rng, &Grid::new(0)).is_err());
}

#[test]
fn test_ai_vs_ai_game() {
    for seed in [1, 2, 3, 123] {
        let mut game = ai_game(seed);
        let winner = game.run().unwrap();
        let loser = winner.opponent();
        assert_eq!(game.status(), GameStatus::Won(winner));
        assert_eq!(game.grid(loser).survivors_remaining(), 0);
        assert!(game.grid(winner).survivors_remaining() > 0);

        let summary = game.summary();
        let total_shots = summary.stats[0].shots + summary.stats[1].shots;
        assert_eq!(total_shots, summary.turns);
        // every fleet cell of the loser was hit exactly once
        let fleet_cells = GameConfig::default().fleet_cells() as u32;
        assert_eq!(summary.stats[winner.index()].hits, fleet_cells);
    }
}

#[test]
fn test_turn_ownership_follows_hits() {
    let mut game = ai_game(77);
    while game.status() == GameStatus::InProgress {
        let before = game.active();
        let shot = game.step().unwrap();
        if game.status() != GameStatus::InProgress {
            break;
        }
        if shot.is_hit() {
            assert_eq!(game.active(), before);
        } else {
            assert_eq!(game.active(), before.opponent());
        }
    }
    assert!(matches!(game.status(), GameStatus::Won(Side::One | Side::Two)));
}

#[test]
fn test_same_seed_same_game() {
    let mut a = ai_game(2024);
    let mut b = ai_game(2024);
    assert_eq!(a.run().unwrap(), b.run().unwrap());
    assert_eq!(a.summary(), b.summary());
}
