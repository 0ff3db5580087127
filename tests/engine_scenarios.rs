use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gridsnake::config::GameConfig;
use gridsnake::game::{
    classify, Cell, CollisionKind, Direction, GameEngine, GameStatus, Outcome, Position,
    StepOutcome,
};

/// An engine on a 5x5 field starting at (2, 2) whose food is not at `avoid`.
fn engine_with_food_away_from(avoid: Position) -> GameEngine {
    (0..)
        .map(|seed| GameEngine::new(GameConfig::centered(5).with_seed(seed)).unwrap())
        .find(|engine| engine.food() != Some(avoid))
        .unwrap()
}

#[test]
fn step_into_open_cell_moves_head_and_clears_tail() {
    let mut engine = engine_with_food_away_from(Position::new(2, 1));
    assert!(engine.start());

    assert_eq!(engine.step(), StepOutcome::Moved);

    assert_eq!(engine.snake().head(), Position::new(2, 1));
    assert_eq!(engine.length(), 1);
    assert_eq!(engine.grid().get(Position::new(2, 2)), Cell::Empty);
    assert_eq!(engine.grid().get(Position::new(2, 1)), Cell::Snake);
    assert!(engine.grid_matches_snake());
}

#[test]
fn reversing_while_playing_is_rejected() {
    let mut engine = GameEngine::new(GameConfig::centered(5).with_seed(1)).unwrap();
    engine.start();

    assert!(!engine.change_direction(Direction::Down));
    assert_eq!(engine.direction(), Direction::Up);
}

#[test]
fn leaving_the_field_ends_the_game() {
    let config = GameConfig {
        field_size: 5,
        initial_position: Position::new(0, 2),
        ..Default::default()
    }
    .with_seed(4);
    let mut engine = GameEngine::new(config).unwrap();
    engine.start();
    assert!(engine.change_direction(Direction::Left));

    let outcome = engine.step();

    assert_eq!(outcome, StepOutcome::Collided(CollisionKind::Wall));
    assert!(!outcome.can_continue());
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert!(!engine.clock().is_running());
}

#[test]
fn restart_after_game_over_rebuilds_the_session() {
    let config = GameConfig {
        field_size: 5,
        initial_position: Position::new(0, 2),
        ..Default::default()
    }
    .with_seed(4);
    let mut engine = GameEngine::new(config).unwrap();
    engine.start();
    engine.change_direction(Direction::Left);
    engine.step();
    assert_eq!(engine.status(), GameStatus::GameOver);

    engine.restart();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.status, GameStatus::Init);
    assert_eq!(snapshot.length, 1);
    assert_eq!(snapshot.direction, Direction::Up);
    assert_eq!(snapshot.grid.count(Cell::Snake), 1);
    assert_eq!(snapshot.grid.count(Cell::Food), 1);
}

#[test]
fn idle_steps_never_mutate() {
    let mut engine = GameEngine::new(GameConfig::centered(7).with_seed(8)).unwrap();
    let before = engine.snapshot();
    for _ in 0..5 {
        assert_eq!(engine.step(), StepOutcome::Idle);
    }
    assert_eq!(engine.snapshot(), before);
}

/// Drive many random games and check every step against the rules.
#[test]
fn random_play_obeys_movement_growth_and_collision_laws() {
    for seed in 0..40u64 {
        let mut turns = StdRng::seed_from_u64(seed ^ 0xfeed);
        let mut engine =
            GameEngine::new(GameConfig::centered(8).with_seed(seed)).unwrap();
        engine.start();

        for _ in 0..400 {
            if turns.gen_bool(0.3) {
                let direction = Direction::ALL[turns.gen_range(0..4)];
                engine.change_direction(direction);
            }

            let body_before: Vec<Position> = engine.snake().body().collect();
            let candidate = engine.snake().head().moved(engine.direction());
            let expected = classify(engine.grid(), engine.snake(), candidate);

            let outcome = engine.step();
            assert!(engine.grid_matches_snake(), "seed {}", seed);

            match (expected, outcome) {
                (Outcome::Open, StepOutcome::Moved) => {
                    assert_eq!(engine.length(), body_before.len());
                    let tail = *body_before.last().unwrap();
                    assert!(!engine.snake().contains(tail));
                    assert_eq!(engine.snake().head(), candidate);
                }
                (Outcome::Food, StepOutcome::Ate) => {
                    assert_eq!(engine.length(), body_before.len() + 1);
                    assert_eq!(engine.snake().tail(), *body_before.last().unwrap());
                    if let Some(food) = engine.food() {
                        assert!((1..=6).contains(&food.x) && (1..=6).contains(&food.y));
                        assert!(!engine.snake().contains(food));
                    }
                }
                (Outcome::Collision(kind), StepOutcome::Collided(got)) => {
                    assert_eq!(kind, got);
                    match kind {
                        CollisionKind::Wall => assert!(!candidate.is_within(8)),
                        CollisionKind::SelfCollision => {
                            assert!(body_before.contains(&candidate))
                        }
                    }
                    assert_eq!(engine.status(), GameStatus::GameOver);
                    assert_eq!(engine.snake().body().collect::<Vec<_>>(), body_before);
                    break;
                }
                other => panic!("seed {}: unexpected {:?}", seed, other),
            }

            let body: HashSet<Position> = engine.snake().body().collect();
            assert_eq!(body.len(), engine.length(), "snake overlaps itself");
            assert!(engine.grid().count(Cell::Food) <= 1);
        }
    }
}
