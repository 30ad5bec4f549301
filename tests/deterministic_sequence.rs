use grid_snake::config::Settings;
use grid_snake::engine::Engine;
use grid_snake::fruit::{Fruit, FruitPlacement};
use grid_snake::game::{DeathReason, GameState, GameStatus};
use grid_snake::input::{Direction, GameInput};
use grid_snake::snake::Position;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn stepwise_fruit_collection_and_wall_collision() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = GameState::new(
        &mut rng,
        Settings::default().bounds(),
        FruitPlacement::Anywhere,
    );
    state.fruit = Fruit::at(Position { x: 4, y: 5 });

    // Any arrow starts the round; the snake keeps heading left.
    state = state.with_direction(Direction::Left);
    assert_eq!(state.status, GameStatus::Running);

    state = state.step(&mut rng);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.head(), Position { x: 4, y: 5 });

    state.fruit = Fruit::at(Position { x: 19, y: 19 });
    state = state.with_direction(Direction::Up);
    for row in (0..5).rev() {
        state = state.step(&mut rng);
        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.snake.head(), Position { x: 4, y: row });
    }

    state = state.step(&mut rng);
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(state.score, 1);
}

#[test]
fn seeded_sessions_replay_identically() {
    let play = |seed| {
        let mut engine = Engine::new_with_seed(Settings::default(), seed);
        let moves = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Right,
            Direction::Up,
        ];

        let mut trace = Vec::new();
        for direction in moves.into_iter().cycle().take(40) {
            engine.handle_input(GameInput::Direction(direction));
            engine.step();
            engine.step();
            let state = engine.state();
            trace.push((state.snake.head(), state.fruit.position, state.score, state.status));
            if state.status == GameStatus::GameOver {
                engine.handle_input(GameInput::Restart);
            }
        }
        trace
    };

    assert_eq!(play(7), play(7));
}

#[test]
fn avoid_snake_setting_reaches_the_engine() {
    let settings = Settings {
        fruit_placement: FruitPlacement::AvoidSnake,
        ..Settings::default()
    };

    for seed in 0..50 {
        let engine = Engine::new_with_seed(settings, seed);
        let state = engine.state();
        assert_eq!(state.placement(), FruitPlacement::AvoidSnake);
        assert!(!state.snake.occupies(state.fruit.position));
    }
}
