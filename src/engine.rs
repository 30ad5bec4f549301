use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::Settings;
use crate::game::{GameState, GameStatus};
use crate::input::{Direction, GameInput};

/// What the loop should do after an input has been applied.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

/// Owns the current [`GameState`] and the random source used for fruit.
///
/// Every operation swaps in the value returned by the matching pure
/// transition on `GameState`.
#[derive(Debug)]
pub struct Engine<R = StdRng> {
    state: GameState,
    rng: R,
}

impl Engine<StdRng> {
    /// Creates a deterministic engine for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(settings: Settings, seed: u64) -> Self {
        Self::new(settings, StdRng::seed_from_u64(seed))
    }

    /// Seeds from `settings.seed` when present, otherwise from OS entropy.
    #[must_use]
    pub fn from_settings(settings: Settings) -> Self {
        match settings.seed {
            Some(seed) => Self::new_with_seed(settings, seed),
            None => Self::new(settings, StdRng::from_entropy()),
        }
    }
}

impl<R: Rng> Engine<R> {
    #[must_use]
    pub fn new(settings: Settings, mut rng: R) -> Self {
        let state = GameState::new(&mut rng, settings.bounds(), settings.fruit_placement);
        Self { state, rng }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.status == GameStatus::Running
    }

    /// Runs one tick.
    pub fn step(&mut self) {
        let next = self.state.step(&mut self.rng);

        if next.score != self.state.score {
            debug!(
                score = next.score,
                length = next.snake.len(),
                fruit_x = next.fruit.position.x,
                fruit_y = next.fruit.position.y,
                "fruit eaten"
            );
        }
        if next.status == GameStatus::GameOver && self.state.status != GameStatus::GameOver {
            info!(
                score = next.score,
                reason = ?next.death_reason,
                "round over"
            );
        }

        self.state = next;
    }

    /// Applies a steering request; the first one starts the round.
    pub fn set_direction(&mut self, direction: Direction) {
        let next = self.state.with_direction(direction);

        if self.state.status == GameStatus::NotStarted && next.status == GameStatus::Running {
            info!(?direction, "round started");
        }

        self.state = next;
    }

    /// Starts a fresh round on the same board.
    pub fn reset(&mut self) {
        self.state = self.state.reset(&mut self.rng);
        debug!("round reset");
    }

    /// Dispatches one input event.
    ///
    /// Restart only has an effect once the round is over.
    pub fn handle_input(&mut self, input: GameInput) -> Control {
        match input {
            GameInput::Quit => return Control::Quit,
            GameInput::Direction(direction) => self.set_direction(direction),
            GameInput::Restart if self.state.status == GameStatus::GameOver => self.reset(),
            GameInput::Restart => {}
        }

        Control::Continue
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Settings;
    use crate::fruit::Fruit;
    use crate::game::GameStatus;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{Control, Engine};

    #[test]
    fn same_seed_gives_same_fruit_sequence() {
        let run = |seed| {
            let mut engine = Engine::new_with_seed(Settings::default(), seed);
            let mut fruits = vec![engine.state().fruit.position];
            for _ in 0..5 {
                engine.reset();
                fruits.push(engine.state().fruit.position);
            }
            fruits
        };

        assert_eq!(run(99), run(99));
    }

    #[test]
    fn restart_is_ignored_until_game_over() {
        let mut engine = Engine::new_with_seed(Settings::default(), 1);
        engine.set_direction(Direction::Up);
        let before = engine.state().clone();

        assert_eq!(engine.handle_input(GameInput::Restart), Control::Continue);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn full_round_lifecycle() {
        let mut engine = Engine::new_with_seed(Settings::default(), 2);
        assert_eq!(engine.status(), GameStatus::NotStarted);

        engine.handle_input(GameInput::Direction(Direction::Up));
        assert!(engine.is_running());

        // Put the fruit out of the way and walk into the top wall.
        engine.state.fruit = Fruit::at(Position { x: 19, y: 19 });
        for _ in 0..6 {
            engine.step();
        }
        assert_eq!(engine.status(), GameStatus::GameOver);
        assert_eq!(engine.state().snake.head(), Position { x: 5, y: 0 });

        engine.handle_input(GameInput::Direction(Direction::Left));
        assert_eq!(engine.status(), GameStatus::GameOver);

        engine.handle_input(GameInput::Restart);
        assert_eq!(engine.status(), GameStatus::NotStarted);
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.state().snake.len(), 1);
    }

    #[test]
    fn quit_is_reported_in_any_state() {
        let mut engine = Engine::new_with_seed(Settings::default(), 3);

        assert_eq!(engine.handle_input(GameInput::Quit), Control::Quit);

        engine.state.snake = Snake::new(Position { x: 0, y: 0 }, Direction::Up);
        engine.set_direction(Direction::Up);
        engine.step();
        assert_eq!(engine.status(), GameStatus::GameOver);
        assert_eq!(engine.handle_input(GameInput::Quit), Control::Quit);
    }
}
