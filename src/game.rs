use rand::Rng;

use crate::config::{GridSize, START_DIRECTION, START_POSITION};
use crate::fruit::{Fruit, FruitPlacement};
use crate::input::Direction;
use crate::snake::Snake;

/// Lifecycle of one round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    NotStarted,
    Running,
    GameOver,
}

/// Reason the last round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete state of one round.
///
/// Transitions never mutate in place: [`GameState::step`],
/// [`GameState::with_direction`] and [`GameState::reset`] each return the
/// next value.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: Fruit,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    placement: FruitPlacement,
}

impl GameState {
    /// Creates a not-yet-started round with a fresh snake and a random fruit.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        placement: FruitPlacement,
    ) -> Self {
        let snake = Snake::new(START_POSITION, START_DIRECTION);
        let fruit = Fruit::spawn(rng, bounds, &snake, placement);

        Self {
            snake,
            fruit,
            score: 0,
            status: GameStatus::NotStarted,
            death_reason: None,
            bounds,
            placement,
        }
    }

    /// Returns a fresh round on the same board.
    #[must_use]
    pub fn reset<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(rng, self.bounds, self.placement)
    }

    /// Advances the round by one tick. Only a running round changes.
    #[must_use]
    pub fn step<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut next = self.clone();
        if next.status != GameStatus::Running {
            return next;
        }

        let head = next.snake.next_head_position();
        if !head.is_within_bounds(next.bounds) {
            next.end(DeathReason::WallCollision);
            return next;
        }

        let eating = head == next.fruit.position;
        if next.snake.would_collide(head, eating) {
            next.end(DeathReason::SelfCollision);
            return next;
        }

        next.snake.advance(eating);
        if eating {
            next.score += 1;
            next.fruit = Fruit::spawn(rng, next.bounds, &next.snake, next.placement);
        }

        next
    }

    /// Queues a turn, starting the round if it has not started yet.
    ///
    /// Ignored entirely once the round is over. A reversal of the current
    /// heading leaves the direction unchanged but still starts the round.
    #[must_use]
    pub fn with_direction(&self, direction: Direction) -> Self {
        let mut next = self.clone();
        if next.status == GameStatus::GameOver {
            return next;
        }

        let _ = next.snake.queue_direction(direction);
        if next.status == GameStatus::NotStarted {
            next.status = GameStatus::Running;
        }

        next
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn placement(&self) -> FruitPlacement {
        self.placement
    }

    fn end(&mut self, reason: DeathReason) {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
    }
}
