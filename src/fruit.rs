use rand::Rng;
use serde::Deserialize;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// How a fresh fruit chooses its cell.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FruitPlacement {
    /// Uniform over the whole grid; the fruit may land on the snake.
    #[default]
    Anywhere,
    /// Uniform over cells the snake does not occupy.
    AvoidSnake,
}

/// The single fruit on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Fruit {
    pub position: Position,
}

impl Fruit {
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns a fruit according to `placement`.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
        placement: FruitPlacement,
    ) -> Self {
        let position = match placement {
            FruitPlacement::Anywhere => random_position(rng, bounds),
            FruitPlacement::AvoidSnake => free_position(rng, bounds, snake)
                .unwrap_or_else(|| random_position(rng, bounds)),
        };

        Self::at(position)
    }
}

/// Picks any cell of the grid.
#[must_use]
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}

/// Picks a cell the snake does not occupy, or `None` when the board is full.
#[must_use]
pub fn free_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells());

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
