//! Pure projection of a [`GameState`] into what the screen shows.

use crate::config::GridSize;
use crate::game::{DeathReason, GameState, GameStatus};
use crate::snake::Position;

/// What occupies one grid cell on screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellKind {
    Empty,
    Snake,
    Fruit,
}

/// Contents of the game-over popup.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameOverOverlay {
    pub final_score: u32,
    pub reason: Option<DeathReason>,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct View {
    pub bounds: GridSize,
    /// Row-major cells, `bounds.height` rows of `bounds.width`.
    pub cells: Vec<Vec<CellKind>>,
    pub score: u32,
    pub status: GameStatus,
    pub game_over: Option<GameOverOverlay>,
}

impl View {
    /// Returns the cell at `position`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<CellKind> {
        if !position.is_within_bounds(self.bounds) {
            return None;
        }

        let row = usize::try_from(position.y).ok()?;
        let col = usize::try_from(position.x).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    /// Counts cells of the given kind.
    #[must_use]
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == kind)
            .count()
    }
}

/// Builds the frame contents. Snake segments take precedence over the fruit.
#[must_use]
pub fn build(state: &GameState) -> View {
    let bounds = state.bounds();
    let mut cells =
        vec![vec![CellKind::Empty; usize::from(bounds.width)]; usize::from(bounds.height)];

    mark(&mut cells, bounds, state.fruit.position, CellKind::Fruit);
    for segment in state.snake.segments() {
        mark(&mut cells, bounds, *segment, CellKind::Snake);
    }

    let game_over = (state.status == GameStatus::GameOver).then_some(GameOverOverlay {
        final_score: state.score,
        reason: state.death_reason,
    });

    View {
        bounds,
        cells,
        score: state.score,
        status: state.status,
        game_over,
    }
}

fn mark(cells: &mut [Vec<CellKind>], bounds: GridSize, position: Position, kind: CellKind) {
    if !position.is_within_bounds(bounds) {
        return;
    }

    // In-bounds coordinates are non-negative.
    let (Ok(row), Ok(col)) = (usize::try_from(position.y), usize::try_from(position.x)) else {
        return;
    };
    cells[row][col] = kind;
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::fruit::{Fruit, FruitPlacement};
    use crate::game::{DeathReason, GameState, GameStatus};
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{CellKind, GameOverOverlay, build};

    fn state_with(snake: Snake, fruit: Position) -> GameState {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = GameState::new(&mut rng, GridSize::square(20), FruitPlacement::Anywhere);
        state.snake = snake;
        state.fruit = Fruit::at(fruit);
        state
    }

    #[test]
    fn grid_matches_board_dimensions() {
        let view = build(&state_with(
            Snake::new(Position { x: 5, y: 5 }, Direction::Left),
            Position { x: 1, y: 1 },
        ));

        assert_eq!(view.cells.len(), 20);
        assert!(view.cells.iter().all(|row| row.len() == 20));
        assert_eq!(view.count(CellKind::Empty), 400 - 2);
    }

    #[test]
    fn marks_every_segment_and_the_fruit() {
        let snake = Snake::from_segments(
            vec![
                Position { x: 3, y: 2 },
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
            ],
            Direction::Right,
        );
        let view = build(&state_with(snake, Position { x: 7, y: 9 }));

        assert_eq!(view.count(CellKind::Snake), 3);
        assert_eq!(view.cell(Position { x: 1, y: 2 }), Some(CellKind::Snake));
        assert_eq!(view.cell(Position { x: 7, y: 9 }), Some(CellKind::Fruit));
        assert_eq!(view.cell(Position { x: 0, y: 0 }), Some(CellKind::Empty));
        assert_eq!(view.cell(Position { x: 20, y: 0 }), None);
    }

    #[test]
    fn snake_hides_fruit_underneath() {
        let view = build(&state_with(
            Snake::new(Position { x: 4, y: 4 }, Direction::Left),
            Position { x: 4, y: 4 },
        ));

        assert_eq!(view.cell(Position { x: 4, y: 4 }), Some(CellKind::Snake));
        assert_eq!(view.count(CellKind::Fruit), 0);
    }

    #[test]
    fn overlay_only_after_game_over() {
        let mut state = state_with(
            Snake::new(Position { x: 4, y: 4 }, Direction::Left),
            Position { x: 9, y: 9 },
        );
        state.score = 7;

        assert_eq!(build(&state).game_over, None);
        assert_eq!(build(&state).score, 7);

        state.status = GameStatus::GameOver;
        state.death_reason = Some(DeathReason::WallCollision);

        assert_eq!(
            build(&state).game_over,
            Some(GameOverOverlay {
                final_score: 7,
                reason: Some(DeathReason::WallCollision),
            })
        );
    }
}
