use std::fs;
use std::path::Path;
use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::fruit::FruitPlacement;
use crate::input::Direction;
use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns a square grid with `side` cells per axis.
    #[must_use]
    pub fn square(side: u16) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Cells per side of the default board.
pub const GRID_SIZE: u16 = 20;

/// Largest board side accepted from configuration.
pub const MAX_GRID_SIZE: u16 = 64;

/// Where a fresh snake's single segment is placed (column 5, row 5).
pub const START_POSITION: Position = Position { x: 5, y: 5 };

/// Heading of a fresh snake.
pub const START_DIRECTION: Direction = Direction::Left;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Terminal columns used to draw one grid cell, keeping cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Glyph drawn for each terminal column of a snake segment.
pub const GLYPH_SNAKE: &str = "█";

/// Glyph drawn for each terminal column of the fruit.
pub const GLYPH_FRUIT: &str = "●";

/// Glyph drawn for empty cells.
pub const GLYPH_EMPTY: &str = "·";

/// Rounded frame around the board.
pub const BORDER_BOARD: border::Set = border::ROUNDED;

/// Colors applied to every visual element.
#[derive(Debug)]
pub struct Theme {
    pub snake: Color,
    pub fruit: Color,
    pub empty: Color,
    pub border: Color,
    pub score: Color,
    pub game_over: Color,
    pub hint: Color,
}

/// Green snake, red fruit, dark board.
pub const THEME_DEFAULT: Theme = Theme {
    snake: Color::Green,
    fruit: Color::Red,
    empty: Color::DarkGray,
    border: Color::Gray,
    score: Color::Yellow,
    game_over: Color::Red,
    hint: Color::DarkGray,
};

/// Runtime settings, read from an optional JSON file and then overridden by
/// command-line flags.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub grid_size: u16,
    pub tick_interval_ms: u64,
    pub fruit_placement: FruitPlacement,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            fruit_placement: FruitPlacement::Anywhere,
            seed: None,
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw)
    }

    /// Parses settings from a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(raw)?;
        Ok(settings)
    }

    /// Checks that the board can hold the start position and the timer can run.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let min = min_grid_size();
        if self.grid_size < min || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridSize {
                size: self.grid_size,
                min,
                max: MAX_GRID_SIZE,
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(self)
    }

    #[must_use]
    pub fn bounds(self) -> GridSize {
        GridSize::square(self.grid_size)
    }

    #[must_use]
    pub fn tick_interval(self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Smallest side that still contains `START_POSITION`.
fn min_grid_size() -> u16 {
    let furthest = START_POSITION.x.max(START_POSITION.y) + 1;
    u16::try_from(furthest).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::{GRID_SIZE, Settings};
    use crate::error::ConfigError;
    use crate::fruit::FruitPlacement;

    #[test]
    fn empty_document_yields_defaults() {
        let settings = Settings::from_json("{}").expect("empty object should parse");

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.grid_size, GRID_SIZE);
        assert_eq!(settings.tick_interval_ms, 200);
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let settings =
            Settings::from_json(r#"{ "grid_size": 12, "fruit_placement": "avoid_snake" }"#)
                .expect("partial document should parse");

        assert_eq!(settings.grid_size, 12);
        assert_eq!(settings.fruit_placement, FruitPlacement::AvoidSnake);
        assert_eq!(settings.tick_interval_ms, 200);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            Settings::from_json(r#"{ "speed": 3 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn grid_too_small_for_start_position_is_rejected() {
        let settings = Settings {
            grid_size: 5,
            ..Settings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(ConfigError::GridSize { size: 5, min: 6, .. })
        ));
    }

    #[test]
    fn zero_tick_interval_is_rejected() {
        let settings = Settings {
            tick_interval_ms: 0,
            ..Settings::default()
        };

        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ZeroTickInterval)
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let error = Settings::load(std::path::Path::new("/nonexistent/grid-snake.json"))
            .expect_err("missing file should fail");

        assert!(error.to_string().contains("/nonexistent/grid-snake.json"));
    }
}
