use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{
    BORDER_BOARD, CELL_WIDTH, GLYPH_EMPTY, GLYPH_FRUIT, GLYPH_SNAKE, GridSize, Theme,
};
use crate::game::GameStatus;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_hint};
use crate::view::{CellKind, View};

/// Renders the full game frame from an immutable view.
pub fn render(frame: &mut Frame<'_>, view: &View, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, view.score, theme);

    let Some(board_area) = board_rect(play_area, view.bounds) else {
        render_too_small(frame, play_area, view.bounds, theme);
        return;
    };

    let block = Block::bordered()
        .border_set(BORDER_BOARD)
        .border_style(Style::new().fg(theme.border));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_cells(frame, inner, view, theme);

    match (view.status, view.game_over) {
        (GameStatus::NotStarted, _) => render_start_hint(frame, board_area, theme),
        (GameStatus::GameOver, Some(overlay)) => {
            render_game_over_menu(frame, board_area, overlay, theme);
        }
        _ => {}
    }
}

/// Minimum terminal area, including the border, that fits the board.
#[must_use]
pub fn board_size(bounds: GridSize) -> (u16, u16) {
    (
        bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2),
        bounds.height.saturating_add(2),
    )
}

fn board_rect(area: Rect, bounds: GridSize) -> Option<Rect> {
    let (width, height) = board_size(bounds);
    if width > area.width || height > area.height {
        return None;
    }

    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    })
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, view: &View, theme: &Theme) {
    let snake_style = Style::new().fg(theme.snake).add_modifier(Modifier::BOLD);
    let fruit_style = Style::new().fg(theme.fruit);
    let empty_style = Style::new().fg(theme.empty);

    let buffer = frame.buffer_mut();
    for (row, line) in (0u16..).zip(&view.cells) {
        for (col, cell) in (0u16..).zip(line) {
            let (glyph, style) = match cell {
                CellKind::Snake => (GLYPH_SNAKE, snake_style),
                CellKind::Fruit => (GLYPH_FRUIT, fruit_style),
                CellKind::Empty => (GLYPH_EMPTY, empty_style),
            };

            let x = inner.x.saturating_add(col.saturating_mul(CELL_WIDTH));
            let y = inner.y.saturating_add(row);
            if y >= inner.bottom() || x >= inner.right() {
                continue;
            }

            for offset in 0..CELL_WIDTH {
                buffer.set_string(x + offset, y, glyph, style);
            }
        }
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, bounds: GridSize, theme: &Theme) {
    let (width, height) = board_size(bounds);
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!("need {width}x{} cells", height + 1)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.hint)),
        area,
    );
}
