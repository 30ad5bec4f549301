use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::DeathReason;
use crate::view::GameOverOverlay;

/// Draws the "press an arrow key" hint over the waiting board.
pub fn render_start_hint(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 80, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("SNAKE").style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from("Arrow keys to start"),
        Line::from("[Q] Quit").style(Style::default().fg(theme.hint)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

/// Draws the game-over popup with the final score and restart prompt.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    overlay: GameOverOverlay,
    theme: &Theme,
) {
    let popup = centered_popup(area, 80, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(
            Style::default()
                .fg(theme.game_over)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Your Score: {}", overlay.final_score))
            .style(Style::default().fg(theme.score)),
        Line::from(match overlay.reason {
            Some(DeathReason::WallCollision) => "Cause: hit wall",
            Some(DeathReason::SelfCollision) => "Cause: hit yourself",
            None => "",
        }),
        Line::from(""),
        Line::from("[Enter]/[R] Try Again"),
        Line::from("[Q] Quit").style(Style::default().fg(theme.hint)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
