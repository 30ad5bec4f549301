use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;

/// Renders the score readout on the top row and returns the area below it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) -> Rect {
    let [score_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(score_line(score, theme)).alignment(Alignment::Center),
        score_area,
    );

    play_area
}

fn score_line(score: u32, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            score.to_string(),
            Style::default()
                .fg(theme.score)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
