use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

/// Renders the one-line status HUD and returns the remaining play area
/// above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let muted = Style::default().fg(theme.overlay_footer);
    let value = Style::default()
        .fg(theme.hud_fg)
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled("Length ", muted),
        Span::styled(state.snake.len().to_string(), value),
        Span::styled("  Speed ", muted),
        Span::styled(state.speed_level.to_string(), value),
        Span::styled("  Score ", muted),
        Span::styled(state.score.to_string(), value),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        status_area,
    );

    play_area
}
