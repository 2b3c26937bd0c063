// Title bar component
//
// Renders the app title with the idea count and current mode.

use crate::config::VERSION;
use crate::tui::app::{App, Mode};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows:
/// - App name and version
/// - Demo badge when running on seeded sample data
/// - Editing indicator with the focused field
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match &app.mode {
        Mode::Edit(session) => format!(" ──── ✎ editing {}", session.field().label()),
        Mode::Browse => String::new(),
    };

    let demo_badge = if app.demo { " [demo]" } else { "" };

    let count = app.board.len();
    let noun = if count == 1 { "idea" } else { "ideas" };
    let title_text = format!(
        " ✦ ideaboard v{}{} ── {} {}{}",
        VERSION, demo_badge, count, noun, mode_indicator
    );

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
