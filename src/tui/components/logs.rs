// Logs overlay
//
// Centered modal showing the tail of the in-memory log buffer, color-coded
// by severity. The buffer is written by the tracing layer; nothing is ever
// printed to stdout while the TUI owns the screen.

use super::centered_rect;
use crate::logging::LogLevel;
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the logs modal overlay
pub fn render(f: &mut Frame, app: &App) {
    let frame_area = f.area();
    let width = frame_area.width.saturating_sub(8).clamp(20, 100);
    let height = frame_area.height.saturating_sub(6).clamp(5, 24);
    let area = centered_rect(width, height, frame_area);

    // Tail of the buffer: as many entries as fit, newest at the bottom
    let visible_rows = height.saturating_sub(2) as usize;
    let entries = app.log_buffer.get_all();
    let skip = entries.len().saturating_sub(visible_rows);

    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from(Span::styled(
            " No log entries yet",
            Style::default()
                .fg(app.theme.text_dim)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        entries
            .iter()
            .skip(skip)
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!(" [{}] ", entry.timestamp.format("%H:%M:%S")),
                        Style::default().fg(app.theme.text_dim),
                    ),
                    Span::styled(
                        format!("{:5} ", entry.level.as_str()),
                        Style::default().fg(level_color(&entry.level, &app.theme)),
                    ),
                    Span::styled(
                        format!("{} ", entry.target),
                        Style::default().fg(app.theme.text_dim),
                    ),
                    Span::styled(
                        entry.message.clone(),
                        Style::default().fg(app.theme.text),
                    ),
                ])
            })
            .collect()
    };

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .title(" Logs ")
                .title_bottom(Line::from(" L/Esc close · c clear ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Severity color, reusing the theme's existing accents
fn level_color(level: &LogLevel, theme: &Theme) -> Color {
    match level {
        LogLevel::Error => theme.error,
        LogLevel::Warn => theme.highlight,
        LogLevel::Info => theme.text,
        LogLevel::Debug | LogLevel::Trace => theme.text_dim,
    }
}
