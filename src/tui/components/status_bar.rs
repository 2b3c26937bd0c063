// Status bar component
//
// Renders the current sort order and context-sensitive key hints at the
// bottom of the screen.

use crate::editor::Field;
use crate::tui::app::{App, Mode};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar with sort state and key hints
///
/// Adapts to terminal width:
/// - Wide: Full hints with labels
/// - Narrow: Compact key-only format
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status_text = match &app.mode {
        Mode::Edit(session) => {
            let enter_hint = match session.field() {
                Field::Title => "Enter next field",
                Field::Content => "Enter newline",
            };
            if area.width < 70 {
                format!(" editing {} │ Tab·Enter·Esc", session.field().label())
            } else {
                format!(
                    " editing {} │ Tab switch field · {} · Esc save & close",
                    session.field().label(),
                    enter_hint
                )
            }
        }
        Mode::Browse => {
            let sort = app
                .last_sort
                .map(|criterion| criterion.label())
                .unwrap_or("insertion");
            if area.width < 70 {
                format!(" sort: {} │ n·d·⏎·t/u/U·y·?·q", sort)
            } else {
                format!(
                    " sort: {} │ n new · Enter edit · d delete · t/u/U sort · y copy · ? help · q quit",
                    sort
                )
            }
        }
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
