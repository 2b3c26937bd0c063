// Help overlay
//
// Centered modal listing every key binding, grouped the way the app
// is used: board actions first, then editing, then navigation.

use super::centered_rect;
use crate::tui::app::App;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the help modal overlay
pub fn render(f: &mut Frame, app: &App) {
    // Styles
    let key_style = Style::default().fg(app.theme.highlight);
    let desc_style = Style::default().fg(app.theme.text);
    let header_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Board", header_style)),
        kb("n", "New idea (opens the editor)"),
        kb("Enter", "Edit the selected idea"),
        kb("d, Del", "Delete the selected idea"),
        kb("y", "Copy the selected idea"),
        Line::raw(""),
        Line::from(Span::styled("  Sorting", header_style)),
        kb("t", "Sort by title A→Z"),
        kb("u", "Sort by last activity, oldest first"),
        kb("U", "Sort by last activity, newest first"),
        Line::raw(""),
        Line::from(Span::styled("  Editing", header_style)),
        kb("type", "First key replaces the field text"),
        kb("Tab", "Save and switch field"),
        kb("Enter", "Title: next field / content: newline"),
        kb("←→↑↓", "Move the cursor"),
        kb("Home/End", "Start / end of line"),
        kb("Esc", "Save and close the editor"),
        Line::raw(""),
        Line::from(Span::styled("  Navigation", header_style)),
        kb("↑/↓, j/k", "Move selection"),
        kb("g/G", "Jump to first / last idea"),
        kb("Scroll", "Move selection (mouse)"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("?", "Toggle this help"),
        kb("L", "Logs overlay"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.clone(), key_style),
        ]),
    ]);

    // Calculate modal size
    let width = 48;
    let height = content.lines.len() as u16 + 2;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
