// UI rendering logic
//
// This module contains all the rendering code for the TUI. In ratatui,
// you define the UI layout and widgets in a render function that gets
// called on every frame.

use super::app::App;
use super::components::{self, CardContext};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Paint the themed background before anything else
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        f.area(),
    );

    // Split the terminal into three vertical sections:
    // - Title bar (3 lines fixed)
    // - Board (fills remaining space)
    // - Status bar (2 lines fixed)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(5),    // Board - takes remaining space
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    components::title_bar::render(f, chunks[0], app);
    render_board(f, chunks[1], app);
    components::status_bar::render(f, chunks[2], app);

    // Overlays sit on top of the board, toast on top of everything
    if app.show_help {
        components::help::render(f, app);
    }
    if app.show_logs {
        components::logs::render(f, app);
    }
    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

/// Render the card stack, scrolling in whole-card units so the selection
/// is always fully visible
fn render_board(f: &mut Frame, area: Rect, app: &mut App) {
    if app.board.is_empty() {
        render_empty_board(f, area, app);
        return;
    }

    let ctx = CardContext {
        theme: &app.theme,
        selected: false,
        editor: None,
        time_format: &app.time_format,
        counter_thresholds: &app.counter_thresholds,
    };

    // Card heights depend on wrap width, so measure at the current area width
    let heights: Vec<u16> = app
        .board
        .ideas()
        .iter()
        .enumerate()
        .map(|(i, idea)| {
            let ctx = CardContext {
                selected: i == app.selected,
                editor: app.editing().filter(|s| s.idea_id() == idea.id),
                ..ctx
            };
            components::card::height(idea, &ctx, area.width)
        })
        .collect();

    app.scroll = follow_selection(&heights, app.scroll, app.selected, area.height);

    let mut y = area.y;
    for (i, idea) in app.board.ideas().iter().enumerate().skip(app.scroll) {
        let remaining = (area.y + area.height).saturating_sub(y);
        if remaining == 0 {
            break;
        }
        let height = heights[i];
        // Clip rather than skip when a single card is taller than the
        // viewport, otherwise it could never be shown at all
        let drawn = height.min(remaining);
        if drawn < height && y != area.y {
            break;
        }
        let ctx = CardContext {
            selected: i == app.selected,
            editor: app.editing().filter(|s| s.idea_id() == idea.id),
            ..ctx
        };
        let card_area = Rect::new(area.x, y, area.width, drawn);
        components::card::render(f, card_area, idea, &ctx);
        y += drawn;
    }
}

/// Advance the scroll offset until the selected card fits in the viewport
fn follow_selection(heights: &[u16], scroll: usize, selected: usize, viewport: u16) -> usize {
    let mut scroll = scroll.min(selected);
    loop {
        let used: u16 = heights[scroll..=selected]
            .iter()
            .fold(0u16, |acc, h| acc.saturating_add(*h));
        if used <= viewport || scroll == selected {
            return scroll;
        }
        scroll += 1;
    }
}

fn render_empty_board(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::raw(""),
        Line::styled(
            "No ideas yet",
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::raw(""),
        Line::styled(
            "Press n to create your idea",
            Style::default().fg(app.theme.text_dim),
        )
        .centered(),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
