//! Idea card component
//!
//! Each idea renders as a bordered card: a one-line title, wrapped content,
//! a live character counter while the content is being edited, and a
//! timestamp footer. Heights come from the same wrapping the renderer uses,
//! so the board can stack cards with no dead rows.

use crate::board::{Idea, PLACEHOLDER_CONTENT, PLACEHOLDER_TITLE};
use crate::editor::{CounterSeverity, EditorSession, Field, CONTENT_LIMIT};
use crate::theme::Theme;
use crate::tui::text;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Everything a card needs to know about its surroundings
#[derive(Clone, Copy)]
pub struct CardContext<'a> {
    pub theme: &'a Theme,
    /// Card under the selection cursor
    pub selected: bool,
    /// The editing session, when this card is the one being edited.
    /// Its draft is rendered in place of the stored idea.
    pub editor: Option<&'a EditorSession>,
    /// strftime format for the footer timestamp
    pub time_format: &'a str,
    /// Counter escalation thresholds, ascending
    pub counter_thresholds: &'a [usize],
}

/// Pre-styled lines of one card, title to footer
struct CardBody {
    title: Line<'static>,
    content: Vec<Line<'static>>,
    counter: Option<Line<'static>>,
    footer: Line<'static>,
}

impl CardBody {
    fn rows(&self) -> u16 {
        (1 + self.content.len() + usize::from(self.counter.is_some()) + 1) as u16
    }
}

/// Rows the card occupies at `width`, borders included
pub fn height(idea: &Idea, ctx: &CardContext, width: u16) -> u16 {
    build_body(idea, ctx, inner_width(width)).rows() + 2
}

/// Render the card into `area`. The caller sizes `area` with [`height`];
/// a shorter area truncates the card from the bottom.
pub fn render(f: &mut Frame, area: Rect, idea: &Idea, ctx: &CardContext) {
    let border_color = if ctx.editor.is_some() {
        ctx.theme.border_editing
    } else if ctx.selected {
        ctx.theme.border_selected
    } else {
        ctx.theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::horizontal(1));

    let body = build_body(idea, ctx, inner_width(area.width));
    let mut lines = Vec::with_capacity(body.rows() as usize);
    lines.push(body.title);
    lines.extend(body.content);
    if let Some(counter) = body.counter {
        lines.push(counter);
    }
    lines.push(body.footer);

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Text columns inside the borders and padding
fn inner_width(width: u16) -> u16 {
    width.saturating_sub(4).max(1)
}

fn build_body(idea: &Idea, ctx: &CardContext, inner: u16) -> CardBody {
    let shown = ctx.editor.map(|e| e.draft()).unwrap_or(idea);
    let editing_field = ctx.editor.map(|e| e.field());
    let select_all = ctx.editor.map(|e| e.select_all()).unwrap_or(false);

    // Title: one line, caret while editing, tail kept visible so the caret
    // never scrolls out of view
    let title = if editing_field == Some(Field::Title) {
        let session = ctx.editor.unwrap();
        let caretized = text::with_caret(&shown.title, session.cursor());
        let mut style = Style::default()
            .fg(ctx.theme.card_title)
            .add_modifier(Modifier::BOLD);
        if select_all {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Line::from(Span::styled(text::truncate_start(&caretized, inner), style))
    } else if shown.title == PLACEHOLDER_TITLE {
        // Stored placeholder text reads as a hint
        Line::from(Span::styled(
            text::truncate(&shown.title, inner),
            Style::default()
                .fg(ctx.theme.text_dim)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(
            text::truncate(&shown.title, inner),
            Style::default()
                .fg(ctx.theme.card_title)
                .add_modifier(Modifier::BOLD),
        ))
    };

    // Content: wrapped to the inner width, caret spliced in while editing
    let editing_content = editing_field == Some(Field::Content);
    let content_text = if editing_content {
        text::with_caret(&shown.content, ctx.editor.unwrap().cursor())
    } else {
        shown.content.clone()
    };
    let content_style = if editing_content && select_all {
        Style::default()
            .fg(ctx.theme.text)
            .add_modifier(Modifier::REVERSED)
    } else if !editing_content && shown.content == PLACEHOLDER_CONTENT {
        Style::default()
            .fg(ctx.theme.text_dim)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(ctx.theme.text)
    };
    let content = text::wrap(&content_text, inner)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, content_style)))
        .collect();

    // Live counter, only while the content field is being edited
    let counter = editing_content.then(|| {
        let (label, severity) = counter_label(shown.content_length, ctx.counter_thresholds);
        Line::from(Span::styled(
            label,
            Style::default().fg(ctx.theme.counter_color(severity)),
        ))
        .right_aligned()
    });

    let footer = Line::from(Span::styled(
        footer_text(shown, ctx.time_format),
        Style::default().fg(ctx.theme.text_dim),
    ));

    CardBody {
        title,
        content,
        counter,
        footer,
    }
}

/// Counter text and its severity. Past the first threshold the label also
/// spells out how many characters the editor will still accept.
fn counter_label(length: usize, thresholds: &[usize]) -> (String, CounterSeverity) {
    let severity = CounterSeverity::for_length(length, thresholds);
    let label = if severity == CounterSeverity::Calm {
        format!("{}/{}", length, CONTENT_LIMIT)
    } else {
        let remaining = (CONTENT_LIMIT - 1).saturating_sub(length);
        format!("{}/{} · {} left", length, CONTENT_LIMIT, remaining)
    };
    (label, severity)
}

/// Footer label and timestamp: the last commit once there is one,
/// creation otherwise
fn footer_text(idea: &Idea, time_format: &str) -> String {
    match idea.updated_at {
        Some(ts) => format!("Updated at: {}", ts.format(time_format)),
        None => format!("Created at: {}", idea.created_at.format(time_format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use chrono::TimeZone;

    fn sample_idea(title: &str, content: &str) -> Idea {
        let mut board = Board::new();
        let id = board.add();
        let mut idea = board.get(id).unwrap().clone();
        idea.title = title.to_string();
        idea.content = content.to_string();
        idea.content_length = content.chars().count();
        idea
    }

    fn browse_ctx(theme: &Theme) -> CardContext<'_> {
        CardContext {
            theme,
            selected: false,
            editor: None,
            time_format: "%H:%M",
            counter_thresholds: &[100, 115, 130],
        }
    }

    #[test]
    fn test_height_of_single_line_card() {
        let theme = Theme::auto();
        let idea = sample_idea("Title", "one line");
        // borders (2) + title + content + footer
        assert_eq!(height(&idea, &browse_ctx(&theme), 40), 5);
    }

    #[test]
    fn test_height_grows_when_content_wraps() {
        let theme = Theme::auto();
        let idea = sample_idea("Title", "a rather long line that will not fit");
        let wide = height(&idea, &browse_ctx(&theme), 60);
        let narrow = height(&idea, &browse_ctx(&theme), 20);
        assert!(narrow > wide);
    }

    #[test]
    fn test_height_counts_hard_line_breaks() {
        let theme = Theme::auto();
        let one = sample_idea("T", "a");
        let three = sample_idea("T", "a\nb\nc");
        let ctx = browse_ctx(&theme);
        assert_eq!(height(&three, &ctx, 40), height(&one, &ctx, 40) + 2);
    }

    #[test]
    fn test_editing_content_adds_counter_row() {
        let theme = Theme::auto();
        let idea = sample_idea("Title", "hi");
        let browse = browse_ctx(&theme);

        let session = EditorSession::new(idea.clone(), Field::Title);
        let editing = CardContext {
            editor: Some(&session),
            ..browse_ctx(&theme)
        };

        // Editing the title shows no counter; the caret does not wrap
        // two-character content at this width
        assert_eq!(height(&idea, &editing, 40), height(&idea, &browse, 40));

        let session = EditorSession::new(idea.clone(), Field::Content);
        let editing = CardContext {
            editor: Some(&session),
            ..browse_ctx(&theme)
        };
        assert_eq!(height(&idea, &editing, 40), height(&idea, &browse, 40) + 1);
    }

    #[test]
    fn test_counter_label_plain_while_calm() {
        let thresholds = [100, 115, 130];
        let (label, severity) = counter_label(42, &thresholds);
        assert_eq!(label, "42/140");
        assert_eq!(severity, CounterSeverity::Calm);

        // First threshold itself is still calm
        let (label, _) = counter_label(100, &thresholds);
        assert_eq!(label, "100/140");
    }

    #[test]
    fn test_counter_label_shows_headroom_past_first_threshold() {
        let thresholds = [100, 115, 130];
        let (label, severity) = counter_label(117, &thresholds);
        assert_eq!(label, "117/140 · 22 left");
        assert_eq!(severity, CounterSeverity::Warn);

        // At the storable maximum nothing more fits
        let (label, severity) = counter_label(139, &thresholds);
        assert_eq!(label, "139/140 · 0 left");
        assert_eq!(severity, CounterSeverity::Critical);
    }

    #[test]
    fn test_footer_switches_label_after_update() {
        let mut idea = sample_idea("T", "c");
        idea.created_at = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(footer_text(&idea, "%H:%M"), "Created at: 09:30");

        idea.updated_at = Some(chrono::Utc.with_ymd_and_hms(2024, 3, 1, 10, 45, 0).unwrap());
        assert_eq!(footer_text(&idea, "%H:%M"), "Updated at: 10:45");
    }

    #[test]
    fn test_draft_is_rendered_while_editing() {
        let theme = Theme::auto();
        let idea = sample_idea("Title", "short");

        let mut session = EditorSession::new(idea.clone(), Field::Content);
        // Replace the content with something that wraps at width 20
        for ch in "a much longer draft than the stored idea".chars() {
            session.insert(ch);
        }
        let editing = CardContext {
            editor: Some(&session),
            ..browse_ctx(&theme)
        };

        assert!(height(&idea, &editing, 20) > height(&idea, &browse_ctx(&theme), 20));
    }
}
