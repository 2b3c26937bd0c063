//! Text measurement helpers for card rendering
//!
//! `Paragraph`'s built-in wrap does not report how many rows it produced, and
//! card heights must be exact for the board to stack them. So the card
//! renderer wraps text itself with these display-width helpers and hands
//! pre-wrapped lines to ratatui.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Caret glyph shown at the cursor while editing
pub const CARET: &str = "▌";

/// Greedy display-width wrap.
///
/// Hard line breaks are respected, each output line fits in `width` columns
/// (except a single glyph wider than the whole width, which overflows alone),
/// and there is always at least one line.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        let mut line = String::new();
        let mut used = 0usize;
        for ch in segment.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
            line.push(ch);
            used += w;
        }
        lines.push(line);
    }
    lines
}

/// Copy of `text` with the caret glyph spliced in at byte offset `cursor`.
/// The offset must sit on a char boundary, which the editor guarantees.
pub fn with_caret(text: &str, cursor: usize) -> String {
    let mut out = String::with_capacity(text.len() + CARET.len());
    out.push_str(&text[..cursor]);
    out.push_str(CARET);
    out.push_str(&text[cursor..]);
    out
}

/// Fit `text` on one line of `width` columns, cutting the tail with an
/// ellipsis when it does not fit.
pub fn truncate(text: &str, width: u16) -> String {
    let width = width as usize;
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Fit `text` on one line of `width` columns, cutting the head instead.
/// Used while editing so the caret end of a long title stays visible.
pub fn truncate_start(text: &str, width: u16) -> String {
    let width = width as usize;
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut kept = Vec::new();
    let mut used = 0usize;
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        kept.push(ch);
        used += w;
    }
    let mut out = String::from("…");
    out.extend(kept.into_iter().rev());
    out
}
