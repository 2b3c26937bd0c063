//! Clipboard helper for copying ideas to the system clipboard
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.

use crate::board::Idea;
use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy an idea to the system clipboard as plain text
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_idea(idea: &Idea) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(format_idea(idea))
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Plain-text rendering of an idea: title, blank line, content
fn format_idea(idea: &Idea) -> String {
    if idea.content.is_empty() {
        return idea.title.clone();
    }
    format!("{}\n\n{}", idea.title, idea.content)
}
