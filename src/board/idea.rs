//! The idea record and its identity
//!
//! An idea is a short note: a title, a body capped just under 140 characters,
//! and a pair of timestamps. Identity is a board-allocated counter, not the
//! creation timestamp, so two ideas created in the same clock tick are still
//! distinct.

use chrono::{DateTime, Utc};
use std::fmt;

/// Title a fresh idea starts with until the author types one
pub const PLACEHOLDER_TITLE: &str = "Add a title";

/// Body a fresh idea starts with until the author types one
pub const PLACEHOLDER_CONTENT: &str = "Add a content";

/// Opaque idea identity, unique for the lifetime of a board.
///
/// Ids are allocated sequentially and never reused, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdeaId(pub(crate) u64);

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single note on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idea {
    /// Board-allocated identity, stable across edits and sorts
    pub id: IdeaId,
    pub title: String,
    pub content: String,
    /// Character count of `content` (Unicode scalars, not bytes).
    ///
    /// Starts at 0 for a fresh idea and is kept in sync by the editor on
    /// every accepted content edit.
    pub content_length: usize,
    /// Set once at creation, never touched again
    pub created_at: DateTime<Utc>,
    /// `None` until the first committed edit, refreshed on every commit
    pub updated_at: Option<DateTime<Utc>>,
}

impl Idea {
    /// Build a fresh idea with placeholder text and no edit history.
    ///
    /// The creation instant is fixed here; [`crate::board::Board::update`]
    /// refuses to move it afterwards.
    pub(crate) fn new(id: IdeaId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: PLACEHOLDER_TITLE.to_string(),
            content: PLACEHOLDER_CONTENT.to_string(),
            content_length: 0,
            created_at,
            updated_at: None,
        }
    }

    /// Last activity time: the latest commit if there is one, else creation.
    ///
    /// Total over all ideas, which keeps updated-at sorts well defined for
    /// ideas that were never committed.
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}
