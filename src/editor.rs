// Editing session for a single idea
//
// The session owns a draft copy of one idea plus cursor state. Key handling
// builds replacement text and feeds it through `dispatch`, which is the only
// place edit rules live: title edits always land, content edits that would
// reach the length cap are rejected wholesale. `commit` stamps the update
// time and hands the draft back synchronously, so the board is current the
// moment the call returns.

use crate::board::{Idea, IdeaId};
use chrono::Utc;

/// Content edits that would reach this many characters are rejected outright,
/// so stored content is always 139 characters or fewer. Characters are
/// Unicode scalars, not bytes.
pub const CONTENT_LIMIT: usize = 140;

/// Which of the two card fields has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

impl Field {
    /// The field focus moves to on Tab
    pub fn other(&self) -> Field {
        match self {
            Field::Title => Field::Content,
            Field::Content => Field::Title,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
        }
    }
}

/// A full-text replacement for one field of the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Title(String),
    Content(String),
}

/// Visual urgency of the live character counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CounterSeverity {
    Calm,
    Notice,
    Warn,
    Critical,
}

impl CounterSeverity {
    /// Rank a content length against the escalation thresholds.
    ///
    /// Each threshold strictly exceeded bumps the severity one step, so with
    /// the stock thresholds 100/115/130 a length of 100 is still calm and
    /// 131 is critical. Extra thresholds beyond three stay critical.
    pub fn for_length(length: usize, thresholds: &[usize]) -> Self {
        match thresholds.iter().filter(|&&t| length > t).count() {
            0 => CounterSeverity::Calm,
            1 => CounterSeverity::Notice,
            2 => CounterSeverity::Warn,
            _ => CounterSeverity::Critical,
        }
    }
}

/// Transient edit state over one idea
pub struct EditorSession {
    draft: Idea,
    field: Field,
    /// Byte offsets into the draft text, always on a char boundary
    title_cursor: usize,
    content_cursor: usize,
    /// Armed whenever a field gains focus; the next insertion replaces the
    /// whole field. Movement or deletion disarms it.
    select_all: bool,
}

impl EditorSession {
    /// Begin editing `idea` with `field` focused and select-all armed,
    /// mirroring how the card selects a field's text on focus.
    pub fn new(idea: Idea, field: Field) -> Self {
        let title_cursor = idea.title.len();
        let content_cursor = idea.content.len();
        Self {
            draft: idea,
            field,
            title_cursor,
            content_cursor,
            select_all: true,
        }
    }

    pub fn idea_id(&self) -> IdeaId {
        self.draft.id
    }

    pub fn draft(&self) -> &Idea {
        &self.draft
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn select_all(&self) -> bool {
        self.select_all
    }

    /// Byte cursor within the focused field
    pub fn cursor(&self) -> usize {
        match self.field {
            Field::Title => self.title_cursor,
            Field::Content => self.content_cursor,
        }
    }

    /// Apply an action to the draft. Returns whether the draft changed.
    ///
    /// A content replacement at or past [`CONTENT_LIMIT`] characters is
    /// dropped in full; the draft (and the caller's cursor) stay put.
    pub fn dispatch(&mut self, action: EditAction) -> bool {
        match action {
            EditAction::Title(text) => {
                self.draft.title = text;
                true
            }
            EditAction::Content(text) => {
                let length = text.chars().count();
                if length >= CONTENT_LIMIT {
                    tracing::debug!(
                        "content edit rejected at {} chars (idea {})",
                        length,
                        self.draft.id
                    );
                    return false;
                }
                self.draft.content = text;
                self.draft.content_length = length;
                true
            }
        }
    }

    /// Stamp the commit time and return the committed idea.
    ///
    /// The caller writes the result back to the board in the same call
    /// stack; there is no deferred hand-off, so the board never lags behind
    /// what the card shows.
    pub fn commit(&mut self) -> Idea {
        self.draft.updated_at = Some(Utc::now());
        tracing::debug!("idea {} committed", self.draft.id);
        self.draft.clone()
    }

    /// Move focus to `field`, re-arming select-all and parking the cursor at
    /// the end of the newly focused text.
    pub fn focus(&mut self, field: Field) {
        self.field = field;
        self.select_all = true;
        match field {
            Field::Title => self.title_cursor = self.draft.title.len(),
            Field::Content => self.content_cursor = self.draft.content.len(),
        }
    }

    /// Insert a character at the cursor. With select-all armed the character
    /// replaces the whole field instead.
    pub fn insert(&mut self, ch: char) {
        let (mut text, at) = if self.select_all {
            (String::new(), 0)
        } else {
            (self.focused_text().to_string(), self.cursor())
        };
        text.insert(at, ch);
        if self.apply(text) {
            self.select_all = false;
            self.set_cursor(at + ch.len_utf8());
        }
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        self.select_all = false;
        let at = self.cursor();
        if at == 0 {
            return;
        }
        let text = self.focused_text();
        let removed = text[..at].chars().next_back().map_or(0, char::len_utf8);
        let start = at - removed;
        let mut next = text.to_string();
        next.remove(start);
        if self.apply(next) {
            self.set_cursor(start);
        }
    }

    pub fn move_left(&mut self) {
        self.select_all = false;
        let at = self.cursor();
        if at == 0 {
            return;
        }
        let step = self.focused_text()[..at]
            .chars()
            .next_back()
            .map_or(0, char::len_utf8);
        self.set_cursor(at - step);
    }

    pub fn move_right(&mut self) {
        self.select_all = false;
        let at = self.cursor();
        let text = self.focused_text();
        if at >= text.len() {
            return;
        }
        let step = text[at..].chars().next().map_or(0, char::len_utf8);
        self.set_cursor(at + step);
    }

    /// Jump to the start of the current line
    pub fn move_home(&mut self) {
        self.select_all = false;
        let (line, _) = line_and_col(self.focused_text(), self.cursor());
        let target = index_at(self.focused_text(), line, 0);
        self.set_cursor(target);
    }

    /// Jump past the end of the current line
    pub fn move_end(&mut self) {
        self.select_all = false;
        let (line, _) = line_and_col(self.focused_text(), self.cursor());
        let target = index_at(self.focused_text(), line, usize::MAX);
        self.set_cursor(target);
    }

    /// Move to the previous line, keeping the column where possible
    pub fn move_up(&mut self) {
        self.select_all = false;
        let (line, col) = line_and_col(self.focused_text(), self.cursor());
        if line == 0 {
            return;
        }
        let target = index_at(self.focused_text(), line - 1, col);
        self.set_cursor(target);
    }

    /// Move to the next line, keeping the column where possible
    pub fn move_down(&mut self) {
        self.select_all = false;
        let text = self.focused_text();
        let (line, col) = line_and_col(text, self.cursor());
        if line + 1 >= line_spans(text).len() {
            return;
        }
        let target = index_at(text, line + 1, col);
        self.set_cursor(target);
    }

    fn focused_text(&self) -> &str {
        match self.field {
            Field::Title => &self.draft.title,
            Field::Content => &self.draft.content,
        }
    }

    fn set_cursor(&mut self, at: usize) {
        match self.field {
            Field::Title => self.title_cursor = at,
            Field::Content => self.content_cursor = at,
        }
    }

    /// Route a replacement through the reducer for the focused field
    fn apply(&mut self, text: String) -> bool {
        let action = match self.field {
            Field::Title => EditAction::Title(text),
            Field::Content => EditAction::Content(text),
        };
        self.dispatch(action)
    }
}

/// Byte ranges of each line in `text`, terminating newlines excluded.
/// Always yields at least one span.
fn line_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (i, b) in text.bytes().enumerate() {
        if b == b'\n' {
            spans.push((start, i));
            start = i + 1;
        }
    }
    spans.push((start, text.len()));
    spans
}

/// Line index and character column of a byte cursor
fn line_and_col(text: &str, cursor: usize) -> (usize, usize) {
    let spans = line_spans(text);
    for (line, &(start, end)) in spans.iter().enumerate() {
        if cursor <= end {
            return (line, text[start..cursor].chars().count());
        }
    }
    (spans.len() - 1, 0)
}

/// Byte index `col` characters into `line`, clamped to the line's end
fn index_at(text: &str, line: usize, col: usize) -> usize {
    let spans = line_spans(text);
    let (start, end) = spans[line.min(spans.len() - 1)];
    let mut at = start;
    for (seen, ch) in text[start..end].chars().enumerate() {
        if seen == col {
            break;
        }
        at += ch.len_utf8();
    }
    at
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn session_with(title: &str, content: &str, field: Field) -> EditorSession {
        let mut board = Board::new();
        let id = board.add();
        let mut idea = board.get(id).unwrap().clone();
        idea.title = title.to_string();
        idea.content = content.to_string();
        idea.content_length = content.chars().count();
        EditorSession::new(idea, field)
    }

    #[test]
    fn test_title_edits_always_apply() {
        let mut session = session_with("Old", "", Field::Title);
        let long = "t".repeat(500);
        assert!(session.dispatch(EditAction::Title(long.clone())));
        assert_eq!(session.draft().title, long);
        // Title edits never touch the content counter
        assert_eq!(session.draft().content_length, 0);
    }

    #[test]
    fn test_content_edit_updates_length_in_chars() {
        let mut session = session_with("", "", Field::Content);
        assert!(session.dispatch(EditAction::Content("héllo✨".to_string())));
        assert_eq!(session.draft().content, "héllo✨");
        assert_eq!(session.draft().content_length, 6);
    }

    #[test]
    fn test_content_cap_boundary() {
        let mut session = session_with("", "", Field::Content);

        let just_fits = "x".repeat(CONTENT_LIMIT - 1);
        assert!(session.dispatch(EditAction::Content(just_fits.clone())));
        assert_eq!(session.draft().content_length, 139);

        let too_long = "x".repeat(CONTENT_LIMIT);
        assert!(!session.dispatch(EditAction::Content(too_long)));
        // Rejected wholesale: no truncation, nothing changed
        assert_eq!(session.draft().content, just_fits);
        assert_eq!(session.draft().content_length, 139);
    }

    #[test]
    fn test_rejected_edit_leaves_draft_identical() {
        let mut session = session_with("Title", "short", Field::Content);
        let before = session.draft().clone();
        assert!(!session.dispatch(EditAction::Content("y".repeat(200))));
        assert_eq!(session.draft(), &before);
    }

    #[test]
    fn test_cap_counts_chars_not_bytes() {
        let mut session = session_with("", "", Field::Content);
        // 139 multibyte chars is far more than 140 bytes but still fits
        let text = "é".repeat(CONTENT_LIMIT - 1);
        assert!(text.len() > CONTENT_LIMIT);
        assert!(session.dispatch(EditAction::Content(text)));
        assert_eq!(session.draft().content_length, 139);
    }

    #[test]
    fn test_commit_stamps_updated_at() {
        let mut session = session_with("Title", "body", Field::Title);
        assert!(session.draft().updated_at.is_none());
        let created = session.draft().created_at;

        // Let the clock tick past the creation instant
        std::thread::sleep(std::time::Duration::from_millis(2));

        let committed = session.commit();
        assert!(committed.updated_at.expect("commit stamps a time") > created);
        assert_eq!(committed.title, "Title");
        assert_eq!(committed.content, "body");
        assert_eq!(session.draft().updated_at, committed.updated_at);
    }

    #[test]
    fn test_select_all_replaces_field_on_first_insert() {
        let mut session = session_with("Add a title", "", Field::Title);
        assert!(session.select_all());

        session.insert('N');
        assert_eq!(session.draft().title, "N");
        assert!(!session.select_all());

        session.insert('o');
        assert_eq!(session.draft().title, "No");
    }

    #[test]
    fn test_backspace_disarms_select_all() {
        let mut session = session_with("Draft", "", Field::Title);
        session.backspace();
        assert_eq!(session.draft().title, "Draf");
        // The armed replace is gone; typing now appends
        session.insert('t');
        assert_eq!(session.draft().title, "Draft");
    }

    #[test]
    fn test_insert_mid_text_after_moving() {
        let mut session = session_with("", "abd", Field::Content);
        session.move_left();
        session.insert('c');
        assert_eq!(session.draft().content, "abcd");
        session.insert('!');
        assert_eq!(session.draft().content, "abc!d");
    }

    #[test]
    fn test_cursor_moves_over_multibyte_chars() {
        let mut session = session_with("", "aé日", Field::Content);
        session.move_left(); // before 日
        session.move_left(); // before é
        session.insert('x');
        assert_eq!(session.draft().content, "axé日");

        session.move_right();
        session.insert('y');
        assert_eq!(session.draft().content, "axéy日");
    }

    #[test]
    fn test_backspace_removes_multibyte_char() {
        let mut session = session_with("", "aé", Field::Content);
        session.backspace();
        assert_eq!(session.draft().content, "a");
        assert_eq!(session.draft().content_length, 1);
    }

    #[test]
    fn test_insert_at_cap_keeps_cursor_in_place() {
        let mut session = session_with("", &"x".repeat(CONTENT_LIMIT - 1), Field::Content);
        session.move_left();
        let cursor_before = session.cursor();
        session.insert('!');
        assert_eq!(session.draft().content_length, CONTENT_LIMIT - 1);
        assert_eq!(session.cursor(), cursor_before);
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let mut session = session_with("", "first\nsecond\nthird", Field::Content);
        // Cursor starts at the very end ("third"|)
        session.move_up();
        session.insert('X');
        assert_eq!(session.draft().content, "first\nseconXd\nthird");
    }

    #[test]
    fn test_vertical_movement_clamps_to_short_line() {
        let mut session = session_with("", "long line here\nab", Field::Content);
        session.move_down();
        session.insert('!');
        assert_eq!(session.draft().content, "long line here\nab!");
    }

    #[test]
    fn test_move_up_on_first_line_is_noop() {
        let mut session = session_with("", "only", Field::Content);
        let before = session.cursor();
        session.move_up();
        assert_eq!(session.cursor(), before);
    }

    #[test]
    fn test_home_and_end() {
        let mut session = session_with("", "one\ntwo three", Field::Content);
        session.move_home();
        session.insert('>');
        assert_eq!(session.draft().content, "one\n>two three");
        session.move_end();
        session.insert('<');
        assert_eq!(session.draft().content, "one\n>two three<");
    }

    #[test]
    fn test_focus_switch_rearms_select_all() {
        let mut session = session_with("Title", "Body", Field::Title);
        session.insert('T');
        assert!(!session.select_all());

        session.focus(Field::Content);
        assert_eq!(session.field(), Field::Content);
        assert!(session.select_all());
        session.insert('B');
        assert_eq!(session.draft().content, "B");
        // The title edit from before the switch is still in the draft
        assert_eq!(session.draft().title, "T");
    }

    #[test]
    fn test_newline_insert_in_content() {
        let mut session = session_with("", "ab", Field::Content);
        session.move_left();
        session.insert('\n');
        assert_eq!(session.draft().content, "a\nb");
        assert_eq!(session.draft().content_length, 3);
    }

    #[test]
    fn test_severity_ladder_boundaries() {
        let t = [100, 115, 130];
        assert_eq!(CounterSeverity::for_length(0, &t), CounterSeverity::Calm);
        assert_eq!(CounterSeverity::for_length(100, &t), CounterSeverity::Calm);
        assert_eq!(CounterSeverity::for_length(101, &t), CounterSeverity::Notice);
        assert_eq!(CounterSeverity::for_length(115, &t), CounterSeverity::Notice);
        assert_eq!(CounterSeverity::for_length(116, &t), CounterSeverity::Warn);
        assert_eq!(CounterSeverity::for_length(130, &t), CounterSeverity::Warn);
        assert_eq!(
            CounterSeverity::for_length(131, &t),
            CounterSeverity::Critical
        );
        assert_eq!(
            CounterSeverity::for_length(139, &t),
            CounterSeverity::Critical
        );
    }

    #[test]
    fn test_severity_with_no_thresholds_stays_calm() {
        assert_eq!(CounterSeverity::for_length(999, &[]), CounterSeverity::Calm);
    }

    #[test]
    fn test_line_helpers() {
        let text = "ab\ncdef\n";
        assert_eq!(line_spans(text), vec![(0, 2), (3, 7), (8, 8)]);
        assert_eq!(line_and_col(text, 0), (0, 0));
        assert_eq!(line_and_col(text, 2), (0, 2));
        assert_eq!(line_and_col(text, 3), (1, 0));
        assert_eq!(line_and_col(text, 8), (2, 0));
        assert_eq!(index_at(text, 1, 2), 5);
        assert_eq!(index_at(text, 1, 99), 7);
        assert_eq!(index_at(text, 0, 0), 0);
    }
}
