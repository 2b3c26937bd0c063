// TUI application state
//
// App owns the board, the selection, the editing session, and the overlay
// flags. Every board mutation goes through a method here, so commits,
// selection clamping, and toasts stay in one place.

use super::components::Toast;
use super::input::InputHandler;
use crate::board::{Board, Idea, IdeaId, SortCriterion};
use crate::config::Config;
use crate::editor::{EditorSession, Field};
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crossterm::event::KeyCode;

/// Toast message shown whenever an edit lands on the board
const UPDATED_TOAST: &str = "The idea has been updated.";

/// What the keyboard is currently driving
pub enum Mode {
    /// Moving the selection over the board
    Browse,
    /// Editing one idea through a draft session
    Edit(EditorSession),
}

pub struct App {
    /// The idea store, owned here - nothing global
    pub board: Board,

    /// Index of the selected card in display order
    pub selected: usize,

    /// First visible card index (kept in step with the selection at render)
    pub scroll: usize,

    /// Current input mode
    pub mode: Mode,

    /// Last sort applied, for the status bar
    pub last_sort: Option<SortCriterion>,

    /// Active toast notification, if any
    pub toast: Option<Toast>,

    /// Whether the help overlay is open
    pub show_help: bool,

    /// Whether the logs overlay is open
    pub show_logs: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Running on seeded sample data
    pub demo: bool,

    /// Current color theme
    pub theme: Theme,

    /// strftime format for card footers
    pub time_format: String,

    /// Counter escalation thresholds, ascending
    pub counter_thresholds: Vec<usize>,

    /// Log buffer for the logs overlay
    pub log_buffer: LogBuffer,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(&Config::default(), LogBuffer::new())
    }

    pub fn with_config(config: &Config, log_buffer: LogBuffer) -> Self {
        Self {
            board: Board::new(),
            selected: 0,
            scroll: 0,
            mode: Mode::Browse,
            last_sort: None,
            toast: None,
            show_help: false,
            show_logs: false,
            should_quit: false,
            demo: config.demo_mode,
            theme: Theme::by_name(&config.theme),
            time_format: config.time_format.clone(),
            counter_thresholds: config.counter_thresholds.clone(),
            log_buffer,
            input_handler: InputHandler::default(),
        }
    }

    /// The idea under the selection cursor
    pub fn selected_idea(&self) -> Option<&Idea> {
        self.board.ideas().get(self.selected)
    }

    /// The active editing session, if any
    pub fn editing(&self) -> Option<&EditorSession> {
        match &self.mode {
            Mode::Edit(session) => Some(session),
            Mode::Browse => None,
        }
    }

    // ── Selection ────────────────────────────────────────────────────────

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.board.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.board.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.board.is_empty() {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(self.board.len() - 1);
        }
    }

    // ── Board operations ─────────────────────────────────────────────────

    /// Create a fresh idea and immediately open it in the editor with the
    /// title focused, the select-all replace armed
    pub fn add_idea(&mut self) {
        let id = self.board.add();
        if let Some(position) = self.board.position(id) {
            self.selected = position;
        }
        self.open_editor(id, Field::Title);
    }

    /// Open the selected idea in the editor, title first
    pub fn begin_edit(&mut self) {
        if let Some(id) = self.selected_idea().map(|idea| idea.id) {
            self.open_editor(id, Field::Title);
        }
    }

    fn open_editor(&mut self, id: IdeaId, field: Field) {
        if let Some(idea) = self.board.get(id) {
            self.mode = Mode::Edit(EditorSession::new(idea.clone(), field));
        }
    }

    /// Delete the selected idea. No confirmation step: ideas are cheap to
    /// recreate and the board never leaves the session anyway.
    pub fn remove_selected(&mut self) {
        let Some(id) = self.selected_idea().map(|idea| idea.id) else {
            return;
        };
        self.board.remove(id);
        self.clamp_selection();
    }

    /// Reorder the board, keeping the selection on the same idea
    pub fn sort(&mut self, criterion: SortCriterion) {
        let followed = self.selected_idea().map(|idea| idea.id);
        self.board.sort(criterion);
        if let Some(position) = followed.and_then(|id| self.board.position(id)) {
            self.selected = position;
        }
        self.last_sort = Some(criterion);
    }

    // ── Editing ──────────────────────────────────────────────────────────

    /// Write the current draft back to the board and raise the saved toast.
    ///
    /// Synchronous on purpose: when this returns, the board already holds
    /// the committed idea, so the next draw can never show stale state.
    pub fn commit_edit(&mut self) {
        let committed = match &mut self.mode {
            Mode::Edit(session) => session.commit(),
            Mode::Browse => return,
        };
        if self.board.update(committed) {
            self.show_toast(UPDATED_TOAST);
        } else {
            tracing::warn!("commit dropped: idea no longer on the board");
        }
    }

    /// Commit, then move focus to the other field (Tab behaviour)
    pub fn switch_field(&mut self) {
        self.commit_edit();
        if let Mode::Edit(session) = &mut self.mode {
            let next = session.field().other();
            session.focus(next);
        }
    }

    /// Commit and leave the editor (Esc behaviour)
    pub fn finish_edit(&mut self) {
        self.commit_edit();
        self.mode = Mode::Browse;
    }

    // ── Toasts ───────────────────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Drop the toast once it has outlived its duration (called after render)
    pub fn clear_expired_toast(&mut self) {
        if let Some(toast) = &self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    // ── Input ────────────────────────────────────────────────────────────

    /// Forward a key press to the input handler
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Forward a key release to the input handler
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
