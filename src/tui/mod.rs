// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the board
// - Dispatching keys to the browse/edit modes and the overlays

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod text;
pub mod ui;

use crate::board::SortCriterion;
use crate::config::Config;
use crate::editor::Field;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Mode};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done. The event loop handles both keyboard input and timer ticks.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create app state with config (initializes theme, thresholds from config)
    let mut app = App::with_config(&config, log_buffer);
    if config.demo_mode {
        crate::demo::seed(&mut app.board);
    }

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles two types of events:
/// 1. Keyboard and mouse input (for editing and navigation)
/// 2. Timer ticks (for periodic redraws, so toasts expire without input)
///
/// The use of tokio::select! allows us to wait on multiple async operations
/// simultaneously, responding to whichever one completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Create a ticker for periodic redraws (5 FPS is plenty for a board)
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        // Draw the UI
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        // Wait for events using tokio::select!
        // This is non-blocking and efficient - we only wake up when something happens
        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {}
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Overlay → Edit mode → Browse mode
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // CRITICAL: Always process Release events to keep InputHandler in sync
    // Without this, keys get stuck in "pressed" state after an overlay closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: An open overlay captures all input
    if handle_overlay_keys(app, &key_event) {
        return;
    }

    // Layer 2 / 3: mode-specific dispatch
    match app.mode {
        Mode::Edit(_) => handle_edit_key(app, &key_event),
        Mode::Browse => handle_browse_key(app, &key_event),
    }
}

/// Overlay input - returns true if an overlay absorbed the key.
/// Overlay keys skip the InputHandler on purpose: closing a popup should
/// never be debounced away.
fn handle_overlay_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    if app.show_help {
        match key {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => app.show_help = false,
            _ => {}
        }
        return true;
    }

    if app.show_logs {
        match key {
            KeyCode::Char('L') | KeyCode::Esc | KeyCode::Char('q') => app.show_logs = false,
            KeyCode::Char('c') => app.log_buffer.clear(),
            _ => {}
        }
        return true;
    }

    false
}

/// Edit-mode input. Every press goes straight to the session - debouncing
/// keystrokes would eat typed characters.
fn handle_edit_key(app: &mut App, key_event: &KeyEvent) {
    match key_event.code {
        // Esc saves and closes; there is no discard path
        KeyCode::Esc => app.finish_edit(),
        KeyCode::Tab | KeyCode::BackTab => app.switch_field(),
        KeyCode::Enter => {
            // Enter advances out of the single-line title, but inside the
            // content it is a literal newline
            let in_title = matches!(app.editing().map(|s| s.field()), Some(Field::Title));
            if in_title {
                app.switch_field();
            } else if let Mode::Edit(session) = &mut app.mode {
                session.insert('\n');
            }
        }
        code => {
            let Mode::Edit(session) = &mut app.mode else {
                return;
            };
            match code {
                KeyCode::Backspace => session.backspace(),
                KeyCode::Left => session.move_left(),
                KeyCode::Right => session.move_right(),
                KeyCode::Up => session.move_up(),
                KeyCode::Down => session.move_down(),
                KeyCode::Home => session.move_home(),
                KeyCode::End => session.move_end(),
                KeyCode::Char(ch) => {
                    let mods = key_event.modifiers;
                    if !mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::ALT) {
                        session.insert(ch);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Browse-mode input, gated through the InputHandler for debounce and
/// hold-to-repeat on the navigation keys
fn handle_browse_key(app: &mut App, key_event: &KeyEvent) {
    let key = key_event.code;
    if !app.handle_key_press(key) {
        return;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('n') => app.add_idea(),
        KeyCode::Enter => app.begin_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('t') => app.sort(SortCriterion::TitleAsc),
        KeyCode::Char('u') => app.sort(SortCriterion::UpdatedAsc),
        KeyCode::Char('U') => app.sort(SortCriterion::UpdatedDesc),
        KeyCode::Char('y') => copy_selected(app),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('L') => app.show_logs = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),
        _ => {}
    }
}

/// Copy the selected idea to the system clipboard
fn copy_selected(app: &mut App) {
    let Some(idea) = app.selected_idea() else {
        return;
    };
    if clipboard::copy_idea(idea).is_ok() {
        app.show_toast("✓ Copied to clipboard");
    } else {
        app.show_toast("✗ Failed to copy");
    }
}

/// Handle mouse input - the wheel moves the selection while browsing
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if !matches!(app.mode, Mode::Browse) || app.show_help || app.show_logs {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),
        _ => {}
    }
}
