// ideaboard - Terminal Idea Board
//
// A keyboard-driven TUI for capturing short-lived ideas as cards: create,
// edit, sort, and discard without leaving the terminal. The board lives in
// memory for the lifetime of the session.
//
// Architecture:
// - Board: owned in-memory store of ideas with stable ids
// - Editor: draft sessions with a hard content length cap
// - TUI (ratatui): renders the card stack and drives all input
// - Logging: tracing events captured into an in-app overlay

mod board;
mod cli;
mod config;
mod demo;
mod editor;
mod logging;
mod theme;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Create log buffer for the in-app logs overlay
    let log_buffer = LogBuffer::new();

    // Initialize tracing/logging
    // Logs are captured into the buffer (writing to stdout would garble the
    // alternate screen) and optionally into rotating JSON files
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("ideaboard={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Set up file logging if enabled (non-blocking writer with rotation)
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            // Create log directory if it doesn't exist
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to buffer-only logging
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                // Create rolling file appender based on configured rotation
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Wrap in non-blocking writer (writes happen in background thread)
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // File layer uses JSON format for structured log parsing
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();

                Some(guard)
            }
        } else {
            // No file logging - buffer layer only
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!(
        "ideaboard v{} starting (theme: {}, demo: {})",
        config::VERSION,
        config.theme,
        config.demo_mode
    );

    // Run the TUI in the main task
    // This blocks until the user quits (presses 'q')
    tui::run_tui(config, log_buffer).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
