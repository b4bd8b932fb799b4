//! GradePoint - terminal GPA calculator.
//!
//! This binary runs the interactive form: enter (grade-points, credits)
//! pairs row by row, then calculate the credit-weighted average.
//!
//! # Environment Variables
//!
//! See the [`config`](gradepoint_tui::config) module for available
//! configuration options.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gradepoint_tui::config::Config;
use gradepoint_tui::error::{AppError, TuiError};
use gradepoint_tui::tui::app::{AppState, EventHandler, Symbols, Theme, TuiEvent, ASCII_SYMBOLS};
use gradepoint_tui::tui::{install_panic_hook, ui, Tui};

/// Capacity of the TUI event channel.
const EVENT_CHANNEL_SIZE: usize = 100;

/// GradePoint - terminal GPA calculator.
///
/// Enter grade points and credit hours per course, then calculate the
/// credit-weighted GPA. All state is in-memory for the session only.
#[derive(Parser, Debug)]
#[command(name = "gradepoint")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
ENVIRONMENT VARIABLES:
    GRADEPOINT_TICK_RATE_MS    Event loop tick interval (default: 60)
    GRADEPOINT_LOG_FILE        Append tracing output to this file
    NO_COLOR                   Any value selects the monochrome theme

KEYS:
    Tab / Shift+Tab    Move between fields and buttons
    Enter              Calculate (or activate the focused button)
    Ctrl+A             Add a row
    Ctrl+D             Remove the focused row
    Ctrl+L             Clear all rows and the result
    Esc                Quit
")]
struct Cli {
    /// Force the ASCII symbol set (default: auto-detect from TERM).
    #[arg(long)]
    ascii: bool,

    /// Event loop tick interval in milliseconds.
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    tick_rate: Option<u64>,

    /// Enable logging to the default path (~/.gradepoint/gradepoint.log).
    #[arg(long)]
    log: bool,

    /// Enable logging to a specific file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    runtime.block_on(run(cli))
}

/// Runs the application to completion.
async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env().context("Failed to load configuration")?;

    // CLI flags take precedence over environment variables.
    if let Some(tick_rate) = cli.tick_rate {
        config.tick_rate_ms = tick_rate;
    }
    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    } else if cli.log && config.log_file.is_none() {
        config.log_file = Some(Config::default_log_path()?);
    }

    init_logging(config.log_file.as_deref())?;

    info!(tick_rate_ms = config.tick_rate_ms, "Starting GradePoint");

    let mut state = AppState::new();
    state.theme = Theme::from_env();
    state.symbols = if cli.ascii {
        ASCII_SYMBOLS
    } else {
        Symbols::detect()
    };

    // Install the panic hook before touching the terminal so a panic
    // anywhere below leaves the shell usable.
    install_panic_hook();
    let mut tui = Tui::new().map_err(TuiError::TerminalInit)?;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(EVENT_CHANNEL_SIZE);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let handler = EventHandler::with_tick_rate(
        event_tx,
        shutdown_rx,
        std::time::Duration::from_millis(config.tick_rate_ms),
    );
    let event_task = tokio::spawn(handler.run());

    tui.draw(|frame| ui::render(frame, &state))
        .map_err(TuiError::Render)
        .map_err(AppError::from)?;

    // Main event loop: apply each event to the state, then redraw.
    while let Some(event) = event_rx.recv().await {
        match event {
            TuiEvent::Key(key) => state.handle_key(key),
            TuiEvent::Resize(cols, rows) => {
                debug!(cols, rows, "Terminal resized");
            }
            TuiEvent::Tick | TuiEvent::Render => {}
        }

        if state.should_quit() {
            break;
        }

        tui.draw(|frame| ui::render(frame, &state))
            .map_err(TuiError::Render)
            .map_err(AppError::from)?;
    }

    // Graceful shutdown: stop the event handler, then restore the terminal
    // before reporting any failure from the event task.
    let _ = shutdown_tx.send(());
    let event_result = event_task.await;

    tui.restore().context("Failed to restore terminal")?;

    event_result
        .context("Event handler task panicked")?
        .map_err(AppError::from)?;

    info!("GradePoint stopped");
    Ok(())
}

/// Initializes the logging subsystem.
///
/// A TUI owns the terminal, so tracing output goes to a file when a path
/// is configured and is disabled entirely otherwise.
fn init_logging(log_file: Option<&std::path::Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }

    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_rejects_zero_tick_rate() {
        let result = Cli::try_parse_from(["gradepoint", "--tick-rate", "0"]);
        assert!(result.is_err(), "a zero tick rate must be rejected");
    }

    #[test]
    fn cli_accepts_positive_tick_rate() {
        let cli = Cli::try_parse_from(["gradepoint", "--tick-rate", "33"]).unwrap();
        assert_eq!(cli.tick_rate, Some(33));
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["gradepoint"]).unwrap();
        assert!(!cli.ascii);
        assert!(!cli.log);
        assert!(cli.tick_rate.is_none());
        assert!(cli.log_file.is_none());
    }
}
