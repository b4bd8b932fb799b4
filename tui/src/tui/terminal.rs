//! Terminal setup and RAII restoration for the GradePoint TUI.
//!
//! [`Tui`] wraps a ratatui terminal with automatic cleanup via [`Drop`]: raw
//! mode and the alternate screen are entered on creation and restored when
//! the value goes out of scope. [`install_panic_hook`] must be called once
//! at startup, before creating a [`Tui`], so that a panic anywhere in the
//! application restores the terminal before the panic message prints.
//!
//! ```ignore
//! use gradepoint_tui::tui::{install_panic_hook, Tui};
//!
//! install_panic_hook();
//! let mut tui = Tui::new()?;
//! tui.draw(|frame| { /* render widgets */ })?;
//! // terminal restored when `tui` drops
//! ```

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Installs a panic hook that restores terminal state before the panic
/// message is displayed.
///
/// The hook shows the cursor, leaves the alternate screen, disables raw
/// mode, and then delegates to the previous panic handler. Restoration
/// errors are ignored: the terminal may already be in an inconsistent state
/// when a panic occurs, and a second panic would abort the process.
pub fn install_panic_hook() {
    let previous_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), Show);
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();

        previous_hook(panic_info);
    }));
}

/// A wrapper around ratatui's `Terminal` that provides RAII-based cleanup.
///
/// When dropped, automatically shows the cursor, leaves the alternate
/// screen, and disables raw mode, so the shell is usable again even if the
/// application exits unexpectedly.
pub struct Tui {
    /// The underlying ratatui terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Tracks whether the terminal has been restored, to avoid double cleanup.
    restored: bool,
}

impl Tui {
    /// Creates a new TUI instance: enables raw mode, enters the alternate
    /// screen, hides the cursor, and builds the ratatui terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if any initialization step fails. Steps that
    /// completed before the failure are rolled back.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e);
            }
        };

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Draws a frame using the provided closure. The frame is flushed to
    /// the terminal when the closure returns.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Explicitly restores the terminal to its original state.
    ///
    /// Unlike the [`Drop`] implementation, errors are propagated. After
    /// calling this, the [`Tui`] should not be used for drawing; [`Drop`]
    /// will skip cleanup.
    ///
    /// # Errors
    ///
    /// Returns an error if any restoration step fails.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        execute!(io::stdout(), Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;

        Ok(())
    }
}

impl Drop for Tui {
    /// Restores the terminal state, silently: we may be unwinding, and a
    /// panic here would abort the process.
    fn drop(&mut self) {
        if self.restored {
            return;
        }

        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
