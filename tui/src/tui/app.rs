//! Application state and event management for the GradePoint TUI.
//!
//! This module contains the state machine behind the single-page grade form,
//! the event types that drive the TUI loop, and the async [`EventHandler`]
//! that multiplexes terminal input, tick timing, and shutdown.
//!
//! # Architecture
//!
//! All state changes are triggered by [`TuiEvent`] variants. The
//! [`EventHandler`] runs an async loop that:
//!
//! 1. Polls for terminal input (keyboard, resize) with short timeouts
//! 2. Generates periodic tick events
//! 3. Listens for a shutdown signal to terminate gracefully
//!
//! Events are sent to the main loop via an MPSC channel, where they are
//! applied to [`AppState`] and followed by a render cycle. The domain state
//! itself (the grade list and last result) lives in
//! [`GradeList`](crate::grades::GradeList); this module only adds focus
//! tracking and input routing on top of it.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use tokio::sync::{mpsc, oneshot};

use crate::config::DEFAULT_TICK_RATE_MS;
use crate::error::TuiError;
use crate::grades::GradeList;
use crate::types::GradeField;

/// Maximum number of characters accepted into a points/credits field.
///
/// Enough for any sane decimal; keeps a runaway key-repeat from growing a
/// row without bound.
pub const MAX_FIELD_LENGTH: usize = 12;

// =============================================================================
// Focus
// =============================================================================

/// Position of keyboard focus within the form.
///
/// Focus moves through every row's two input fields in list order, then
/// through the three action buttons, and wraps around. When the list is
/// empty the only focusable targets are the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// One input field of one row, addressed by list position.
    Field {
        /// Index of the row within the list (not the entry id).
        index: usize,
        /// Which of the row's two inputs is focused.
        field: GradeField,
    },

    /// The "Add Row" button.
    AddButton,

    /// The "Calculate" button.
    CalculateButton,

    /// The "Clear All" button.
    ClearButton,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field {
            index: 0,
            field: GradeField::Points,
        }
    }
}

impl Focus {
    /// Flattens the focus position to an ordinal within the tab order for a
    /// list of `rows` entries. Fields occupy `0..2*rows`, buttons follow.
    fn ordinal(self, rows: usize) -> usize {
        match self {
            Focus::Field { index, field } => {
                let column = match field {
                    GradeField::Points => 0,
                    GradeField::Credits => 1,
                };
                (index * 2 + column).min(rows.saturating_mul(2))
            }
            Focus::AddButton => rows * 2,
            Focus::CalculateButton => rows * 2 + 1,
            Focus::ClearButton => rows * 2 + 2,
        }
    }

    /// Inverse of [`Focus::ordinal`].
    fn from_ordinal(ordinal: usize, rows: usize) -> Self {
        if ordinal < rows * 2 {
            Focus::Field {
                index: ordinal / 2,
                field: if ordinal % 2 == 0 {
                    GradeField::Points
                } else {
                    GradeField::Credits
                },
            }
        } else {
            match ordinal - rows * 2 {
                0 => Focus::AddButton,
                1 => Focus::CalculateButton,
                _ => Focus::ClearButton,
            }
        }
    }
}

// =============================================================================
// Theme and Symbols
// =============================================================================

/// Theme configuration for the TUI.
///
/// Defines colors and styles used throughout the interface. Status styles
/// are paired with symbols so the result panel does not rely on color alone.
/// For environments where colors should be disabled (per the `NO_COLOR`
/// standard), use [`Theme::monochrome()`] or [`Theme::from_env()`].
#[derive(Debug, Clone)]
pub struct Theme {
    // Form
    /// Style for focused input fields (default: cyan bold).
    pub input_focused: Style,
    /// Style for unfocused input fields (default: gray).
    pub input_unfocused: Style,
    /// Style for form labels (default: white).
    pub label: Style,

    // Result panel
    /// Style for a successful GPA result (default: green bold).
    pub result_ok: Style,
    /// Style for a validation error message (default: red bold).
    pub result_err: Style,

    // Layout
    /// Style for unfocused borders (default: dark gray).
    pub border: Style,
    /// Style for focused borders (default: cyan).
    pub border_focused: Style,
    /// Style for titles (default: white bold).
    pub title: Style,
    /// Style for primary text (default: terminal default).
    pub text_primary: Style,
    /// Style for secondary text (default: gray).
    pub text_secondary: Style,
    /// Style for muted text (default: dark gray).
    pub text_muted: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            input_focused: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            input_unfocused: Style::default().fg(Color::Gray),
            label: Style::default().fg(Color::White),

            result_ok: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            result_err: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            text_primary: Style::default(),
            text_secondary: Style::default().fg(Color::Gray),
            text_muted: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Creates a monochrome theme for `NO_COLOR` support.
    ///
    /// Uses only modifiers (bold, dim, underlined) without any color codes,
    /// per the [NO_COLOR standard](https://no-color.org/).
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            input_focused: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            input_unfocused: Style::default().add_modifier(Modifier::DIM),
            label: Style::default(),

            result_ok: Style::default().add_modifier(Modifier::BOLD),
            result_err: Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),

            border: Style::default(),
            border_focused: Style::default().add_modifier(Modifier::BOLD),
            title: Style::default().add_modifier(Modifier::BOLD),
            text_primary: Style::default(),
            text_secondary: Style::default().add_modifier(Modifier::DIM),
            text_muted: Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Creates a theme based on the environment: [`Theme::monochrome()`] if
    /// `NO_COLOR` is set (to any value), [`Theme::default()`] otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        if std::env::var("NO_COLOR").is_ok() {
            Self::monochrome()
        } else {
            Self::default()
        }
    }
}

/// Symbol set for the TUI (unicode or ASCII).
#[derive(Debug, Clone, Copy)]
pub struct Symbols {
    /// Symbol for a successful result.
    pub success: &'static str,
    /// Symbol for a validation failure.
    pub failure: &'static str,
    /// Arrow symbol marking the focused button.
    pub arrow: &'static str,
    /// Bullet point symbol for hints.
    pub bullet: &'static str,
}

/// Unicode symbol set for modern terminals.
pub const UNICODE_SYMBOLS: Symbols = Symbols {
    success: "✓",
    failure: "✗",
    arrow: "→",
    bullet: "•",
};

/// ASCII symbol set for limited terminals (Linux console, VT100).
pub const ASCII_SYMBOLS: Symbols = Symbols {
    success: "[+]",
    failure: "[x]",
    arrow: "->",
    bullet: "*",
};

impl Symbols {
    /// Detects the appropriate symbol set from the `TERM` environment
    /// variable: ASCII for `linux`/`vt100` terminals, unicode otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if std::env::var("TERM")
            .map(|t| t.contains("linux") || t.contains("vt100"))
            .unwrap_or(false)
        {
            ASCII_SYMBOLS
        } else {
            UNICODE_SYMBOLS
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::detect()
    }
}

// =============================================================================
// Application State
// =============================================================================

/// Application state for the GradePoint TUI.
///
/// Owns the [`GradeList`], the focus position, and presentation settings.
/// All keyboard input is routed through [`AppState::handle_key`].
///
/// # Example
///
/// ```
/// use gradepoint_tui::tui::app::AppState;
///
/// let mut state = AppState::new();
/// assert!(!state.should_quit());
///
/// state.quit();
/// assert!(state.should_quit());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The grade list and last calculation outcome.
    pub grades: GradeList,

    /// Current keyboard focus position.
    pub focus: Focus,

    /// Theme configuration.
    pub theme: Theme,

    /// Symbol set (unicode or ASCII).
    pub symbols: Symbols,

    /// Flag indicating the user requested exit.
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` with one empty grade row focused.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grades: GradeList::new(),
            ..Self::default()
        }
    }

    /// Returns `true` if the application should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Signals that the application should quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a key event to the state.
    ///
    /// # Key Bindings
    ///
    /// | Key | Action |
    /// |-----|--------|
    /// | `Esc`, `Ctrl+C` | Quit |
    /// | `Tab` / `Shift+Tab` | Next / previous focus target |
    /// | `Up` / `Down` | Move between rows and buttons |
    /// | `Left` / `Right` | Move within a row / between buttons |
    /// | `Enter` | Calculate (on a field or Calculate), or activate button |
    /// | `Ctrl+A` | Add a row |
    /// | `Ctrl+D` | Remove the focused row |
    /// | `Ctrl+L` | Clear all rows and the result |
    /// | `Backspace` | Delete the last character of the focused field |
    /// | digit, `.`, `-`, `+` | Append to the focused field |
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.quit(),
                KeyCode::Char('a') => self.add_row(),
                KeyCode::Char('d') => self.remove_focused_row(),
                KeyCode::Char('l') => self.clear_all(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Down => self.focus_down(),
            KeyCode::Up => self.focus_up(),
            KeyCode::Right => self.focus_next(),
            KeyCode::Left => self.focus_prev(),
            KeyCode::Enter => self.activate(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) => self.insert_char(c),
            _ => {}
        }
    }

    /// Moves focus to the next target in tab order, wrapping.
    pub fn focus_next(&mut self) {
        let rows = self.grades.len();
        let total = rows * 2 + 3;
        let next = (self.focus.ordinal(rows) + 1) % total;
        self.focus = Focus::from_ordinal(next, rows);
    }

    /// Moves focus to the previous target in tab order, wrapping.
    pub fn focus_prev(&mut self) {
        let rows = self.grades.len();
        let total = rows * 2 + 3;
        let prev = (self.focus.ordinal(rows) + total - 1) % total;
        self.focus = Focus::from_ordinal(prev, rows);
    }

    /// Moves focus one row down, keeping the column; from the last row,
    /// moves onto the Calculate button.
    fn focus_down(&mut self) {
        match self.focus {
            Focus::Field { index, field } if index + 1 < self.grades.len() => {
                self.focus = Focus::Field {
                    index: index + 1,
                    field,
                };
            }
            Focus::Field { .. } => self.focus = Focus::CalculateButton,
            _ => {}
        }
    }

    /// Moves focus one row up, keeping the column; from the buttons, moves
    /// back to the last row.
    fn focus_up(&mut self) {
        match self.focus {
            Focus::Field { index, field } if index > 0 => {
                self.focus = Focus::Field {
                    index: index - 1,
                    field,
                };
            }
            Focus::AddButton | Focus::CalculateButton | Focus::ClearButton
                if !self.grades.is_empty() =>
            {
                self.focus = Focus::Field {
                    index: self.grades.len() - 1,
                    field: GradeField::Points,
                };
            }
            _ => {}
        }
    }

    /// Activates the focused target: buttons perform their action, and
    /// Enter on any input field requests a calculation.
    fn activate(&mut self) {
        match self.focus {
            Focus::Field { .. } | Focus::CalculateButton => self.calculate(),
            Focus::AddButton => self.add_row(),
            Focus::ClearButton => self.clear_all(),
        }
    }

    /// Appends a character to the focused field, up to [`MAX_FIELD_LENGTH`].
    ///
    /// Only numeric characters (digits, '.', '-', '+') are accepted;
    /// well-formedness is still checked at calculation time, not here.
    fn insert_char(&mut self, c: char) {
        // Numeric inputs only, matching an HTML number field.
        if !c.is_ascii_digit() && !matches!(c, '.' | '-' | '+') {
            return;
        }
        if let Focus::Field { index, field } = self.focus {
            if let Some(entry) = self.grades.entries().get(index) {
                let id = entry.id;
                let mut value = entry.get(field).to_string();
                if value.len() >= MAX_FIELD_LENGTH {
                    return;
                }
                value.push(c);
                self.grades.update(id, field, value);
            }
        }
    }

    /// Deletes the last character of the focused field.
    fn backspace(&mut self) {
        if let Focus::Field { index, field } = self.focus {
            if let Some(entry) = self.grades.entries().get(index) {
                let id = entry.id;
                let mut value = entry.get(field).to_string();
                if value.pop().is_some() {
                    self.grades.update(id, field, value);
                }
            }
        }
    }

    /// Appends a new empty row and focuses its points field.
    fn add_row(&mut self) {
        self.grades.add();
        self.focus = Focus::Field {
            index: self.grades.len() - 1,
            field: GradeField::Points,
        };
        tracing::debug!(rows = self.grades.len(), "Row added");
    }

    /// Removes the focused row.
    ///
    /// Removing the only remaining row leaves the list empty and moves
    /// focus to the Add button; no replacement row is created.
    fn remove_focused_row(&mut self) {
        if let Focus::Field { index, field } = self.focus {
            if let Some(entry) = self.grades.entries().get(index) {
                let id = entry.id;
                self.grades.remove(id);
                tracing::debug!(rows = self.grades.len(), "Row removed");

                if self.grades.is_empty() {
                    self.focus = Focus::AddButton;
                } else {
                    self.focus = Focus::Field {
                        index: index.min(self.grades.len() - 1),
                        field,
                    };
                }
            }
        }
    }

    /// Resets the list to a single empty row and clears the result.
    fn clear_all(&mut self) {
        self.grades.clear();
        self.focus = Focus::default();
        tracing::debug!("List cleared");
    }

    /// Runs the calculator over the current list and records the outcome.
    fn calculate(&mut self) {
        match self.grades.calculate() {
            Ok(gpa) => tracing::info!(gpa = %gpa, "GPA calculated"),
            Err(error) => tracing::info!(%error, "Validation failed"),
        }
    }
}

// =============================================================================
// Event Types and Handler
// =============================================================================

/// Events that drive the TUI event loop.
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Periodic tick for redraw pacing.
    Tick,

    /// Trigger a render cycle.
    Render,

    /// Terminal key press.
    Key(KeyEvent),

    /// Terminal resize to (columns, rows).
    Resize(u16, u16),
}

/// Poll timeout for checking terminal input.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 10;

/// Handles terminal input and generates periodic tick events.
///
/// Runs an async loop that multiplexes three sources with `tokio::select!`:
/// a tick interval, non-blocking crossterm polling (via `spawn_blocking`),
/// and a oneshot shutdown signal. All events are forwarded to the main loop
/// over an MPSC channel.
///
/// # Example
///
/// ```ignore
/// use tokio::sync::{mpsc, oneshot};
/// use gradepoint_tui::tui::app::EventHandler;
///
/// let (event_tx, mut event_rx) = mpsc::channel(100);
/// let (shutdown_tx, shutdown_rx) = oneshot::channel();
///
/// tokio::spawn(EventHandler::new(event_tx, shutdown_rx).run());
/// while let Some(event) = event_rx.recv().await {
///     // apply event to state, then draw
/// }
/// let _ = shutdown_tx.send(());
/// ```
#[derive(Debug)]
pub struct EventHandler {
    /// Channel sender for dispatching events to the main loop.
    event_tx: mpsc::Sender<TuiEvent>,
    /// Receiver for the shutdown signal.
    shutdown_rx: oneshot::Receiver<()>,
    /// Tick rate.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new `EventHandler` with the default tick rate.
    pub fn new(event_tx: mpsc::Sender<TuiEvent>, shutdown_rx: oneshot::Receiver<()>) -> Self {
        Self::with_tick_rate(
            event_tx,
            shutdown_rx,
            Duration::from_millis(DEFAULT_TICK_RATE_MS),
        )
    }

    /// Creates a new `EventHandler` with a custom tick rate.
    pub fn with_tick_rate(
        event_tx: mpsc::Sender<TuiEvent>,
        shutdown_rx: oneshot::Receiver<()>,
        tick_rate: Duration,
    ) -> Self {
        Self {
            event_tx,
            shutdown_rx,
            tick_rate,
        }
    }

    /// Returns the configured tick rate.
    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Runs the event loop until a shutdown signal is received or the
    /// receiving side of the event channel is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TuiError::Event`] if the terminal polling task panics.
    pub async fn run(mut self) -> Result<(), TuiError> {
        // tokio's interval asserts a positive period.
        let tick_rate = self.tick_rate.max(Duration::from_millis(1));
        let mut tick_interval = tokio::time::interval(tick_rate);
        // Burst mode avoids tick accumulation if processing falls behind.
        tick_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Burst);

        // Consume the immediate first tick.
        tick_interval.tick().await;

        loop {
            tokio::select! {
                biased;

                // Highest priority: shutdown signal.
                _ = &mut self.shutdown_rx => {
                    tracing::debug!("EventHandler received shutdown signal");
                    break;
                }

                _ = tick_interval.tick() => {
                    if self.event_tx.send(TuiEvent::Tick).await.is_err() {
                        tracing::debug!("Event receiver dropped, exiting event loop");
                        break;
                    }
                }

                // Poll for terminal events off the async runtime.
                result = async {
                    tokio::time::sleep(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS)).await;
                    tokio::task::spawn_blocking(|| {
                        Self::poll_terminal_event(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS))
                    }).await
                } => {
                    match result {
                        Ok(Some(event)) => {
                            if self.event_tx.send(event).await.is_err() {
                                tracing::debug!("Event receiver dropped, exiting event loop");
                                break;
                            }
                        }
                        Ok(None) => {}
                        Err(join_error) => {
                            tracing::error!("spawn_blocking task panicked: {}", join_error);
                            return Err(TuiError::Event(format!(
                                "terminal polling task panicked: {join_error}"
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Polls for a terminal event with the given timeout.
    ///
    /// In non-terminal environments (CI, tests) polling may fail; that is
    /// treated as "no event" rather than an error.
    fn poll_terminal_event(timeout: Duration) -> Option<TuiEvent> {
        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(crossterm_event) => Self::convert_crossterm_event(crossterm_event),
                Err(e) => {
                    tracing::trace!("Failed to read terminal event: {}", e);
                    None
                }
            },
            Ok(false) => None,
            Err(e) => {
                tracing::trace!("Failed to poll terminal: {}", e);
                None
            }
        }
    }

    /// Converts a crossterm event to a [`TuiEvent`], dropping event kinds
    /// the form does not use (mouse, focus, paste).
    fn convert_crossterm_event(event: CrosstermEvent) -> Option<TuiEvent> {
        match event {
            CrosstermEvent::Key(key_event) => Some(TuiEvent::Key(key_event)),
            CrosstermEvent::Resize(cols, rows) => Some(TuiEvent::Resize(cols, rows)),
            CrosstermEvent::Mouse(_) => None,
            CrosstermEvent::FocusGained | CrosstermEvent::FocusLost => None,
            CrosstermEvent::Paste(_) => None,
        }
    }
}
