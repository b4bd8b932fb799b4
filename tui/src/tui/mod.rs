//! Terminal User Interface for GradePoint.
//!
//! A single-page form built with [`ratatui`]: grade rows, action buttons,
//! a result panel, and a status footer, driven by keyboard input.
//!
//! # Architecture
//!
//! - **App** (`app`): application state, focus, and key handling
//! - **UI** (`ui`): layout and rendering
//! - **Terminal** (`terminal`): raw mode setup/teardown with panic safety
//! - **Widgets** (`widgets`): reusable UI components

pub mod app;
pub mod terminal;
pub mod ui;
pub mod widgets;

// Re-exports for convenient access to core TUI types
pub use app::{AppState, EventHandler, TuiEvent};
pub use terminal::{install_panic_hook, Tui};
