//! Error types for GradePoint.
//!
//! This module defines the error types used throughout the crate. Calculation
//! failures ([`CalcError`]) are ordinary, recoverable outcomes that are shown
//! to the user in the result panel; [`AppError`] covers everything that can
//! actually abort the application (configuration, terminal I/O, logging).

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Validation failures produced by the GPA calculator.
///
/// These are user-facing and recoverable: the user corrects the offending
/// input and recomputes. Only the first violation found (in list order) is
/// ever surfaced.
///
/// # Examples
///
/// ```
/// use gradepoint_tui::error::CalcError;
///
/// let err = CalcError::NonPositiveCredits;
/// assert_eq!(err.to_string(), "Credits must be a positive number.");
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// A grade-points entry exceeds the 5.0 scale maximum.
    #[error("Grade points cannot exceed 5.0.")]
    PointsOutOfRange,

    /// A credits entry parsed to a number that is zero or negative.
    ///
    /// Empty or unparsable credits do not trigger this variant: they parse
    /// to NaN, and NaN compares false against zero. That permissive edge
    /// case is intentional.
    #[error("Credits must be a positive number.")]
    NonPositiveCredits,

    /// The weighted average itself exceeds 5.0.
    ///
    /// Cannot occur when every entry passed validation with finite inputs,
    /// but the check is kept as a final guard on the computed value.
    #[error("Calculated GPA exceeds 5.0, which is not allowed.")]
    ResultOutOfRange,
}

/// Errors that can abort the application.
///
/// This is the top-level error type for the binary, encompassing all fatal
/// failure modes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Log file could not be opened for appending.
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TUI-related error.
    #[error("TUI error: {0}")]
    Tui(#[from] TuiError),
}

/// Errors that can occur during TUI operation.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal initialization failed.
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] std::io::Error),

    /// Terminal rendering failed.
    #[error("render error: {0}")]
    Render(#[source] std::io::Error),

    /// Event handling error.
    #[error("event error: {0}")]
    Event(String),
}

/// A specialized `Result` type for GradePoint operations.
pub type Result<T> = std::result::Result<T, AppError>;
