//! GradePoint - terminal GPA calculator.
//!
//! This crate implements a single-page form that lets a user enter a list
//! of (grade-points, credit-hours) pairs and computes a credit-weighted
//! grade-point average, with simple validation and add/remove/clear row
//! operations.
//!
//! # Overview
//!
//! The core is the pure calculator in [`gpa`] plus the list state in
//! [`grades`]; everything else is presentation. There is no persistence
//! and no network: the list lives only for the duration of the session.
//!
//! # Modules
//!
//! - [`types`]: grade entry data types
//! - [`gpa`]: the GPA calculation and its validation rules
//! - [`grades`]: list state and mutation operations
//! - [`config`]: configuration from environment variables
//! - [`error`]: error types
//! - [`tui`]: terminal user interface

pub mod config;
pub mod error;
pub mod gpa;
pub mod grades;
pub mod tui;
pub mod types;

pub use config::Config;
pub use error::{AppError, CalcError, Result, TuiError};
pub use gpa::{calculate, Gpa};
pub use grades::{CalculationResult, GradeList};
pub use types::{GradeEntry, GradeField};
