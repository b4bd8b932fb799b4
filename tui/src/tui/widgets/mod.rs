//! Reusable TUI widget components for GradePoint.
//!
//! Custom widgets built on top of [`ratatui`], each implementing the
//! [`Widget`](ratatui::widgets::Widget) trait:
//!
//! - [`grade_form`]: the grade entry rows and action buttons
//! - [`result_panel`]: the computed GPA or validation error
//! - [`footer`]: row/credit summary and keybinding hints
//!
//! # Design Principles
//!
//! - Widgets are stateless; state lives in the App
//! - Each widget handles its own layout within its allocated area
//! - Consistent theming via the shared [`Theme`](crate::tui::app::Theme)

pub mod footer;
pub mod grade_form;
pub mod result_panel;

pub use footer::{FooterWidget, FOOTER_HEIGHT};
pub use grade_form::GradeFormWidget;
pub use result_panel::{ResultPanelWidget, RESULT_PANEL_HEIGHT};
