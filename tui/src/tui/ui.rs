//! UI rendering for the GradePoint TUI.
//!
//! Composes the widgets into the single form screen: the grade form on top,
//! the result panel beneath it, and the status footer at the bottom. Acts
//! as the "View" layer; all state lives in [`AppState`].

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::AppState;
use crate::tui::widgets::{
    FooterWidget, GradeFormWidget, ResultPanelWidget, FOOTER_HEIGHT, RESULT_PANEL_HEIGHT,
};

/// Minimum terminal width for the full layout.
pub const MIN_WIDTH: u16 = 44;

/// Minimum terminal height for the full layout.
pub const MIN_HEIGHT: u16 = 12;

/// Renders the application into the given frame.
///
/// Terminals below [`MIN_WIDTH`]x[`MIN_HEIGHT`] get a short resize prompt
/// instead of the form.
///
/// # Example
///
/// ```ignore
/// use gradepoint_tui::tui::ui::render;
/// use gradepoint_tui::tui::app::AppState;
///
/// let state = AppState::new();
/// terminal.draw(|frame| render(frame, &state))?;
/// ```
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let message = Paragraph::new(format!(
            "Terminal too small: {}x{} (minimum {}x{})",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        ))
        .style(state.theme.text_secondary)
        .alignment(Alignment::Center);
        frame.render_widget(message, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Min(6),
        Constraint::Length(RESULT_PANEL_HEIGHT),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .split(area);

    frame.render_widget(
        GradeFormWidget::new(
            state.grades.entries(),
            state.focus,
            &state.theme,
            &state.symbols,
        ),
        chunks[0],
    );
    frame.render_widget(
        ResultPanelWidget::new(state.grades.last_result(), &state.theme, &state.symbols),
        chunks[1],
    );
    frame.render_widget(
        FooterWidget::new(state.grades.len(), state.grades.credit_total(), &state.theme),
        chunks[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn renders_all_three_panels() {
        let state = AppState::new();
        let content = draw(&state, 80, 24);
        assert!(content.contains("GradePoint GPA Calculator"));
        assert!(content.contains("Result"));
        assert!(content.contains("Rows: 1"));
    }

    #[test]
    fn renders_resize_prompt_when_too_small() {
        let state = AppState::new();
        let content = draw(&state, 30, 8);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn renders_result_after_calculation() {
        let mut state = AppState::new();
        let id = state.grades.entries()[0].id;
        state
            .grades
            .update(id, crate::types::GradeField::Points, "4".to_string());
        state
            .grades
            .update(id, crate::types::GradeField::Credits, "3".to_string());
        assert!(state.grades.calculate().is_ok());

        let content = draw(&state, 80, 24);
        assert!(content.contains("Your GPA: 4.00"));
    }
}
