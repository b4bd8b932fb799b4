//! Result panel widget: displays the computed GPA or the validation error.
//!
//! Exactly one of the two outcomes is ever shown; before the first
//! calculation (and after a clear) the panel shows a muted prompt instead.
//! Success and failure are marked with symbols in addition to color, so the
//! distinction survives monochrome themes.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::grades::CalculationResult;
use crate::tui::app::{Symbols, Theme};

/// Height of the result panel in rows (content line plus borders).
pub const RESULT_PANEL_HEIGHT: u16 = 3;

/// Widget for displaying the last calculation outcome.
///
/// # Example
///
/// ```ignore
/// use gradepoint_tui::tui::widgets::ResultPanelWidget;
///
/// let widget = ResultPanelWidget::new(state.grades.last_result(), &theme, &symbols);
/// frame.render_widget(widget, result_area);
/// ```
#[derive(Debug)]
pub struct ResultPanelWidget<'a> {
    /// Outcome of the most recent calculation, if any.
    result: Option<&'a CalculationResult>,
    /// Reference to the theme for styling.
    theme: &'a Theme,
    /// Reference to the symbol set.
    symbols: &'a Symbols,
}

impl<'a> ResultPanelWidget<'a> {
    /// Creates a new `ResultPanelWidget`.
    #[must_use]
    pub fn new(
        result: Option<&'a CalculationResult>,
        theme: &'a Theme,
        symbols: &'a Symbols,
    ) -> Self {
        Self {
            result,
            theme,
            symbols,
        }
    }

    /// Builds the single content line for the panel.
    fn content_line(&self) -> Line<'a> {
        match self.result {
            None => Line::styled(
                "Enter grades and press Enter to calculate",
                self.theme.text_muted,
            ),
            Some(Ok(gpa)) => Line::styled(
                format!("{} Your GPA: {gpa}", self.symbols.success),
                self.theme.result_ok,
            ),
            Some(Err(error)) => Line::styled(
                format!("{} {error}", self.symbols.failure),
                self.theme.result_err,
            ),
        }
    }
}

impl Widget for ResultPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title_style(self.theme.title);

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.content_line()).render(inner, buf);
    }
}
