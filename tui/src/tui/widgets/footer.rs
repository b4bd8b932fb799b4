//! Footer widget: list summary and keybinding hints.
//!
//! Shows the row count and the running total of parsable credits, followed
//! by the key bindings. On narrow terminals the hints are dropped first so
//! the summary stays readable.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::app::Theme;

/// Height of the footer in rows (content line plus borders).
pub const FOOTER_HEIGHT: u16 = 3;

/// Separator between footer segments.
const SEPARATOR: &str = "  |  ";

/// Keybinding hints shown when the terminal is wide enough.
const HINTS: &str = "Tab next  Ctrl+A add  Ctrl+D remove  Ctrl+L clear  Esc quit";

/// Widget for the status footer.
#[derive(Debug)]
pub struct FooterWidget<'a> {
    /// Number of rows in the list.
    rows: usize,
    /// Sum of the parsable credit values.
    credit_total: f64,
    /// Reference to the theme for styling.
    theme: &'a Theme,
}

impl<'a> FooterWidget<'a> {
    /// Creates a new `FooterWidget`.
    #[must_use]
    pub fn new(rows: usize, credit_total: f64, theme: &'a Theme) -> Self {
        Self {
            rows,
            credit_total,
            theme,
        }
    }

    fn content_line(&self, width: u16) -> Line<'a> {
        let mut spans = vec![
            Span::styled("Rows: ", self.theme.text_secondary),
            Span::styled(self.rows.to_string(), self.theme.text_primary),
            Span::styled(SEPARATOR, self.theme.text_muted),
            Span::styled("Credits: ", self.theme.text_secondary),
            Span::styled(format!("{}", self.credit_total), self.theme.text_primary),
        ];

        // Hints are the first thing to go on a narrow terminal.
        let summary_width: usize = spans.iter().map(|s| s.content.len()).sum();
        if usize::from(width) >= summary_width + SEPARATOR.len() + HINTS.len() {
            spans.push(Span::styled(SEPARATOR, self.theme.text_muted));
            spans.push(Span::styled(HINTS, self.theme.text_muted));
        }

        Line::from(spans)
    }
}

impl Widget for FooterWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.content_line(inner.width)).render(inner, buf);
    }
}
