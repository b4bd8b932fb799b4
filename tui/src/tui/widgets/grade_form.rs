//! Grade form widget: the single-page list of grade rows plus action buttons.
//!
//! Renders one line per [`GradeEntry`] with bracketed inputs for grade
//! points and credits, followed by the Add Row / Calculate / Clear All
//! buttons. The focused input or button is highlighted and, for inputs,
//! given a trailing cursor indicator.
//!
//! # Layout
//!
//! ```text
//! ┌ GradePoint GPA Calculator ──────────────────────┐
//! │  #1  Points [4.5_        ]  Credits [3         ]│
//! │  #2  Points [            ]  Credits [          ]│
//! │                                                 │
//! │  [ Add Row ]  [ Calculate ]  [ Clear All ]      │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! When the list is longer than the available height, the visible window
//! scrolls to keep the focused row on screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::tui::app::{Focus, Symbols, Theme, MAX_FIELD_LENGTH};
use crate::types::{GradeEntry, GradeField};

/// Display width of a bracketed input, including room for the cursor.
const INPUT_WIDTH: usize = MAX_FIELD_LENGTH + 1;

/// Minimum inner dimensions below which only a short message is rendered.
const MIN_INNER_WIDTH: u16 = 40;
const MIN_INNER_HEIGHT: u16 = 4;

/// Widget for rendering the grade entry form.
///
/// Stateless: takes references to the entries and styling, plus the current
/// focus position. Implements ratatui's [`Widget`] trait.
#[derive(Debug)]
pub struct GradeFormWidget<'a> {
    /// Entries to render, in list order.
    entries: &'a [GradeEntry],
    /// Current focus position.
    focus: Focus,
    /// Reference to the theme for styling.
    theme: &'a Theme,
    /// Reference to the symbol set.
    symbols: &'a Symbols,
}

impl<'a> GradeFormWidget<'a> {
    /// Creates a new `GradeFormWidget`.
    #[must_use]
    pub fn new(
        entries: &'a [GradeEntry],
        focus: Focus,
        theme: &'a Theme,
        symbols: &'a Symbols,
    ) -> Self {
        Self {
            entries,
            focus,
            theme,
            symbols,
        }
    }

    /// Builds the display line for one entry row.
    fn row_line(&self, index: usize, entry: &GradeEntry) -> Line<'a> {
        let mut spans = vec![Span::styled(
            format!("#{:<3}", index + 1),
            self.theme.text_muted,
        )];

        for field in [GradeField::Points, GradeField::Credits] {
            let label = match field {
                GradeField::Points => "Points ",
                GradeField::Credits => "Credits ",
            };
            let focused = self.focus
                == Focus::Field {
                    index,
                    field,
                };

            spans.push(Span::styled(label.to_string(), self.theme.label));
            spans.extend(self.input_spans(entry.get(field), focused));
            spans.push(Span::raw("  "));
        }

        Line::from(spans)
    }

    /// Builds the bracketed input spans for one field value.
    fn input_spans(&self, value: &str, focused: bool) -> Vec<Span<'a>> {
        let bracket_style = if focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        let content_style = if focused {
            self.theme.input_focused
        } else {
            self.theme.input_unfocused
        };

        // Trailing cursor marker when focused, then pad to a fixed width so
        // columns line up across rows.
        let text = if focused {
            format!("{value}_")
        } else {
            value.to_string()
        };
        let padded = format!("{text:<INPUT_WIDTH$}");

        vec![
            Span::styled("[", bracket_style),
            Span::styled(padded, content_style),
            Span::styled("]", bracket_style),
        ]
    }

    /// Builds the action button line.
    fn button_line(&self) -> Line<'a> {
        let buttons = [
            ("Add Row", Focus::AddButton),
            ("Calculate", Focus::CalculateButton),
            ("Clear All", Focus::ClearButton),
        ];

        let mut spans = vec![Span::raw("    ")];
        for (label, target) in buttons {
            let focused = self.focus == target;
            let style = if focused {
                self.theme
                    .input_focused
                    .add_modifier(Modifier::REVERSED)
            } else {
                self.theme.input_unfocused
            };
            let text = if focused {
                format!("[ {} {label} ]", self.symbols.arrow)
            } else {
                format!("[ {label} ]")
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw("  "));
        }

        Line::from(spans)
    }

    /// Index of the first visible row, chosen so the focused row stays on
    /// screen when the list is longer than the viewport.
    fn scroll_offset(&self, visible_rows: usize) -> usize {
        let focused_index = match self.focus {
            Focus::Field { index, .. } => index,
            // Button focus keeps the end of the list visible.
            _ => self.entries.len().saturating_sub(1),
        };

        if visible_rows == 0 || self.entries.len() <= visible_rows {
            0
        } else if focused_index < visible_rows {
            0
        } else {
            (focused_index + 1 - visible_rows).min(self.entries.len() - visible_rows)
        }
    }
}

impl Widget for GradeFormWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let outer_block = Block::default()
            .title(" GradePoint GPA Calculator ")
            .borders(Borders::ALL)
            .border_style(self.theme.border)
            .title_style(self.theme.title);

        let inner_area = outer_block.inner(area);
        outer_block.render(area, buf);

        if inner_area.width < MIN_INNER_WIDTH || inner_area.height < MIN_INNER_HEIGHT {
            let message = Paragraph::new("Window too small").style(self.theme.text_muted);
            message.render(inner_area, buf);
            return;
        }

        // Layout: rows area, spacer, button line.
        let chunks = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

        let rows_area = chunks[0];
        let visible_rows = rows_area.height as usize;

        let lines: Vec<Line> = if self.entries.is_empty() {
            vec![Line::styled(
                format!(
                    "{} No rows. Press Ctrl+A or use Add Row.",
                    self.symbols.bullet
                ),
                self.theme.text_secondary,
            )]
        } else {
            let offset = self.scroll_offset(visible_rows);
            self.entries
                .iter()
                .enumerate()
                .skip(offset)
                .take(visible_rows)
                .map(|(index, entry)| self.row_line(index, entry))
                .collect()
        };

        Paragraph::new(lines).render(rows_area, buf);
        Paragraph::new(self.button_line()).render(chunks[2], buf);
    }
}
