//! # ResultsTable Component
//!
//! Grid with the rows returned by the player's last query, in the column
//! order the backend reported.
//!
//! Cells are one line each: embedded newlines are flattened and columns are
//! sized to their widest value, capped at [`MAX_COLUMN_WIDTH`]. Longer values
//! are truncated by the table.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Cell, Paragraph, Row as TableRow, Table, Widget};
use unicode_width::UnicodeWidthStr;

use crate::api::Row;
use crate::api::types::cell_text;
use crate::tui::component::Section;

pub const TITLE: &str = " RESULTADOS DE LA CONSULTA ";
pub const NO_ROWS: &str = "La consulta no devolvió filas.";

pub const MAX_COLUMN_WIDTH: u16 = 40;
const COLUMN_SPACING: u16 = 2;

/// Borders (2) + header (1) + header margin (1)
const VERTICAL_OVERHEAD: u16 = 4;

pub struct ResultsTable<'a> {
    pub columns: &'a [String],
    pub rows: &'a [Row],
}

fn flatten(text: String) -> String {
    if text.contains('\n') {
        text.replace("\r\n", " ").replace('\n', " ")
    } else {
        text
    }
}

impl ResultsTable<'_> {
    fn cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| flatten(cell_text(row, column)))
                    .collect()
            })
            .collect()
    }

    fn column_widths(&self, cells: &[Vec<String>]) -> Vec<u16> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let widest_cell = cells
                    .iter()
                    .map(|row| row[idx].width())
                    .max()
                    .unwrap_or(0);
                (column.width().max(widest_cell) as u16).clamp(1, MAX_COLUMN_WIDTH)
            })
            .collect()
    }

    fn block() -> Block<'static> {
        Block::bordered()
            .border_style(Style::default().fg(Color::Green))
            .title(TITLE)
            .title_style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
    }
}

impl Section for ResultsTable<'_> {
    fn height(&self, _width: u16) -> u16 {
        let body = if self.rows.is_empty() {
            1
        } else {
            self.rows.len().min(u16::MAX as usize) as u16
        };
        body.saturating_add(VERTICAL_OVERHEAD)
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        let cells = self.cells();
        let widths = self.column_widths(&cells);

        let header = TableRow::new(
            self.columns
                .iter()
                .map(|column| Cell::from(column.as_str())),
        )
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

        let rows = cells.into_iter().map(TableRow::new);

        let block = Self::block();
        let inner = block.inner(area);

        Table::new(rows, widths.into_iter().map(Constraint::Length))
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .style(Style::default().fg(Color::Green))
            .block(block)
            .render(area, buf);

        if self.rows.is_empty() && inner.height > 2 {
            let message_area = Rect::new(inner.x, inner.y + 2, inner.width, 1);
            Paragraph::new(Line::styled(NO_ROWS, Style::default().fg(Color::DarkGray)))
                .render(message_area, buf);
        }
    }
}
