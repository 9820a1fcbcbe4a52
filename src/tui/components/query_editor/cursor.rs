//! Cursor tracking for the query editor.
//!
//! `CursorState` owns the byte offset, the internal scroll offset and the
//! last rendered width. The text itself stays in `QueryEditor`; every method
//! takes it as `buffer: &str`.

use super::text_wrap::{
    BORDER_OFFSET, MAX_VISIBLE_LINES, inner_width, wrap_line_count, wrap_options,
};
use ratatui::layout::Rect;

pub(super) struct CursorState {
    /// Byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible wrapped line
    pub scroll_offset: u16,
    /// Outer width at last render, used for vertical movement
    pub last_content_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Put the cursor at the end of `buffer` (after the text was replaced).
    pub fn move_to_end(&mut self, buffer: &str) {
        self.pos = buffer.len();
        self.scroll_offset = 0;
    }

    /// Move one wrapped line up (`direction < 0`) or down, keeping the column.
    ///
    /// Returns `false` when already on the first/last line.
    pub fn move_vertically(&mut self, buffer: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 || buffer.is_empty() {
            return false;
        }

        let lines = textwrap::wrap(buffer, wrap_options(width));
        if lines.is_empty() {
            return false;
        }

        // Bytes a wrapped line spans in the buffer, including its newline
        let line_byte_span = |line: &str, offset: usize| -> usize {
            let has_newline = offset + line.len() < buffer.len()
                && buffer.as_bytes()[offset + line.len()] == b'\n';
            line.len() + usize::from(has_newline)
        };

        let mut byte_offset = 0;
        let mut current_line_idx = 0;
        let mut column_in_line = 0;

        for (idx, line) in lines.iter().enumerate() {
            if byte_offset + line.len() >= self.pos {
                current_line_idx = idx;
                column_in_line = self.pos - byte_offset;
                break;
            }
            byte_offset += line_byte_span(line, byte_offset);
        }

        let target_line_idx = if direction < 0 {
            if current_line_idx == 0 {
                return false;
            }
            current_line_idx - 1
        } else {
            if current_line_idx >= lines.len() - 1 {
                return false;
            }
            current_line_idx + 1
        };

        let mut target_line_start = 0;
        for line in lines.iter().take(target_line_idx) {
            target_line_start += line_byte_span(line, target_line_start);
        }

        let target_line = &lines[target_line_idx];
        let mut target_column = column_in_line.min(target_line.len());
        while !target_line.is_char_boundary(target_column) {
            target_column -= 1;
        }
        self.pos = target_line_start + target_column;

        true
    }

    /// Wrapped line (0-based) holding the cursor.
    pub fn calculate_line(&self, buffer: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }

        let text_before_cursor = &buffer[..self.pos];
        let lines = textwrap::wrap(text_before_cursor, wrap_options(width));
        let mut cursor_line = lines.len().saturating_sub(1) as u16;

        // Cursor right after a newline textwrap didn't represent
        if self.pos > 0
            && buffer.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            cursor_line += 1;
        }

        cursor_line
    }

    /// Scroll just enough to keep the cursor line visible.
    pub fn update_scroll_offset(&mut self, buffer: &str, content_width: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(buffer, content_width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line.saturating_sub(MAX_VISIBLE_LINES - 1);
        }
    }

    /// Screen (column, row) of the cursor inside `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + BORDER_OFFSET, area.y + BORDER_OFFSET);
        }

        let options = wrap_options(width);
        let text_before_cursor = &buffer[..self.pos];
        let cursor_line = self.calculate_line(buffer, area.width);

        // Column counted from the last newline: textwrap trims trailing
        // spaces, so wrapped line lengths can't be used directly.
        let last_newline = text_before_cursor
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
        let logical_line_to_cursor = &text_before_cursor[last_newline..];
        let logical_line_wrapped = textwrap::wrap(logical_line_to_cursor, options);

        let cursor_col = if logical_line_wrapped.is_empty() {
            0
        } else {
            let chars_in_prev_segments: usize = logical_line_wrapped
                .iter()
                .take(logical_line_wrapped.len() - 1)
                .map(|seg| seg.chars().count())
                .sum();

            let total_chars = logical_line_to_cursor.chars().count();
            total_chars.saturating_sub(chars_in_prev_segments) as u16
        };

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);

        (
            area.x + BORDER_OFFSET + cursor_col,
            area.y + BORDER_OFFSET + visible_line,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_to_end() {
        let mut cursor = CursorState::new();
        cursor.scroll_offset = 3;
        cursor.move_to_end("SELECT 1");
        assert_eq!(cursor.pos, 8);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let sql = "SELECT id\nFROM leaks";
        let mut cursor = CursorState::new();
        cursor.pos = 3; // "SEL|ECT"

        assert!(cursor.move_vertically(sql, 1, 80));
        assert_eq!(cursor.pos, 13); // "FRO|M"

        assert!(cursor.move_vertically(sql, -1, 80));
        assert_eq!(cursor.pos, 3);

        assert!(!cursor.move_vertically(sql, -1, 80));
    }

    #[test]
    fn test_vertical_movement_clamps_to_shorter_line() {
        let sql = "SELECT nombre\nFROM x";
        let mut cursor = CursorState::new();
        cursor.pos = 13; // end of first line

        assert!(cursor.move_vertically(sql, 1, 80));
        assert_eq!(cursor.pos, sql.len());
    }

    #[test]
    fn test_screen_pos_after_newline() {
        let sql = "SELECT *\n";
        let mut cursor = CursorState::new();
        cursor.pos = sql.len();
        let area = Rect::new(0, 10, 40, 6);
        assert_eq!(cursor.screen_pos(sql, area), (1, 12));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let sql = (0..12).map(|i| format!("-- linea {i}")).collect::<Vec<_>>().join("\n");
        let mut cursor = CursorState::new();
        cursor.move_to_end(&sql);
        cursor.update_scroll_offset(&sql, 80);
        assert_eq!(cursor.scroll_offset, 12 - MAX_VISIBLE_LINES);

        cursor.pos = 0;
        cursor.update_scroll_offset(&sql, 80);
        assert_eq!(cursor.scroll_offset, 0);
    }
}
