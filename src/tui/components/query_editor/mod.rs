//! # QueryEditor Component
//!
//! Multi-line SQL console shown while a mission is active.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing, paste, newlines via Ctrl+J)
//! - Handle editing (backspace, delete, cursor and word movement)
//! - Emit `Submit` on Enter, unless a request is in flight
//!
//! ## State Management
//!
//! The buffer mirrors `App::query`, which is the source of truth. Edits are
//! reported upward as `ContentChanged` and the event loop copies the buffer
//! into the app; when a response replaces the query, [`QueryEditor::sync`]
//! copies it back. `busy` is a prop.
//!
//! The editor never validates: an empty query is submitted like any other,
//! and submitting does not clear the buffer.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, next_word_boundary,
    prev_char_boundary, prev_word_boundary, wrap_line_count, wrap_options,
};

const TITLE: &str = " ENTRADA DE CONSULTA SQL ";
const SUBMIT_HINT: &str = " Enter EJECUTAR CONSULTA · Ctrl+J nueva línea ";
const BUSY_HINT: &str = " PROCESANDO... ";
const PLACEHOLDER: &str = "Escriba su consulta SQL aquí...";

/// High-level events emitted by the QueryEditor
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Player asked to run the current buffer
    Submit,
    /// Buffer or cursor changed
    ContentChanged,
}

pub struct QueryEditor {
    /// Text buffer, mirrored from `App::query`
    pub buffer: String,
    /// Request in flight: submit disabled (Prop)
    pub busy: bool,
    cursor: CursorState,
}

impl QueryEditor {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            busy: false,
            cursor: CursorState::new(),
        }
    }

    /// Replace the buffer when the app's query differs from it.
    /// Returns true if the text was replaced.
    pub fn sync(&mut self, query: &str) -> bool {
        if self.buffer == query {
            return false;
        }
        self.buffer = query.to_string();
        self.cursor.move_to_end(&self.buffer);
        true
    }

    /// Height for the current buffer, clamped to the visible line limit.
    pub fn calculate_height(&self, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        let content_lines = wrap_line_count(&self.buffer, width);
        content_lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Wrapped lines currently inside the viewport.
    fn visible_text(&self, content_width: u16) -> String {
        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(&self.buffer, wrap_options(width));
        let start = (self.cursor.scroll_offset as usize).min(lines.len());
        let end = (start + MAX_VISIBLE_LINES as usize).min(lines.len());

        lines[start..end].join("\n")
    }

    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let width = inner_width(area.width);
        let total_lines = wrap_line_count(&self.buffer, width);

        if total_lines <= MAX_VISIBLE_LINES {
            return;
        }

        // content_length is the max scroll position, not the line count
        let max_scroll = total_lines.saturating_sub(MAX_VISIBLE_LINES);

        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll as usize)
            .position(self.cursor.scroll_offset as usize);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl Default for QueryEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for QueryEditor {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.last_content_width = area.width;
        self.cursor.update_scroll_offset(&self.buffer, area.width);

        let (hint, hint_style) = if self.busy {
            (BUSY_HINT, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            (SUBMIT_HINT, Style::default().fg(Color::DarkGray))
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .title(TITLE)
            .title_bottom(ratatui::text::Line::styled(hint, hint_style).right_aligned());

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            let style = if self.busy {
                Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
            } else {
                Style::default().fg(Color::Green)
            };
            Paragraph::new(self.visible_text(area.width)).style(style)
        };

        frame.render_widget(paragraph.block(block), area);
        self.render_scrollbar(frame, area);

        if !self.busy {
            frame.set_cursor_position(self.cursor.screen_pos(&self.buffer, area));
        }
    }
}

impl EventHandler for QueryEditor {
    type Event = EditorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        // The form is disabled while a request is in flight
        if self.busy {
            return None;
        }

        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(EditorEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Normalize CRLF from Windows clipboards
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.buffer.insert_str(self.cursor.pos, &text);
                self.cursor.pos += text.len();
                Some(EditorEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor.pos > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                EditorEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor.pos < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                EditorEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                EditorEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                EditorEvent::ContentChanged
            }),
            TuiEvent::WordLeft => {
                let target = prev_word_boundary(&self.buffer, self.cursor.pos);
                (target != self.cursor.pos).then(|| {
                    self.cursor.pos = target;
                    EditorEvent::ContentChanged
                })
            }
            TuiEvent::WordRight => {
                let target = next_word_boundary(&self.buffer, self.cursor.pos);
                (target != self.cursor.pos).then(|| {
                    self.cursor.pos = target;
                    EditorEvent::ContentChanged
                })
            }
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    EditorEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    EditorEvent::ContentChanged
                })
            }
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.buffer, -1, self.cursor.last_content_width)
                .then_some(EditorEvent::ContentChanged),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.buffer, 1, self.cursor.last_content_width)
                .then_some(EditorEvent::ContentChanged),
            TuiEvent::Submit => Some(EditorEvent::Submit),
            _ => None,
        }
    }
}
