//! # TitleBar Component
//!
//! Top line of the terminal: unit name, connection status, backend origin
//! and the time of the last applied snapshot.
//!
//! Stateless: every field is a prop filled in by `ui::draw_ui` each frame.
//! Heading and status always render; the origin and then the sync time are
//! dropped when the row is too narrow to hold them.
//!
//! ```text
//! TERMINAL DE ANALISTA - UNIDAD DE ESCRUTINIO INFORMATIVO | ⠹ PROCESANDO... | http://localhost:5001/api | 18:04:12
//! ```

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub const HEADING: &str = "TERMINAL DE ANALISTA - UNIDAD DE ESCRUTINIO INFORMATIVO";

pub(crate) const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const SEPARATOR: &str = " | ";

pub struct TitleBar<'a> {
    pub status_message: &'a str,
    pub server_label: &'a str,
    pub busy: bool,
    pub spinner_frame: usize,
    pub last_synced: Option<DateTime<Local>>,
}

impl TitleBar<'_> {
    fn status_text(&self) -> String {
        if self.busy {
            format!(
                "{} {}",
                SPINNER[self.spinner_frame % SPINNER.len()],
                self.status_message
            )
        } else {
            self.status_message.to_string()
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let separator = Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray));
        let dim = Style::default().fg(Color::DarkGray);
        let status_style = if self.busy {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Green)
        };

        let status = self.status_text();
        let mut used = HEADING.width() + SEPARATOR.width() + status.width();
        let mut spans = vec![
            Span::styled(
                HEADING,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::styled(status, status_style),
        ];

        let synced = self.last_synced.map(|t| t.format("%H:%M:%S").to_string());
        for extra in [Some(self.server_label.to_string()), synced]
            .into_iter()
            .flatten()
        {
            let needed = SEPARATOR.width() + extra.width();
            if used + needed > area.width as usize {
                continue;
            }
            used += needed;
            spans.push(separator.clone());
            spans.push(Span::styled(extra, dim));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
