//! Flash notifications, one line group per `(category, message)` pair, in
//! the order the backend sent them.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::api::{FlashCategory, FlashMessage};
use crate::tui::component::Section;

pub struct FlashList<'a> {
    pub flashes: &'a [FlashMessage],
}

fn category_style(category: FlashCategory) -> (&'static str, Style) {
    match category {
        FlashCategory::Success => ("✔", Style::default().fg(Color::Green)),
        FlashCategory::Warning => ("▲", Style::default().fg(Color::Yellow)),
        FlashCategory::Info => ("●", Style::default().fg(Color::Cyan)),
        FlashCategory::Error => ("✖", Style::default().fg(Color::Red)),
        FlashCategory::Other => ("■", Style::default().fg(Color::White)),
    }
}

impl FlashList<'_> {
    fn paragraph(&self) -> Paragraph<'_> {
        let lines: Vec<Line> = self
            .flashes
            .iter()
            .map(|flash| {
                let (marker, style) = category_style(flash.category);
                Line::from(vec![
                    Span::styled(format!("{marker} "), style.add_modifier(Modifier::BOLD)),
                    Span::styled(flash.message.as_str(), style),
                ])
            })
            .collect();
        Paragraph::new(lines).wrap(Wrap { trim: false })
    }
}

impl Section for FlashList<'_> {
    fn height(&self, width: u16) -> u16 {
        if self.flashes.is_empty() {
            return 0;
        }
        self.paragraph().line_count(width) as u16
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        self.paragraph().render(area, buf);
    }
}
