//! Archived findings: facts the player has established so far.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::tui::component::Section;

pub const TITLE: &str = " HALLAZGOS ARCHIVADOS: ";

pub struct Findings<'a> {
    pub items: &'a [String],
}

impl Findings<'_> {
    fn paragraph(&self) -> Paragraph<'_> {
        let lines: Vec<Line> = self
            .items
            .iter()
            .map(|finding| {
                Line::from(vec![
                    Span::styled("» ", Style::default().fg(Color::Yellow)),
                    Span::raw(finding.as_str()),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .style(Style::default().fg(Color::Green))
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(TITLE)
                    .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .wrap(Wrap { trim: false })
    }
}

impl Section for Findings<'_> {
    fn height(&self, width: u16) -> u16 {
        if self.items.is_empty() {
            return 0;
        }
        self.paragraph().line_count(width.saturating_sub(2)) as u16
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        self.paragraph().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::section_text;

    #[test]
    fn test_findings_in_order() {
        let items = vec![
            "El expediente 12 fue alterado.".to_string(),
            "El acceso ocurrió de madrugada.".to_string(),
        ];
        let findings = Findings { items: &items };
        assert_eq!(findings.height(70), 4);

        let text = section_text(&findings, 70);
        assert!(text.contains("HALLAZGOS ARCHIVADOS:"));
        let first = text.find("expediente 12").unwrap();
        let second = text.find("madrugada").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_no_findings_no_panel() {
        assert_eq!(Findings { items: &[] }.height(70), 0);
    }
}
