use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::tui::component::Section;

pub const TITLE: &str = " ERROR DE SISTEMA / CONSULTA: ";

/// Query or system error reported by the backend for the last submission.
pub struct ErrorPanel<'a> {
    pub message: &'a str,
}

impl ErrorPanel<'_> {
    fn paragraph(&self) -> Paragraph<'_> {
        let red = Style::default().fg(Color::Red);
        Paragraph::new(self.message)
            .style(red)
            .block(
                Block::bordered()
                    .border_style(red)
                    .title(TITLE)
                    .title_style(red.add_modifier(Modifier::BOLD)),
            )
            .wrap(Wrap { trim: false })
    }
}

impl Section for ErrorPanel<'_> {
    fn height(&self, width: u16) -> u16 {
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
    fn test_error_text_verbatim() {
        let panel = ErrorPanel {
            message: "no such table: leakz",
        };
        assert_eq!(panel.height(60), 3);
        let text = section_text(&panel, 60);
        assert!(text.contains("ERROR DE SISTEMA / CONSULTA:"));
        assert!(text.contains("no such table: leakz"));
    }

    #[test]
    fn test_multiline_error() {
        let panel = ErrorPanel {
            message: "near \"SELEC\": syntax error\nLínea 1",
        };
        assert_eq!(panel.height(60), 4);
    }
}
