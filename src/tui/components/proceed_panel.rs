//! Shown instead of the SQL console once the current directive is solved.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget, Wrap};

use crate::tui::component::Section;

pub const LABEL: &str = "CONTINUAR A LA SIGUIENTE DIRECTIVA";

pub struct ProceedPanel {
    /// Disabled while the advance request is in flight
    pub pending: bool,
}

impl ProceedPanel {
    fn paragraph(&self) -> Paragraph<'static> {
        let (label_style, hint) = if self.pending {
            (
                Style::default().fg(Color::DarkGray),
                Span::styled("PROCESANDO...", Style::default().fg(Color::Yellow)),
            )
        } else {
            (
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Span::styled("[Enter] o [Ctrl+N]", Style::default().fg(Color::DarkGray)),
            )
        };

        Paragraph::new(vec![
            Line::from(Span::styled(format!(" {LABEL} "), label_style)),
            Line::from(hint),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true })
    }
}

impl Section for ProceedPanel {
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
    fn test_idle_panel_shows_key_hint() {
        let panel = ProceedPanel { pending: false };
        assert_eq!(panel.height(80), 4);
        let text = section_text(&panel, 80);
        assert!(text.contains(LABEL));
        assert!(text.contains("[Ctrl+N]"));
    }

    #[test]
    fn test_pending_panel() {
        let text = section_text(&ProceedPanel { pending: true }, 80);
        assert!(text.contains(LABEL));
        assert!(text.contains("PROCESANDO..."));
        assert!(!text.contains("[Ctrl+N]"));
    }
}
