use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const NOTICE: &str = "Departamento de Control Interno - Todos los accesos son monitoreados.";

/// Two-line footer: key hints, then the monitoring notice.
pub struct Footer {
    /// Reset is only offered while a mission is on screen
    pub show_reset: bool,
    /// A reset request is in flight
    pub reset_pending: bool,
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        if self.show_reset {
            spans.push(Span::styled("[Ctrl+R]", key));
            spans.push(if self.reset_pending {
                Span::styled(" REINICIANDO...", Style::default().fg(Color::Yellow))
            } else {
                Span::styled(" REINICIAR SIMULACIÓN", Style::default().fg(Color::Red))
            });
            spans.push(Span::styled("  ·  ", dim));
        }
        spans.extend([
            Span::styled("[RePág/AvPág]", key),
            Span::styled(" desplazar", dim),
            Span::styled("  ·  ", dim),
            Span::styled("[Ctrl+C]", key),
            Span::styled(" salir", dim),
        ]);
        let hints = Line::from(spans);
        let notice = Line::styled(NOTICE, dim);

        frame.render_widget(Paragraph::new(vec![hints, notice]).centered(), area);
    }
}
