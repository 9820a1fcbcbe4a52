//! # ConfirmDialog Component
//!
//! Modal overlay asking the player to confirm a progress reset.
//!
//! While open it captures every event: `y`/`s`/Enter confirm, `n`/Esc
//! decline, anything else is swallowed.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use super::centered_rect;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PROMPT: &str = "¿Está seguro de que desea reiniciar todo el progreso?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmEvent {
    Confirm,
    Cancel,
}

#[derive(Debug, Default)]
pub struct ConfirmDialog;

impl Component for ConfirmDialog {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut dialog_area = centered_rect(60, 30, area);
        dialog_area.height = dialog_area.height.max(6).min(area.height);

        let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::styled(PROMPT, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[S/Y/Enter]", key),
                Span::raw(" confirmar    "),
                Span::styled("[N/Esc]", key),
                Span::raw(" cancelar"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" REINICIAR SIMULACIÓN ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            );

        frame.render_widget(Clear, dialog_area);
        frame.render_widget(paragraph, dialog_area);
    }
}

impl EventHandler for ConfirmDialog {
    type Event = ConfirmEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit | TuiEvent::InputChar('y' | 'Y' | 's' | 'S') => {
                Some(ConfirmEvent::Confirm)
            }
            TuiEvent::Escape | TuiEvent::InputChar('n' | 'N') => Some(ConfirmEvent::Cancel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_confirm_keys() {
        let mut dialog = ConfirmDialog;
        for event in [
            TuiEvent::Submit,
            TuiEvent::InputChar('y'),
            TuiEvent::InputChar('S'),
        ] {
            assert_eq!(dialog.handle_event(&event), Some(ConfirmEvent::Confirm));
        }
    }

    #[test]
    fn test_cancel_keys() {
        let mut dialog = ConfirmDialog;
        assert_eq!(dialog.handle_event(&TuiEvent::Escape), Some(ConfirmEvent::Cancel));
        assert_eq!(dialog.handle_event(&TuiEvent::InputChar('n')), Some(ConfirmEvent::Cancel));
    }

    #[test]
    fn test_other_keys_swallowed() {
        let mut dialog = ConfirmDialog;
        assert_eq!(dialog.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(dialog.handle_event(&TuiEvent::NextMission), None);
    }

    #[test]
    fn test_render_prompt() {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ConfirmDialog.render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains(PROMPT));
    }
}
