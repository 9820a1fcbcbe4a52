//! Full-body placeholder while no mission can be shown: the initial load
//! spinner, or the critical error screen when the load failed.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use super::title_bar::SPINNER;
use crate::tui::component::Component;

pub const LOADING: &str = "Cargando Sistema...";
pub const CRITICAL: &str = "Error crítico del sistema. No se pudo cargar la misión.";

pub enum Placeholder<'a> {
    Loading { spinner_frame: usize },
    /// `detail` is the transport error, if one was recorded
    CriticalError { detail: Option<&'a str> },
}

impl Placeholder<'_> {
    fn lines(&self) -> (Vec<Line<'_>>, Color) {
        match self {
            Placeholder::Loading { spinner_frame } => {
                let spinner = SPINNER[spinner_frame % SPINNER.len()];
                (
                    vec![Line::styled(
                        format!("{spinner} {LOADING}"),
                        Style::default().fg(Color::Green),
                    )],
                    Color::Green,
                )
            }
            Placeholder::CriticalError { detail } => {
                let mut lines = vec![Line::styled(
                    CRITICAL,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )];
                if let Some(detail) = detail {
                    lines.push(Line::raw(""));
                    lines.push(Line::styled(*detail, Style::default().fg(Color::DarkGray)));
                }
                (lines, Color::Red)
            }
        }
    }
}

impl Component for Placeholder<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (lines, accent) = self.lines();
        let paragraph = Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(accent)),
            );

        let width = area.width.min(72);
        let height = (paragraph.line_count(width.saturating_sub(2)) as u16).min(area.height);
        let [_, row, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, boxed, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(row);

        frame.render_widget(paragraph, boxed);
    }
}
