//! Mission briefing: the coordinator's message for the current directive.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::api::Mission;
use crate::tui::component::Section;

/// Borders (2) + horizontal padding (2)
const HORIZONTAL_OVERHEAD: u16 = 4;

pub struct Briefing<'a> {
    pub title: String,
    pub mission: &'a Mission,
    pub completed: bool,
    /// Last directive of the evaluation
    pub is_final: bool,
}

impl Briefing<'_> {
    fn paragraph(&self, width: u16) -> Paragraph<'_> {
        let accent = if self.completed { Color::Cyan } else { Color::Green };
        let rule_width = width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;

        let mut lines = Vec::new();
        if self.is_final {
            lines.push(Line::styled(
                "EVALUACIÓN CONCLUIDA",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
        }
        lines.extend([
            Line::from(vec![
                Span::styled("ASUNTO: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(self.mission.coordinator_message_subject.as_str()),
            ]),
            Line::styled("─".repeat(rule_width), Style::default().fg(Color::DarkGray)),
        ]);
        lines.extend(
            self.mission
                .coordinator_message_body
                .lines()
                .map(Line::raw),
        );

        let block = Block::bordered()
            .border_style(Style::default().fg(accent))
            .title(Span::styled(
                self.title.as_str(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ))
            .padding(Padding::horizontal(1));

        Paragraph::new(lines)
            .style(Style::default().fg(Color::Green))
            .block(block)
            .wrap(Wrap { trim: false })
    }
}

impl Section for Briefing<'_> {
    fn height(&self, width: u16) -> u16 {
        self.paragraph(width)
            .line_count(width.saturating_sub(HORIZONTAL_OVERHEAD)) as u16
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        self.paragraph(area.width).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_mission;
    use crate::tui::components::section_text;

    #[test]
    fn test_briefing_shows_title_subject_and_body() {
        let mission = sample_mission();
        let briefing = Briefing {
            title: "[DIRECTIVA ACTUAL: Operación Filtración]".to_string(),
            mission: &mission,
            completed: false,
            is_final: false,
        };
        let text = section_text(&briefing, 70);
        assert!(text.contains("[DIRECTIVA ACTUAL: Operación Filtración]"));
        assert!(text.contains("ASUNTO: Movimientos sospechosos"));
        assert!(text.contains("Revise la tabla leaks"));
    }

    #[test]
    fn test_height_counts_body_lines_and_borders() {
        let mission = sample_mission();
        let briefing = Briefing {
            title: String::new(),
            mission: &mission,
            completed: true,
            is_final: false,
        };
        // subject + rule + 2 body lines + 2 borders
        assert_eq!(briefing.height(100), 6);
    }

    #[test]
    fn test_missing_subject_and_body() {
        let mission = Mission {
            id: -1,
            title: "Error de Sistema".to_string(),
            coordinator_message_subject: String::new(),
            coordinator_message_body: String::new(),
        };
        let briefing = Briefing {
            title: "[DIRECTIVA ACTUAL: Error de Sistema]".to_string(),
            mission: &mission,
            completed: false,
            is_final: false,
        };
        // subject label + rule + 2 borders
        assert_eq!(briefing.height(60), 4);
    }

    #[test]
    fn test_final_directive_marker() {
        let mission = sample_mission();
        let briefing = Briefing {
            title: "[DIRECTIVA COMPLETADA: Operación Filtración]".to_string(),
            mission: &mission,
            completed: true,
            is_final: true,
        };
        let text = section_text(&briefing, 80);
        assert!(text.contains("EVALUACIÓN CONCLUIDA"));
        // marker + subject + rule + 2 body lines + 2 borders
        assert_eq!(briefing.height(100), 7);
    }
}
