//! # MissionBody Component
//!
//! Scrollable column of mission panels (flashes, briefing, console or
//! results, findings).
//!
//! ## Architecture
//!
//! `MissionBody` is a transient component created each frame with the
//! sections to draw (props) and a `&'a mut MissionBodyState` (persistent
//! scroll state). Sections are measured at the current width, stacked with a
//! one-row gap and drawn into a `ScrollView`. Zero-height sections are skipped.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::Widget;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler, Section};
use crate::tui::event::TuiEvent;

const SECTION_GAP: u16 = 1;

/// Scroll state for the mission body.
/// Must be persisted in the parent TuiState.
pub struct MissionBodyState {
    pub scroll_state: ScrollViewState,
    /// Stacked height of the sections at the last render
    pub content_height: u16,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for MissionBodyState {
    fn default() -> Self {
        Self::new()
    }
}

impl MissionBodyState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            content_height: 0,
            viewport_height: 0,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Back to the top, e.g. when a different mission is shown.
    pub fn scroll_to_top(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for MissionBodyState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
            }
            _ => {}
        }
        None
    }
}

/// Adapts a `Section` to ratatui's `Widget` for the scroll view.
struct SectionWidget<'a>(&'a dyn Section);

impl Widget for SectionWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.0.draw(area, buf);
    }
}

pub struct MissionBody<'a> {
    pub state: &'a mut MissionBodyState,
    pub sections: Vec<Box<dyn Section + 'a>>,
}

impl MissionBody<'_> {
    /// Heights of the sections at `width`, zero for hidden ones.
    fn heights(&self, width: u16) -> Vec<u16> {
        self.sections.iter().map(|s| s.height(width)).collect()
    }

    fn stacked_height(heights: &[u16]) -> u16 {
        let visible = heights.iter().filter(|h| **h > 0).count() as u16;
        let gaps = visible.saturating_sub(1) * SECTION_GAP;
        heights
            .iter()
            .fold(gaps, |total, h| total.saturating_add(*h))
    }
}

impl Component for MissionBody<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let heights = self.heights(content_width);
        let total_height = Self::stacked_height(&heights);

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (section, height) in self.sections.iter().zip(heights) {
            if height == 0 {
                continue;
            }
            let section_rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(SectionWidget(section.as_ref()), section_rect);
            y_offset = y_offset.saturating_add(height + SECTION_GAP);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    struct Fixed(u16, &'static str);

    impl Section for Fixed {
        fn height(&self, _width: u16) -> u16 {
            self.0
        }

        fn draw(&self, area: Rect, buf: &mut Buffer) {
            buf.set_string(area.x, area.y, self.1, ratatui::style::Style::default());
        }
    }

    fn body_sections() -> Vec<Box<dyn Section>> {
        vec![
            Box::new(Fixed(2, "primero")),
            Box::new(Fixed(0, "oculto")),
            Box::new(Fixed(3, "segundo")),
        ]
    }

    #[test]
    fn test_hidden_sections_take_no_space() {
        let mut state = MissionBodyState::new();
        let body = MissionBody {
            state: &mut state,
            sections: body_sections(),
        };
        let heights = body.heights(40);
        assert_eq!(MissionBody::stacked_height(&heights), 2 + 1 + 3);
    }

    #[test]
    fn test_render_stacks_sections() {
        let mut state = MissionBodyState::new();
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                MissionBody {
                    state: &mut state,
                    sections: body_sections(),
                }
                .render(f, f.area())
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..40)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(0).starts_with("primero"));
        assert!(row(3).starts_with("segundo"));
        assert!(!(0..10).any(|y| row(y).contains("oculto")));
        assert_eq!(state.content_height, 6);
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut state = MissionBodyState::new();
        state.content_height = 12;
        state.viewport_height = 10;
        state.scroll_state.set_offset(Position { x: 0, y: 50 });
        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.scroll_state.offset().y, 2);

        state.scroll_to_top();
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
