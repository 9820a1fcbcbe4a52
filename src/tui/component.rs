use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may hold internal
/// state, and render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so stateful components (the query editor, the
/// mission body) can update scroll offsets and cached widths while drawing.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

/// A panel stacked inside the scrollable mission body.
///
/// Sections draw into a plain `Buffer` rather than a `Frame` because the
/// body is rendered into a scroll view's off-screen buffer.
pub trait Section {
    /// Rows needed to draw the section at the given width, borders included.
    fn height(&self, width: u16) -> u16;

    fn draw(&self, area: Rect, buf: &mut Buffer);
}
