//! # TUI Components
//!
//! All widgets of the analyst terminal.
//!
//! ## Component Architecture
//!
//! Components in this directory follow three patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields and render to a `Frame`:
//! - `TitleBar`: heading, connection status and backend origin
//! - `Footer`: key hints and the monitoring notice
//! - `Placeholder`: loading spinner or critical error screen
//! - `ConfirmDialog`: reset confirmation overlay
//!
//! ### Sections (Scroll Body Panels)
//!
//! Panels stacked by `MissionBody` inside a scroll view. They implement
//! [`Section`](crate::tui::component::Section) so the body can measure them
//! before drawing into the off-screen buffer:
//! - `FlashList`, `Briefing`, `ProceedPanel`, `ErrorPanel`, `ResultsTable`,
//!   `Findings`
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and emit events:
//! - `QueryEditor`: multi-line SQL input
//! - `MissionBodyState`: scroll position of the mission body
//!
//! ## Props-Based Data Flow
//!
//! Components receive data as "props" (struct fields) filled from the
//! `core::view::MissionView` each frame. None of them reads `App` directly.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top status line)
//! ├── flash_list.rs      (flash notifications)
//! ├── briefing.rs        (coordinator message)
//! ├── proceed_panel.rs   (continue to next directive)
//! ├── error_panel.rs     (query / system error)
//! ├── results_table.rs   (query result grid)
//! ├── findings.rs        (archived findings)
//! ├── mission_body.rs    (scroll view stacking the sections)
//! ├── placeholder.rs     (loading / critical error)
//! ├── footer.rs          (key hints)
//! ├── confirm_dialog.rs  (reset overlay)
//! └── query_editor/      (SQL console)
//! ```

mod briefing;
mod confirm_dialog;
mod error_panel;
mod findings;
mod flash_list;
mod footer;
pub mod mission_body;
mod placeholder;
mod proceed_panel;
pub mod query_editor;
mod results_table;
mod title_bar;

pub use briefing::Briefing;
pub use confirm_dialog::{ConfirmDialog, ConfirmEvent};
pub use error_panel::ErrorPanel;
pub use findings::Findings;
pub use flash_list::FlashList;
pub use footer::Footer;
pub use mission_body::{MissionBody, MissionBodyState};
pub use placeholder::Placeholder;
pub use proceed_panel::ProceedPanel;
pub use query_editor::{EditorEvent, QueryEditor};
pub use results_table::ResultsTable;
pub use title_bar::TitleBar;

use ratatui::layout::{Constraint, Layout, Rect};

/// Rect of `percent_x` × `percent_y` centered in `outer`.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// Draw a section at its natural height and return the buffer as one string.
#[cfg(test)]
pub(crate) fn section_text(section: &dyn crate::tui::component::Section, width: u16) -> String {
    use ratatui::buffer::Buffer;

    let height = section.height(width);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    section.draw(area, &mut buf);
    buf.content().iter().map(|cell| cell.symbol()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_outer() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 10);
    }
}
