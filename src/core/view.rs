//! # View Model
//!
//! Decides which panels are on screen. The TUI draws exactly what
//! [`screen`] returns and nothing else, so every visibility rule lives here
//! and can be tested without a terminal.
//!
//! Panel order on the mission screen:
//!
//! ```text
//! flash notifications
//! mission briefing
//! console            (proceed action | query editor)
//! error panel        (query error, active mission only)
//! results table      (both halves present, no error, active mission only)
//! archived findings  (non-empty only)
//! reset action       (always)
//! ```

use crate::api::{FlashMessage, GameState, Mission, Row};
use crate::core::state::App;

pub enum Screen<'a> {
    /// No snapshot yet and the first fetch has not resolved.
    Loading,
    /// The first fetch failed or the snapshot carries no mission.
    CriticalError,
    Mission(MissionView<'a>),
}

/// What occupies the console slot under the briefing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Console {
    /// Mission solved: only the "proceed" action is offered.
    Proceed,
    /// Mission active: query editor, submit disabled while `busy`.
    QueryForm { busy: bool },
}

pub struct MissionView<'a> {
    pub mission: &'a Mission,
    pub completed: bool,
    pub is_final: bool,
    pub flashes: &'a [FlashMessage],
    pub console: Console,
    pub error: Option<&'a str>,
    pub results: Option<(&'a [String], &'a [Row])>,
    pub findings: Option<&'a [String]>,
    /// Last communication failure, shown above everything else.
    pub transport_error: Option<&'a str>,
}

impl MissionView<'_> {
    /// Heading of the briefing panel.
    pub fn briefing_title(&self) -> String {
        if self.completed {
            format!("[DIRECTIVA COMPLETADA: {}]", self.mission.title)
        } else {
            format!("[DIRECTIVA ACTUAL: {}]", self.mission.title)
        }
    }
}

pub fn screen(app: &App) -> Screen<'_> {
    let Some(state) = app.game_state.as_ref() else {
        return if app.load_finished {
            Screen::CriticalError
        } else {
            Screen::Loading
        };
    };
    let Some(mission) = state.mission.as_ref() else {
        return Screen::CriticalError;
    };

    Screen::Mission(mission_view(state, mission, app))
}

fn mission_view<'a>(state: &'a GameState, mission: &'a Mission, app: &'a App) -> MissionView<'a> {
    let completed = state.mission_completed_show_results;
    let error = state.query_error().filter(|_| !completed);
    let results = state
        .result_set()
        .filter(|_| error.is_none() && !completed);

    MissionView {
        mission,
        completed,
        is_final: state.is_final_mission,
        flashes: &state.flash_messages,
        console: if completed {
            Console::Proceed
        } else {
            Console::QueryForm {
                busy: app.is_busy(),
            }
        },
        error,
        results,
        findings: Some(state.archived_findings.as_slice()).filter(|f| !f.is_empty()),
        transport_error: app.transport_error.as_deref(),
    }
}
