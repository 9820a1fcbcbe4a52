//! # Application State
//!
//! Client-side state for the game terminal. Presentation state (cursor,
//! scroll offsets, overlays) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn GameBackend>      // where requests go
//! ├── game_state: Option<GameState>      // last applied snapshot
//! ├── query: String                      // editor text
//! ├── in_flight: BTreeMap<u64, Kind>     // requests awaiting a reply
//! ├── next_seq / last_applied_seq        // response ordering
//! ├── load_finished: bool                // initial fetch resolved
//! ├── transport_error: Option<String>    // last communication failure
//! ├── status_message: String             // title bar text
//! └── last_synced: Option<DateTime>      // time of last applied snapshot
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::api::{GameBackend, GameState};

/// Which endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    LoadState,
    SubmitQuery,
    NextMission,
    ResetProgress,
}

impl RequestKind {
    pub fn label(&self) -> &'static str {
        match self {
            RequestKind::LoadState => "load state",
            RequestKind::SubmitQuery => "submit query",
            RequestKind::NextMission => "next mission",
            RequestKind::ResetProgress => "reset progress",
        }
    }
}

/// A request ready to be sent, with everything the backend call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    LoadState,
    SubmitQuery(String),
    NextMission,
    ResetProgress,
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::LoadState => RequestKind::LoadState,
            Request::SubmitQuery(_) => RequestKind::SubmitQuery,
            Request::NextMission => RequestKind::NextMission,
            Request::ResetProgress => RequestKind::ResetProgress,
        }
    }
}

pub struct App {
    pub backend: Arc<dyn GameBackend>,
    /// Last snapshot applied. `None` until the first successful load.
    pub game_state: Option<GameState>,
    /// Editor contents. Mirrors `last_query` until the player edits it.
    pub query: String,
    /// Sequence numbers of requests that have not resolved yet.
    pub in_flight: BTreeMap<u64, RequestKind>,
    pub next_seq: u64,
    /// Sequence number of the snapshot currently in `game_state` (0 = none).
    pub last_applied_seq: u64,
    /// True once the initial state fetch resolved, successfully or not.
    pub load_finished: bool,
    pub transport_error: Option<String>,
    pub status_message: String,
    pub last_synced: Option<DateTime<Local>>,
    /// Backend origin, shown in the title bar.
    pub server_label: String,
}

impl App {
    pub fn new(backend: Arc<dyn GameBackend>, server_label: String) -> Self {
        Self {
            backend,
            game_state: None,
            query: String::new(),
            in_flight: BTreeMap::new(),
            next_seq: 1,
            last_applied_seq: 0,
            load_finished: false,
            transport_error: None,
            status_message: String::from("Conectando..."),
            last_synced: None,
            server_label,
        }
    }

    /// True while any request is waiting for a reply.
    pub fn is_busy(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn is_pending(&self, kind: RequestKind) -> bool {
        self.in_flight.values().any(|k| *k == kind)
    }

    /// Registers a new in-flight request and returns its sequence number.
    pub(crate) fn track(&mut self, kind: RequestKind) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight.insert(seq, kind);
        seq
    }

    /// Whether a snapshot with a mission has been applied.
    pub fn has_mission(&self) -> bool {
        self.game_state
            .as_ref()
            .is_some_and(|s| s.mission.is_some())
    }

    /// Whether the current snapshot shows a completed mission.
    pub fn mission_completed(&self) -> bool {
        self.game_state
            .as_ref()
            .is_some_and(|s| s.mission.is_some() && s.mission_completed_show_results)
    }

    /// Whether the query console is on screen.
    pub fn accepts_queries(&self) -> bool {
        self.game_state
            .as_ref()
            .is_some_and(|s| s.mission.is_some() && !s.mission_completed_show_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{active_state, completed_state, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.game_state.is_none());
        assert!(app.query.is_empty());
        assert!(!app.is_busy());
        assert!(!app.load_finished);
        assert_eq!(app.status_message, "Conectando...");
    }

    #[test]
    fn test_track_assigns_increasing_sequence_numbers() {
        let mut app = test_app();
        let first = app.track(RequestKind::LoadState);
        let second = app.track(RequestKind::SubmitQuery);
        assert!(second > first);
        assert!(app.is_busy());
        assert!(app.is_pending(RequestKind::SubmitQuery));
        assert!(!app.is_pending(RequestKind::ResetProgress));
    }

    #[test]
    fn test_mode_predicates() {
        let mut app = test_app();
        assert!(!app.has_mission());
        assert!(!app.accepts_queries());
        assert!(!app.mission_completed());

        app.game_state = Some(GameState::default());
        assert!(!app.has_mission());

        app.game_state = Some(active_state());
        assert!(app.has_mission());
        assert!(app.accepts_queries());
        assert!(!app.mission_completed());

        app.game_state = Some(completed_state());
        assert!(!app.accepts_queries());
        assert!(app.mission_completed());
    }

    #[test]
    fn test_request_kind() {
        assert_eq!(
            Request::SubmitQuery("SELECT 1".to_string()).kind(),
            RequestKind::SubmitQuery
        );
        assert_eq!(Request::ResetProgress.kind().label(), "reset progress");
    }
}
