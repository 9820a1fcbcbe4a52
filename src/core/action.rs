//! # Actions
//!
//! Everything that can happen in the terminal becomes an `Action`.
//! Player presses Enter? That's `Action::SubmitQuery`.
//! Backend answers? That's `Action::Response { .. }`.
//!
//! `update()` takes the current state and an action, mutates the state and
//! returns an [`Effect`] telling the adapter what I/O to perform. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Response ordering
//!
//! Every request gets a sequence number when it is issued. A successful
//! response replaces the snapshot only if its number is higher than the one
//! already applied, so a slow reply can never overwrite a newer one.

use chrono::Local;
use log::{debug, info, warn};

use crate::api::{ApiError, GameState};
use crate::core::state::{App, Request, RequestKind};

#[derive(Debug)]
pub enum Action {
    /// Fetch the current snapshot (issued once on start).
    LoadState,
    /// Editor contents changed.
    QueryEdited(String),
    /// Send the editor contents as a query.
    SubmitQuery,
    /// Move on after a completed mission.
    NextMission,
    /// Wipe all progress. Only dispatched after the player confirmed.
    ResetProgress,
    /// A request finished.
    Response {
        seq: u64,
        result: Result<GameState, ApiError>,
    },
    Quit,
}

/// Side effect requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send `request` to the backend and report back with `seq`.
    Request { seq: u64, request: Request },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::LoadState => begin(app, Request::LoadState),
        Action::QueryEdited(text) => {
            app.query = text;
            Effect::None
        }
        Action::SubmitQuery => {
            if !app.accepts_queries() {
                debug!("Ignoring submit: query console not active");
                return Effect::None;
            }
            if app.is_busy() {
                debug!("Ignoring submit: request already in flight");
                return Effect::None;
            }
            let query = app.query.clone();
            begin(app, Request::SubmitQuery(query))
        }
        Action::NextMission => {
            if !app.mission_completed() {
                debug!("Ignoring next mission: current mission not completed");
                return Effect::None;
            }
            if app.is_pending(RequestKind::NextMission) {
                debug!("Ignoring next mission: already in flight");
                return Effect::None;
            }
            begin(app, Request::NextMission)
        }
        Action::ResetProgress => {
            if !app.has_mission() {
                debug!("Ignoring reset: no mission on screen");
                return Effect::None;
            }
            if app.is_pending(RequestKind::ResetProgress) {
                debug!("Ignoring reset: already in flight");
                return Effect::None;
            }
            begin(app, Request::ResetProgress)
        }
        Action::Response { seq, result } => {
            resolve(app, seq, result);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn begin(app: &mut App, request: Request) -> Effect {
    let seq = app.track(request.kind());
    info!("Issuing {} (seq={})", request.kind().label(), seq);
    app.status_message = String::from("PROCESANDO...");
    Effect::Request { seq, request }
}

fn resolve(app: &mut App, seq: u64, result: Result<GameState, ApiError>) {
    let Some(kind) = app.in_flight.remove(&seq) else {
        warn!("Response for unknown request seq={}", seq);
        return;
    };
    if kind == RequestKind::LoadState {
        app.load_finished = true;
    }

    match result {
        Ok(state) => {
            if seq <= app.last_applied_seq {
                info!(
                    "Discarding stale {} response (seq={}, applied={})",
                    kind.label(),
                    seq,
                    app.last_applied_seq
                );
                return;
            }
            app.query = match kind {
                RequestKind::LoadState | RequestKind::SubmitQuery => state.last_query.clone(),
                RequestKind::NextMission | RequestKind::ResetProgress => String::new(),
            };
            debug!(
                "Applying {} snapshot (seq={}, flashes={}, error={})",
                kind.label(),
                seq,
                state.flash_messages.len(),
                state.error.is_some()
            );
            app.game_state = Some(state);
            app.last_applied_seq = seq;
            app.transport_error = None;
            app.last_synced = Some(Local::now());
            app.status_message = String::from("EN LÍNEA");
        }
        Err(e) => {
            if seq < app.last_applied_seq {
                info!(
                    "Discarding stale {} failure (seq={}, applied={}): {}",
                    kind.label(),
                    seq,
                    app.last_applied_seq,
                    e
                );
                return;
            }
            warn!("Error during {} (seq={}): {}", kind.label(), seq, e);
            app.transport_error = Some(e.to_string());
            app.status_message = String::from("SIN CONEXIÓN");
        }
    }
}
