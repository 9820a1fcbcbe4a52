//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event routing
//!
//! 1. Ctrl+C / Ctrl+Q quit from anywhere.
//! 2. While the reset confirmation is open it receives every other event.
//! 3. Scroll events go to the mission body.
//! 4. Ctrl+R opens the confirmation (mission screen only), Ctrl+N (or Enter
//!    on a solved mission) advances.
//! 5. Everything else goes to the query editor.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (initial load, request in flight): draws every ~80ms so
//!   the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resizes or
//!   backend responses.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::api::{GameBackend, GameClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Request};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ConfirmDialog, ConfirmEvent, EditorEvent, MissionBodyState, QueryEditor,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    pub editor: QueryEditor,
    pub body: MissionBodyState,
    /// Reset confirmation overlay (None = hidden)
    pub confirm_reset: Option<ConfirmDialog>,
    /// Mission shown last frame, to reset the scroll when it changes
    pub shown_mission: Option<i64>,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            editor: QueryEditor::new(),
            body: MissionBodyState::new(),
            confirm_reset: None,
            shown_mission: None,
        }
    }

    /// Bring presentation state in line with the app after an update.
    pub fn sync(&mut self, app: &App) {
        self.editor.sync(&app.query);
        self.editor.busy = app.is_busy();

        let mission_id = app
            .game_state
            .as_ref()
            .and_then(|s| s.mission.as_ref())
            .map(|m| m.id);
        if mission_id != self.shown_mission {
            self.body.scroll_to_top();
            self.shown_mission = mission_id;
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Enter through; terminals without
        // support ignore it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// What the event loop should do after routing one terminal event.
enum Routed {
    Dispatch(Action),
    Handled,
    Quit,
}

/// Route one terminal event through the overlay, body and editor.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Routed {
    if matches!(event, TuiEvent::ForceQuit) {
        return Routed::Quit;
    }

    if let Some(dialog) = tui.confirm_reset.as_mut() {
        return match dialog.handle_event(event) {
            Some(ConfirmEvent::Confirm) => {
                tui.confirm_reset = None;
                Routed::Dispatch(Action::ResetProgress)
            }
            Some(ConfirmEvent::Cancel) => {
                debug!("Reset declined");
                tui.confirm_reset = None;
                Routed::Handled
            }
            None => Routed::Handled,
        };
    }

    match event {
        TuiEvent::Resize => Routed::Handled,
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.body.handle_event(event);
            Routed::Handled
        }
        // The placeholder screens offer no recovery
        TuiEvent::RequestReset if !app.has_mission() => Routed::Handled,
        TuiEvent::RequestReset => {
            tui.confirm_reset = Some(ConfirmDialog);
            Routed::Handled
        }
        TuiEvent::NextMission => Routed::Dispatch(Action::NextMission),
        TuiEvent::Submit if app.mission_completed() => Routed::Dispatch(Action::NextMission),
        _ if !app.accepts_queries() => Routed::Handled,
        _ => match tui.editor.handle_event(event) {
            Some(EditorEvent::Submit) => Routed::Dispatch(Action::SubmitQuery),
            Some(EditorEvent::ContentChanged) => {
                Routed::Dispatch(Action::QueryEdited(tui.editor.buffer.clone()))
            }
            None => Routed::Handled,
        },
    }
}

/// First action of a session: a single state fetch, before any other call.
fn startup(app: &mut App) -> Effect {
    info!("Requesting initial game state from {}", app.server_label);
    update(app, Action::LoadState)
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = GameClient::new(&config.base_url).map_err(std::io::Error::other)?;
    let mut app = App::new(Arc::new(client), config.base_url.clone());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for responses from background requests
    let (tx, rx) = mpsc::channel();

    if let Effect::Request { seq, request } = startup(&mut app) {
        spawn_request(&app, seq, request, tx.clone());
    }

    let start_time = Instant::now();
    let mut needs_redraw = true;

    'event_loop: loop {
        let animating = app.is_busy();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match route_event(&app, &mut tui, &event) {
                Routed::Dispatch(action) => action,
                Routed::Handled => continue,
                Routed::Quit => Action::Quit,
            };
            match update(&mut app, action) {
                Effect::Quit => break 'event_loop,
                Effect::Request { seq, request } => {
                    spawn_request(&app, seq, request, tx.clone());
                }
                Effect::None => {}
            }
            tui.sync(&app);
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if let Effect::Request { seq, request } = update(&mut app, action) {
                spawn_request(&app, seq, request, tx.clone());
            }
            tui.sync(&app);
        }
    }

    info!("Shutting down ({} request(s) still in flight)", app.in_flight.len());
    ratatui::restore();
    Ok(())
}

fn spawn_request(app: &App, seq: u64, request: Request, tx: mpsc::Sender<Action>) {
    info!("Spawning {} request (seq={})", request.kind().label(), seq);
    let backend: Arc<dyn GameBackend> = app.backend.clone();

    tokio::spawn(async move {
        let result = match &request {
            Request::LoadState => backend.game_state().await,
            Request::SubmitQuery(sql) => backend.submit_query(sql).await,
            Request::NextMission => backend.next_mission().await,
            Request::ResetProgress => backend.reset_progress().await,
        };
        if tx.send(Action::Response { seq, result }).is_err() {
            warn!("Failed to deliver response seq={}: receiver dropped", seq);
        }
    });
}
