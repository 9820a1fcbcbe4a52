//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, GameBackend, GameState, Mission};
use crate::core::state::App;

/// A backend for tests that never expect a real call.
pub struct NoopBackend;

#[async_trait]
impl GameBackend for NoopBackend {
    async fn game_state(&self) -> Result<GameState, ApiError> {
        Ok(GameState::default())
    }

    async fn submit_query(&self, _sql_query: &str) -> Result<GameState, ApiError> {
        Ok(GameState::default())
    }

    async fn next_mission(&self) -> Result<GameState, ApiError> {
        Ok(GameState::default())
    }

    async fn reset_progress(&self) -> Result<GameState, ApiError> {
        Ok(GameState::default())
    }
}

/// Creates a test App with a NoopBackend and no snapshot.
pub fn test_app() -> App {
    App::new(Arc::new(NoopBackend), "http://test/api".to_string())
}

/// A test App that already applied `state` as its first load.
pub fn loaded_app(state: GameState) -> App {
    let mut app = test_app();
    app.query = state.last_query.clone();
    app.game_state = Some(state);
    app.load_finished = true;
    app
}

pub fn sample_mission() -> Mission {
    Mission {
        id: 1,
        title: "Operación Filtración".to_string(),
        coordinator_message_subject: "Movimientos sospechosos".to_string(),
        coordinator_message_body: "Analista:\nRevise la tabla leaks y encuentre al responsable."
            .to_string(),
    }
}

/// Mission in progress, query console active.
pub fn active_state() -> GameState {
    GameState {
        mission: Some(sample_mission()),
        archived_findings: vec!["El expediente 12 fue alterado.".to_string()],
        ..Default::default()
    }
}

/// Mission just solved, waiting for the player to proceed.
pub fn completed_state() -> GameState {
    GameState {
        mission: Some(sample_mission()),
        last_query: "SELECT * FROM leaks;".to_string(),
        archived_findings: vec!["El expediente 12 fue alterado.".to_string()],
        mission_completed_show_results: true,
        ..Default::default()
    }
}
