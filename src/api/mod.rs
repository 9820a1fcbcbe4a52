//! # Backend API
//!
//! HTTP access to the game backend. Everything above this module talks to
//! the backend through [`GameBackend`], so the TUI and the tests never touch
//! reqwest directly.

pub mod client;
pub mod types;

use async_trait::async_trait;

pub use client::{ApiError, DEFAULT_BASE_URL, GameClient};
pub use types::{AdminSqlOutcome, FlashCategory, FlashMessage, GameState, Mission, Row};

/// The four game endpoints. Each one answers with a full snapshot.
#[async_trait]
pub trait GameBackend: Send + Sync {
    /// `GET /game_state`
    async fn game_state(&self) -> Result<GameState, ApiError>;

    /// `POST /submit_query` with `{ "sql_query": ... }`
    async fn submit_query(&self, sql_query: &str) -> Result<GameState, ApiError>;

    /// `POST /next_mission`
    async fn next_mission(&self) -> Result<GameState, ApiError>;

    /// `POST /reset_progress`
    async fn reset_progress(&self) -> Result<GameState, ApiError>;
}
