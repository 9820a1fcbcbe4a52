use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::GameBackend;
use super::types::{AdminSqlOutcome, AdminSqlRequest, ErrorBody, GameState, SubmitQueryRequest};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5001/api";

/// Errors that can occur talking to the game backend.
#[derive(Debug)]
pub enum ApiError {
    /// Base URL unusable or the HTTP client could not be built.
    Config(String),
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// Backend answered with a non-2xx status.
    Http { status: u16, message: String },
    /// Body was not the JSON we expected.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Http { status, message } => write!(f, "HTTP {status}: {message}"),
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// HTTP client bound to one backend origin.
///
/// The cookie store is always on: the backend keeps mission progress in a
/// server-side session keyed by cookie, so every call (and every redirect the
/// backend answers with) has to carry it. Requests are single-shot, with no
/// retry, timeout or caching.
pub struct GameClient {
    base_url: String,
    client: reqwest::Client,
}

impl GameClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        reqwest::Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("POST {} (body: {})", url, body.is_some());
        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    /// Runs a script through the backend's admin endpoint.
    pub async fn execute_admin_sql(&self, script: &str) -> Result<AdminSqlOutcome, ApiError> {
        info!("Executing admin script ({} bytes)", script.len());
        self.post(
            "/admin/execute_sql",
            Some(&AdminSqlRequest { sql_script: script }),
        )
        .await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    debug!("Backend response status: {}", status);

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        warn!("Backend error: {} - {}", status.as_u16(), message);
        return Err(ApiError::Http {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait]
impl GameBackend for GameClient {
    async fn game_state(&self) -> Result<GameState, ApiError> {
        self.get("/game_state").await
    }

    async fn submit_query(&self, sql_query: &str) -> Result<GameState, ApiError> {
        self.post("/submit_query", Some(&SubmitQueryRequest { sql_query }))
            .await
    }

    async fn next_mission(&self) -> Result<GameState, ApiError> {
        self.post("/next_mission", None::<&()>).await
    }

    async fn reset_progress(&self) -> Result<GameState, ApiError> {
        self.post("/reset_progress", None::<&()>).await
    }
}
