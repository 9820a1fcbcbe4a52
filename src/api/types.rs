//! Wire types for the game backend.
//!
//! Every game endpoint answers with a full [`GameState`] snapshot. The client
//! never patches a snapshot in place; it swaps the whole value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One result row, keyed by column name.
pub type Row = Map<String, Value>;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mission {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    // Degenerate "system error" missions come without subject or body.
    #[serde(default)]
    pub coordinator_message_subject: String,
    #[serde(default)]
    pub coordinator_message_body: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Warning,
    Info,
    Error,
    #[serde(other)]
    Other,
}

/// A one-shot notification. On the wire it is a `[category, message]` pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "(FlashCategory, String)", into = "(FlashCategory, String)")]
pub struct FlashMessage {
    pub category: FlashCategory,
    pub message: String,
}

impl From<(FlashCategory, String)> for FlashMessage {
    fn from((category, message): (FlashCategory, String)) -> Self {
        Self { category, message }
    }
}

impl From<FlashMessage> for (FlashCategory, String) {
    fn from(flash: FlashMessage) -> Self {
        (flash.category, flash.message)
    }
}

/// The complete server-side view of the player's progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct GameState {
    #[serde(default)]
    pub mission: Option<Mission>,
    #[serde(default)]
    pub results: Option<Vec<Row>>,
    #[serde(default)]
    pub columns: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub last_query: String,
    #[serde(default)]
    pub archived_findings: Vec<String>,
    #[serde(default)]
    pub is_final_mission: bool,
    #[serde(default)]
    pub mission_completed_show_results: bool,
    #[serde(default)]
    pub flash_messages: Vec<FlashMessage>,
}

impl GameState {
    /// Columns and rows, only when the backend sent both halves.
    pub fn result_set(&self) -> Option<(&[String], &[Row])> {
        match (&self.columns, &self.results) {
            (Some(columns), Some(rows)) => Some((columns.as_slice(), rows.as_slice())),
            _ => None,
        }
    }

    /// The backend error text, ignoring empty strings.
    pub fn query_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// Request body for `POST /submit_query`.
#[derive(Serialize, Debug)]
pub struct SubmitQueryRequest<'a> {
    pub sql_query: &'a str,
}

/// Request body for `POST /admin/execute_sql`.
#[derive(Serialize, Debug)]
pub struct AdminSqlRequest<'a> {
    pub sql_script: &'a str,
}

/// Outcome of an admin script: either rows or a confirmation message.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AdminSqlOutcome {
    Rows { columns: Vec<String>, results: Vec<Row> },
    Message { message: String },
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Deserialize, Debug)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Text shown in a table cell for `column` of `row`.
pub fn cell_text(row: &Row, column: &str) -> String {
    match row.get(column) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
