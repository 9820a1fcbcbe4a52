//! One-shot commands that run without the interactive terminal.

use std::io;

use log::{info, warn};
use unicode_width::UnicodeWidthStr;

use crate::api::types::cell_text;
use crate::api::{AdminSqlOutcome, GameBackend, GameClient, Row};
use crate::core::config::ResolvedConfig;

/// `secuelas state`: fetch one snapshot and print it as JSON.
pub async fn print_state(config: &ResolvedConfig) -> io::Result<()> {
    let client = GameClient::new(&config.base_url).map_err(io::Error::other)?;
    let state = client.game_state().await.map_err(|e| {
        warn!("State fetch failed: {}", e);
        io::Error::other(e)
    })?;
    let json = serde_json::to_string_pretty(&state).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

/// `secuelas admin-sql <script>`: run a script and print rows or the message.
pub async fn run_admin_sql(config: &ResolvedConfig, script: &str) -> io::Result<()> {
    let client = GameClient::new(&config.base_url).map_err(io::Error::other)?;
    let outcome = client.execute_admin_sql(script).await.map_err(|e| {
        warn!("Admin script failed: {}", e);
        io::Error::other(e)
    })?;

    match outcome {
        AdminSqlOutcome::Rows { columns, results } => {
            info!("Admin script returned {} rows", results.len());
            print!("{}", format_table(&columns, &results));
        }
        AdminSqlOutcome::Message { message } => println!("{message}"),
    }
    Ok(())
}

/// Plain-text table with a header rule, columns padded to their widest cell.
pub fn format_table(columns: &[String], rows: &[Row]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| cell_text(row, c)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            cells
                .iter()
                .map(|r| r[i].width())
                .chain(std::iter::once(col.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render_line = |values: &[String]| -> String {
        let padded: Vec<String> = values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{}{}", v, " ".repeat(w.saturating_sub(v.width()))))
            .collect();
        format!("{}\n", padded.join(" | ").trim_end())
    };

    let mut out = render_line(columns);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format!("{}\n", rule.join("-+-")));
    for row in &cells {
        out.push_str(&render_line(row));
    }
    out.push_str(&format!("({} filas)\n", rows.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_table_pads_columns() {
        let columns = vec!["id".to_string(), "alias".to_string()];
        let rows: Vec<Row> = vec![
            serde_json::from_value(json!({"id": 1, "alias": "Topo"})).unwrap(),
            serde_json::from_value(json!({"id": 12, "alias": null})).unwrap(),
        ];

        let table = format_table(&columns, &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "id | alias");
        assert_eq!(lines[1], "---+------");
        assert_eq!(lines[2], "1  | Topo");
        assert_eq!(lines[3], "12 |");
        assert_eq!(lines[4], "(2 filas)");
    }

    #[test]
    fn test_format_table_empty_result() {
        let columns = vec!["nombre".to_string()];
        let table = format_table(&columns, &[]);
        assert_eq!(table, "nombre\n------\n(0 filas)\n");
    }
}
