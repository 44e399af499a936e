//! Output formatters for CLI commands.
//!
//! Provides two output formats: an aligned plain-text table and JSON.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Pretty-printed JSON of any serializable value.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Flatten nested JSON objects into `(dotted.key, value)` rows, sorted by key.
///
/// Strings are shown without quotes and `null` as an empty cell.
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    flatten_into(String::new(), value, &mut rows);
    rows
}

fn flatten_into(prefix: String, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(path, child, rows);
            }
        }
        Value::String(s) => rows.push((prefix, s.clone())),
        Value::Null => rows.push((prefix, String::new())),
        other => rows.push((prefix, other.to_string())),
    }
}

/// Render rows as a left-aligned table with a header line.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    for (idx, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if idx == last {
            out.push_str(cell);
        } else {
            out.push_str(&format!("{cell:<width$}  "));
        }
    }
    out.push('\n');
}
