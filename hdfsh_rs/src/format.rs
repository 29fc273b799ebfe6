//! Presentation helpers: humanized sizes, timestamps, and text rendering
//! of tables. All pure formatting; aggregation and sorting happen before
//! any of this runs.

use chrono::{Local, TimeZone};

use crate::types::Table;

const SIZE_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Render a byte count with a human-readable unit suffix, e.g. `1.5 KB`.
pub fn humanize_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rendered = format!("{value:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rendered, SIZE_UNITS[unit])
}

/// Render WebHDFS epoch milliseconds as a local `YYYY-MM-DD HH:MM:SS`
/// timestamp. Out-of-range values fall back to the raw number.
pub fn timestamp_to_str(epoch_millis: i64) -> String {
    match Local.timestamp_millis_opt(epoch_millis).single() {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => epoch_millis.to_string(),
    }
}

/// Render a table as aligned text columns for terminal output.
pub fn render_text(table: &Table) -> String {
    if table.columns.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = table.columns.iter().map(String::len).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    let render_row = |cells: &[String], out: &mut String| {
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(cell);
            // No padding after the last column.
            if i + 1 < cells.len() {
                for _ in cell.len()..widths[i] {
                    out.push(' ');
                }
            }
        }
        out.push('\n');
    };

    render_row(&table.columns, &mut out);
    for row in &table.rows {
        render_row(row, &mut out);
    }
    out
}
