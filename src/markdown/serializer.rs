//! Markdown table serialization

use crate::table::Table;

/// Serialize a [`Table`] to GFM table text
///
/// Lines are joined with `\n`; no trailing newline is written. Only the
/// header count decides the delimiter row, so rows are written as they are.
pub fn serialize(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 2);
    lines.push(serialize_row(&table.headers));

    let delimiters: Vec<&str> = (0..table.column_count())
        .map(|col| table.alignment(col).delimiter())
        .collect();
    lines.push(format!("| {} |", delimiters.join(" | ")));

    lines.extend(table.rows.iter().map(|row| serialize_row(row)));
    lines.join("\n")
}

/// Format one row as `| a | b |`
pub fn serialize_row<S: AsRef<str>>(cells: &[S]) -> String {
    let cells: Vec<String> = cells.iter().map(|c| escape_cell(c.as_ref())).collect();
    format!("| {} |", cells.join(" | "))
}

fn escape_cell(cell: &str) -> String {
    if !cell.contains(['|', '\n', '\r']) {
        return cell.to_string();
    }
    cell.replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
        .replace('|', "\\|")
}
