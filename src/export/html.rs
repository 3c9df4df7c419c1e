//! Style-aware HTML table export

use crate::style::StyleStore;
use crate::table::{CellCoord, Table, HEADER_ROW};

/// Render `table` as an HTML `<table>` with inline cell styles
pub fn to_html(table: &Table, styles: &StyleStore) -> String {
    let mut out = String::from("<table>\n  <thead>\n    <tr>\n");
    for col in 0..table.column_count() {
        push_cell(&mut out, "th", table, styles, HEADER_ROW, col);
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for row in 0..table.row_count() {
        out.push_str("    <tr>\n");
        for col in 0..table.column_count() {
            push_cell(&mut out, "td", table, styles, row as isize, col);
        }
        out.push_str("    </tr>\n");
    }

    out.push_str("  </tbody>\n</table>\n");
    out
}

fn push_cell(
    out: &mut String,
    tag: &str,
    table: &Table,
    styles: &StyleStore,
    row: isize,
    col: usize,
) {
    let mut css = format!("text-align: {}", table.alignment(col).css());
    if let Some(style) = styles.get(CellCoord::new(row, col)) {
        // Later declarations win, so a cell's own text-align overrides the column's
        let extra = style.to_css();
        if !extra.is_empty() {
            css.push_str("; ");
            css.push_str(&extra);
        }
    }

    out.push_str(&format!(
        "      <{tag} style=\"{}\">{}</{tag}>\n",
        escape_html(&css),
        escape_html(table.cell(row, col)),
    ));
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
