//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use mdgrid::config::EditorConfig;
use mdgrid::model::AppModel;
use mdgrid::table::Table;

/// Build a table from string slices, left-aligned, no widths
pub fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    Table::new(
        headers.iter().map(|s| s.to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect(),
    )
}

/// Create a test model around `table` with default config
pub fn test_model(table: Table) -> AppModel {
    AppModel::with_table(table, EditorConfig::default())
}

/// Create a test model with a custom config
pub fn test_model_with_config(table: Table, config: EditorConfig) -> AppModel {
    AppModel::with_table(table, config)
}

/// A small 3x2 table of names and scores
pub fn scores() -> Table {
    table(
        &["Name", "Score"],
        &[&["Carol", "7"], &["alice", "10"], &["Bob", "2"]],
    )
}

/// Text of the current notice, if any
pub fn notice_text(model: &AppModel) -> Option<String> {
    model.ui.active_notice().map(|n| n.text.clone())
}
