//! Tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! table edits, history and source-panel state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=model=debug,message=debug` - scoped filtering
//! - `RUST_LOG=mdgrid::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/mdgrid/logs/mdgrid.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`. File logging
/// writes to `~/.config/mdgrid/logs/mdgrid.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console goes to stderr so stdout stays clean for piped output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A test harness or embedding app may already have installed a subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of model shape for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub styled: usize,
    pub past: usize,
    pub future: usize,
    pub selected: usize,
    pub source_revision: u64,
}

impl ModelSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let history = model.history_summary();
        Self {
            rows: model.table.row_count(),
            cols: model.table.column_count(),
            styled: model.styles.len(),
            past: history.past,
            future: history.future,
            selected: model.selection.cells.len()
                + model.selection.rows.len()
                + model.selection.columns.len(),
            source_revision: model.source.revision,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ModelSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if (self.rows, self.cols) != (other.rows, other.cols) {
            changes.push(format!(
                "shape: {}x{} → {}x{}",
                self.rows, self.cols, other.rows, other.cols
            ));
        }
        if self.styled != other.styled {
            changes.push(format!("styled cells: {} → {}", self.styled, other.styled));
        }
        if (self.past, self.future) != (other.past, other.future) {
            changes.push(format!(
                "history: {}/{} → {}/{}",
                self.past, self.future, other.past, other.future
            ));
        }
        if self.selected != other.selected {
            changes.push(format!("selection: {} → {}", self.selected, other.selected));
        }
        if self.source_revision != other.source_revision {
            changes.push(format!(
                "source rev: {} → {}",
                self.source_revision, other.source_revision
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_reports_changes() {
        let mut model = AppModel::default();
        let before = ModelSnapshot::from_model(&model);

        let table = model.table.add_row(None);
        model.commit_table(table);
        let after = ModelSnapshot::from_model(&model);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("shape: 3x3 → 4x3"));
        assert!(diff.contains("history: 0/0 → 1/0"));
    }

    #[test]
    fn test_no_diff_when_unchanged() {
        let model = AppModel::default();
        let snapshot = ModelSnapshot::from_model(&model);
        assert_eq!(snapshot.diff(&snapshot), None);
    }
}
