//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::export::ExportFormat;
use crate::import::ImportFormat;
use crate::style::CellStyle;
use crate::table::{Alignment, CellCoord, SortOrder, Table};

/// Table edits (content, structure, layout)
#[derive(Debug, Clone)]
pub enum TableMsg {
    /// Set a cell's text; `row == -1` addresses the header
    SetCell { row: isize, col: usize, value: String },
    /// Insert an empty row, appending when `at` is `None`
    AddRow { at: Option<usize> },
    RemoveRow(usize),
    /// Insert a column, appending when `at` is `None`
    AddColumn { at: Option<usize> },
    RemoveColumn(usize),
    SetAlignment { col: usize, alignment: Alignment },
    /// Align every column touched by the selection
    AlignSelection(Alignment),
    SetColumnWidth { col: usize, width: f64 },
    DeleteSelectedRows,
    DeleteSelectedColumns,
    /// Sort by the first selected column
    SortBySelection(SortOrder),
    Transpose,
    /// Paste tab-separated text at the first selected cell
    Paste(String),
    /// Replace the whole table (styles are kept)
    Replace(Table),
    /// Start over with an empty table, styles cleared
    New { rows: usize, cols: usize },
}

/// Cell style edits
#[derive(Debug, Clone)]
pub enum StyleMsg {
    /// Merge a partial style into one cell
    Apply { coord: CellCoord, style: CellStyle },
    /// Merge a partial style into every selected cell
    ApplyToSelection(CellStyle),
    ClearAll,
}

/// Selection changes (never recorded in history)
#[derive(Debug, Clone)]
pub enum SelectionMsg {
    /// Replace the selection with one cell
    SelectCell(CellCoord),
    /// Add or remove a cell (Cmd+Click)
    ToggleCell(CellCoord),
    /// Extend from the first selected cell to this one (Shift+Click)
    ExtendTo(CellCoord),
    SelectRow(usize),
    SelectColumn(usize),
    SelectAll,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMsg {
    Undo,
    Redo,
}

/// Markdown source panel messages
#[derive(Debug, Clone)]
pub enum SourceMsg {
    /// The user typed into the source panel
    Edit(String),
    /// Debounce elapsed for `revision`
    ParseReady { revision: u64 },
    /// Parse now and commit on success
    Apply,
    /// Throw the draft away and show the current table again
    Revert,
}

/// Application-level messages (import, file IO, stored tables)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Replace the table with imported content
    Import {
        format: ImportFormat,
        content: String,
    },
    /// Read a file from disk, format from its extension
    LoadFile(PathBuf),
    /// File load completed (async result)
    FileLoaded {
        path: PathBuf,
        result: Result<String, String>,
    },
    /// Export the table to disk
    SaveAs { path: PathBuf, format: ExportFormat },
    /// File save completed (async result)
    SaveCompleted(Result<PathBuf, String>),
    /// Keep the current table in the file store
    StoreCurrent {
        name: String,
        description: Option<String>,
    },
    /// Replace the table with a stored one
    OpenStored(String),
    DeleteStored(String),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Table(TableMsg),
    Style(StyleMsg),
    Selection(SelectionMsg),
    History(HistoryMsg),
    Source(SourceMsg),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn set_cell(row: isize, col: usize, value: impl Into<String>) -> Self {
        Msg::Table(TableMsg::SetCell {
            row,
            col,
            value: value.into(),
        })
    }

    pub fn select_cell(row: isize, col: usize) -> Self {
        Msg::Selection(SelectionMsg::SelectCell(CellCoord::new(row, col)))
    }

    pub fn undo() -> Self {
        Msg::History(HistoryMsg::Undo)
    }

    pub fn redo() -> Self {
        Msg::History(HistoryMsg::Redo)
    }

    pub fn edit_source(text: impl Into<String>) -> Self {
        Msg::Source(SourceMsg::Edit(text.into()))
    }
}
