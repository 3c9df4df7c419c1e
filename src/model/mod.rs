//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.
//! The UI reads these fields; every mutation goes through [`crate::update::update`].

pub mod source;
pub mod ui;

pub use source::SourceDraft;
pub use ui::{Notice, NoticeLevel, UiState, NOTICE_DURATION};

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::EditorConfig;
use crate::files::FileStore;
use crate::history::{History, HistorySummary, Snapshot};
use crate::markdown;
use crate::selection::Selection;
use crate::style::StyleStore;
use crate::table::Table;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The live table, shared with the history snapshot that recorded it
    pub table: Arc<Table>,
    /// Cell styles, shared the same way
    pub styles: Arc<StyleStore>,
    pub selection: Selection,
    pub history: History,
    /// Markdown source panel
    pub source: SourceDraft,
    /// Notices and busy flags
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Saved tables
    pub files: FileStore,
    /// Where `files` is persisted; `None` keeps the store in memory only
    pub files_path: Option<PathBuf>,
}

impl AppModel {
    /// Create a model holding an empty table sized from `config`
    pub fn new(config: EditorConfig) -> Self {
        let table = Table::create_empty(config.new_table_rows, config.new_table_columns);
        Self::with_table(table, config)
    }

    /// Create a model around an existing table
    pub fn with_table(table: Table, config: EditorConfig) -> Self {
        let table = Arc::new(table.normalized());
        let styles = Arc::new(StyleStore::default());
        let selection = Selection::default();
        let history = History::with_max_size(
            Snapshot::new(table.clone(), styles.clone(), selection.clone()),
            config.max_history,
        );

        Self {
            source: SourceDraft::of_table(&table),
            table,
            styles,
            selection,
            history,
            ui: UiState::new(),
            config,
            files: FileStore::default(),
            files_path: None,
        }
    }

    /// Load the file store from `path` and persist changes there
    pub fn with_file_store(mut self, path: PathBuf) -> Self {
        self.files = FileStore::load_from(&path);
        self.files_path = Some(path);
        self
    }

    /// The table serialized as Markdown
    pub fn markdown(&self) -> String {
        markdown::serialize(&self.table)
    }

    pub fn history_summary(&self) -> HistorySummary {
        self.history.summary()
    }

    /// Commit a new table, keeping the current styles
    pub fn commit_table(&mut self, table: Table) {
        let styles = (*self.styles).clone();
        self.commit(table, styles);
    }

    /// Commit new styles, keeping the current table
    pub fn commit_styles(&mut self, styles: StyleStore) {
        let table = (*self.table).clone();
        self.commit(table, styles);
    }

    /// Make `table` and `styles` the live state and record a history entry
    ///
    /// Styles outside the table are dropped when `prune_orphan_styles` is set,
    /// the selection is clamped to the new shape and the source panel is
    /// resynced.
    pub fn commit(&mut self, table: Table, styles: StyleStore) {
        let table = table.normalized();
        let styles = if self.config.prune_orphan_styles {
            styles.retain_within(table.row_count(), table.column_count())
        } else {
            styles
        };

        self.table = Arc::new(table);
        self.styles = Arc::new(styles);
        self.selection.clamp_to(&self.table);
        self.history.commit(Snapshot::new(
            self.table.clone(),
            self.styles.clone(),
            self.selection.clone(),
        ));
        self.source.sync(markdown::serialize(&self.table));
    }

    /// Make a history snapshot the live state without recording an entry
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.table = snapshot.table.clone();
        self.styles = snapshot.styles.clone();
        self.selection = snapshot.selection.clone();
        self.source.sync(markdown::serialize(&self.table));
    }

    /// Record the live selection in the present snapshot
    pub fn sync_selection(&mut self) {
        self.history.sync_selection(&self.selection);
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
