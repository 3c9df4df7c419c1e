//! Markdown source panel state
//!
//! The source panel shows the table as Markdown and lets the user edit it as
//! text. Edits are parsed for a live preview right away, but only committed
//! to the table when the user applies them or the debounce timer fires.

use crate::markdown;
use crate::table::Table;

#[derive(Debug, Clone, Default)]
pub struct SourceDraft {
    /// Text currently shown in the source panel
    pub text: String,
    /// Bumped on every edit and sync; a pending parse with an older
    /// revision is stale
    pub revision: u64,
    /// True when `text` differs from the serialized table
    pub dirty: bool,
    /// Result of the last successful best-effort parse
    pub preview: Option<Table>,
    /// Message of the last failed parse
    pub error: Option<String>,
}

impl SourceDraft {
    /// Draft showing `table` as Markdown
    pub fn of_table(table: &Table) -> Self {
        Self {
            text: markdown::serialize(table),
            ..Default::default()
        }
    }

    /// Store an edit and parse it for preview, returning the new revision
    pub fn edit(&mut self, text: String) -> u64 {
        self.revision += 1;
        self.dirty = true;
        match markdown::parse(&text) {
            Ok(table) => {
                self.preview = Some(table);
                self.error = None;
            }
            Err(e) => {
                self.preview = None;
                self.error = Some(e.to_string());
            }
        }
        self.text = text;
        self.revision
    }

    /// Parse the current text, recording the error on failure
    pub fn parse(&mut self) -> Option<Table> {
        match markdown::parse(&self.text) {
            Ok(table) => {
                self.error = None;
                Some(table)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Replace the draft with the serialized table, invalidating pending parses
    pub fn sync(&mut self, markdown: String) {
        self.revision += 1;
        self.text = markdown;
        self.dirty = false;
        self.preview = None;
        self.error = None;
    }

    /// Whether a parse scheduled for `revision` is still current
    pub fn is_current(&self, revision: u64) -> bool {
        self.revision == revision
    }
}
