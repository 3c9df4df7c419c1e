//! Persistent store of named tables
//!
//! Saved tables ("files") live in `~/.config/mdgrid/files.json` together
//! with a little metadata. The store is plain JSON so other tools can read
//! the `data` field as a table directly.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::markdown;
use crate::table::Table;

/// A saved table with metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub id: String,
    pub name: String,
    /// Byte length of the table serialized as Markdown
    pub size: usize,
    #[serde(rename = "type")]
    pub file_type: String,
    /// Unix epoch milliseconds
    pub created_at: u64,
    /// Unix epoch milliseconds
    pub modified_at: u64,
    pub data: Table,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StoredFile {
    /// Create a new entry stamped with the current time
    pub fn new(name: impl Into<String>, data: Table, description: Option<String>) -> Self {
        let now = now_epoch_millis();
        Self {
            id: next_id(now),
            name: name.into(),
            size: markdown::serialize(&data).len(),
            file_type: "markdown".to_string(),
            created_at: now,
            modified_at: now,
            data,
            description,
        }
    }

    /// Replace the table, refreshing size and modification time
    pub fn set_data(&mut self, data: Table) {
        self.size = markdown::serialize(&data).len();
        self.data = data;
        self.touch();
    }

    fn touch(&mut self) {
        // Keep modification times strictly increasing for stable ordering
        self.modified_at = now_epoch_millis().max(self.modified_at + 1);
    }
}

fn now_epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn next_id(now: u64) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{:x}-{:x}", now, seq)
}

/// All saved tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileStore {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    pub files: Vec<StoredFile>,
}

impl FileStore {
    pub const CURRENT_VERSION: u32 = 1;

    /// Load the store from the config directory
    pub fn load() -> Self {
        match crate::config_paths::files_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load the store from `path`; missing or corrupt files give an empty store
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&contents) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Ignoring unreadable file store {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save the store to the config directory
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = crate::config_paths::files_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            ));
        };
        crate::config_paths::ensure_config_dir().map_err(std::io::Error::other)?;
        self.save_to(&path)
    }

    /// Save the store to `path`
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_json()?)
    }

    /// Pretty JSON representation, as written by [`FileStore::save_to`]
    pub fn to_json(&self) -> std::io::Result<String> {
        let mut store = self.clone();
        store.version = Self::CURRENT_VERSION;
        Ok(serde_json::to_string_pretty(&store)?)
    }

    /// Add a table, returning its id
    pub fn create(
        &mut self,
        name: impl Into<String>,
        data: Table,
        description: Option<String>,
    ) -> String {
        let file = StoredFile::new(name, data, description);
        let id = file.id.clone();
        tracing::debug!("Stored table '{}' as {}", file.name, id);
        self.files.push(file);
        id
    }

    /// Replace the table of an entry; `false` when the id is unknown
    pub fn update(&mut self, id: &str, data: Table) -> bool {
        match self.get_mut(id) {
            Some(file) => {
                file.set_data(data);
                true
            }
            None => false,
        }
    }

    /// Rename an entry; `false` when the id is unknown
    pub fn rename(&mut self, id: &str, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(file) => {
                file.name = name.into();
                file.touch();
                true
            }
            None => false,
        }
    }

    /// Remove an entry, returning it
    pub fn remove(&mut self, id: &str) -> Option<StoredFile> {
        let index = self.files.iter().position(|f| f.id == id)?;
        Some(self.files.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&StoredFile> {
        self.files.iter().find(|f| f.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut StoredFile> {
        self.files.iter_mut().find(|f| f.id == id)
    }

    /// Entries, most recently modified first
    pub fn list(&self) -> Vec<&StoredFile> {
        let mut files: Vec<&StoredFile> = self.files.iter().collect();
        files.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
        files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
