//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/mdgrid/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_MAX_HISTORY;
use crate::table::{DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Number of undo steps kept before the oldest are discarded
    pub max_history: usize,
    /// Width given to columns added after widths have been set
    pub default_column_width: f64,
    /// Lower clamp for resized columns
    pub min_column_width: f64,
    /// Quiet period before a source edit is re-parsed
    pub source_debounce_ms: u64,
    pub new_table_rows: usize,
    pub new_table_columns: usize,
    /// Drop styles for cells that no longer exist after a structural edit
    pub prune_orphan_styles: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
            default_column_width: DEFAULT_COLUMN_WIDTH,
            min_column_width: MIN_COLUMN_WIDTH,
            source_debounce_ms: 500,
            new_table_rows: 3,
            new_table_columns: 3,
            prune_orphan_styles: true,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, or return defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.max_history, 100);
        assert_eq!(config.default_column_width, 150.0);
        assert_eq!(config.min_column_width, 50.0);
        assert_eq!(config.source_debounce_ms, 500);
        assert!(config.prune_orphan_styles);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: EditorConfig = serde_yaml::from_str("max_history: 5\n").unwrap();
        assert_eq!(config.max_history, 5);
        assert_eq!(config.new_table_rows, 3);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = EditorConfig {
            source_debounce_ms: 20,
            prune_orphan_styles: false,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(EditorConfig::load_from(&path), config);
    }

    #[test]
    fn test_invalid_yaml_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "max_history: [not a number").unwrap();

        assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::load_from(&dir.path().join("absent.yaml"));
        assert_eq!(config, EditorConfig::default());
    }
}
