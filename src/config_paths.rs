//! Where mdgrid keeps its files on disk
//!
//! One directory holds the editor settings (`config.yaml`), the stored
//! tables (`files.json`) and the rotated logs (`logs/`). Everything else in
//! the crate asks this module for those paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "mdgrid";

/// Prefix of the daily-rotated log files (`mdgrid.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "mdgrid.log";

/// The mdgrid directory: `$XDG_CONFIG_HOME/mdgrid`, falling back to
/// `~/.config/mdgrid`, or `%APPDATA%\mdgrid` on Windows
///
/// `None` when neither the environment nor `dirs` can name a home.
pub fn config_dir() -> Option<PathBuf> {
    let base = if cfg!(windows) {
        // Roaming AppData
        dirs::config_dir()
    } else {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    };
    base.map(|base| base.join(APP_DIR))
}

/// Editor settings read by [`crate::config::EditorConfig::load`]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Stored tables read by [`crate::files::FileStore::load`]
pub fn files_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("files.json"))
}

/// Target of the daily file layer set up in [`crate::tracing::init`]
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Newest rotated log, or the bare prefix path before the first one is written
pub fn log_file() -> Option<PathBuf> {
    let logs_dir = logs_dir()?;
    Some(newest_log_in(&logs_dir).unwrap_or_else(|| logs_dir.join(LOG_FILE_PREFIX)))
}

fn newest_log_in(dir: &Path) -> Option<PathBuf> {
    // Date suffixes compare lexically
    fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX))
        })
        .max()
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the mdgrid directory if needed
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Create the log directory (and its parent) if needed
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = ensure_config_dir()?.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_config_dir() {
        let Some(dir) = config_dir() else {
            return;
        };
        assert!(dir.ends_with(APP_DIR));
        assert_eq!(config_file(), Some(dir.join("config.yaml")));
        assert_eq!(files_path(), Some(dir.join("files.json")));
        assert_eq!(logs_dir(), Some(dir.join("logs")));
    }

    #[test]
    fn test_newest_log_wins() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["mdgrid.log.2026-01-01", "mdgrid.log.2026-03-02", "other.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        assert_eq!(
            newest_log_in(dir.path()),
            Some(dir.path().join("mdgrid.log.2026-03-02"))
        );
    }

    #[test]
    fn test_no_logs() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(newest_log_in(dir.path()), None);
    }
}
