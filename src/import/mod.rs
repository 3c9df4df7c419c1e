//! Importers
//!
//! Turn CSV/TSV, JSON or Markdown text into a [`Table`]. Each reader first
//! produces the normalized [`TabularData`] shape; the editor is never handed
//! malformed data.

mod delimited;
mod json;

use std::path::Path;

use crate::markdown::{self, FormatError};
use crate::table::{Table, TabularData};

pub use delimited::{detect_delimiter, parse_delimited, Delimiter};
pub use json::parse_json;

/// Errors produced while importing tabular data
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("the input contains no table data")]
    Empty,
    #[error("CSV parse error at record {record}: {message}")]
    Csv { record: usize, message: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported data shape: {0}")]
    Shape(String),
    #[error(transparent)]
    Markdown(#[from] FormatError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Input formats understood by [`import`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Markdown,
    Csv,
    Tsv,
    Json,
}

impl ImportFormat {
    /// Detect format from file extension, `None` when unknown
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" | "mdown" => Some(ImportFormat::Markdown),
            "csv" => Some(ImportFormat::Csv),
            "tsv" | "tab" => Some(ImportFormat::Tsv),
            "json" => Some(ImportFormat::Json),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Import `content` as a table
pub fn import(format: ImportFormat, content: &str) -> Result<Table, ImportError> {
    match format {
        ImportFormat::Markdown => Ok(markdown::parse(content)?.normalized()),
        ImportFormat::Csv => {
            let delimiter = match detect_delimiter(content) {
                Delimiter::Tab => Delimiter::Tab,
                Delimiter::Semicolon => Delimiter::Semicolon,
                _ => Delimiter::Comma,
            };
            from_tabular(parse_delimited(content, delimiter)?)
        }
        ImportFormat::Tsv => from_tabular(parse_delimited(content, Delimiter::Tab)?),
        ImportFormat::Json => from_tabular(parse_json(content)?),
    }
}

/// Read and import a file, choosing the format from its extension
pub fn import_file(path: &Path) -> Result<Table, ImportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let format = ImportFormat::from_path(path).unwrap_or_else(|| {
        tracing::debug!(
            "Unknown extension for {}, treating as Markdown",
            path.display()
        );
        ImportFormat::Markdown
    });
    import(format, &content)
}

fn from_tabular(data: TabularData) -> Result<Table, ImportError> {
    if data.headers.is_empty() && data.rows.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(Table::from_tabular(data))
}
