//! Exporters
//!
//! Text formats produced from a table and its styles. Binary formats
//! (spreadsheets, images) are produced by external encoders from the same
//! `Table` + `StyleStore` pair.

mod html;

use std::path::Path;

use crate::markdown;
use crate::style::StyleStore;
use crate::table::Table;

pub use html::to_html;

/// Output formats understood by [`export`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Markdown,
    Csv,
    Html,
    Json,
}

impl ExportFormat {
    /// Detect format from file extension, `None` when unknown
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" => Some(ExportFormat::Markdown),
            "csv" => Some(ExportFormat::Csv),
            "html" | "htm" => Some(ExportFormat::Html),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical file extension
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| format!("unknown export format '{}'", s))
    }
}

/// Render `table` in `format`
pub fn export(format: ExportFormat, table: &Table, styles: &StyleStore) -> String {
    match format {
        ExportFormat::Markdown => markdown::serialize(table),
        ExportFormat::Csv => to_csv(table),
        ExportFormat::Html => to_html(table, styles),
        ExportFormat::Json => to_json(table),
    }
}

/// RFC 4180 CSV, header row first, short rows padded
pub fn to_csv(table: &Table) -> String {
    match write_csv(&table.rectangular()) {
        Ok(csv) => csv,
        Err(e) => {
            tracing::error!("CSV export failed: {}", e);
            String::new()
        }
    }
}

fn write_csv(table: &Table) -> Result<String, Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Pretty-printed JSON in the persisted `Table` shape
pub fn to_json(table: &Table) -> String {
    serde_json::to_string_pretty(table).unwrap_or_else(|e| {
        tracing::error!("JSON export failed: {}", e);
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Alignment;

    fn sample() -> Table {
        let mut table = Table::new(
            vec!["Name".into(), "Note".into()],
            vec![
                vec!["Ann".into(), "says \"hi\", twice".into()],
                vec!["Bob".into()],
            ],
        );
        table.alignments[1] = Alignment::Right;
        table
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("html".parse::<ExportFormat>(), Ok(ExportFormat::Html));
        assert_eq!("MD".parse::<ExportFormat>(), Ok(ExportFormat::Markdown));
        assert!("png".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }

    #[test]
    fn test_csv_quotes_and_pads() {
        let csv = to_csv(&sample());
        assert_eq!(
            csv,
            "Name,Note\nAnn,\"says \"\"hi\"\", twice\"\nBob,\n"
        );
    }

    #[test]
    fn test_json_roundtrip() {
        let table = sample();
        let json = to_json(&table);
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_markdown_export() {
        let md = export(ExportFormat::Markdown, &sample(), &StyleStore::default());
        assert!(md.starts_with("| Name | Note |\n| --- | ---: |"));
    }
}
