//! Table model
//!
//! The canonical in-memory representation of a Markdown table.
//!
//! # Architecture
//!
//! ```text
//! Table
//! ├── headers        (N column labels)
//! ├── rows           (each logically N cells, may be short)
//! ├── alignments     (N values)
//! └── column_widths  (optional, N pixel widths)
//! ```
//!
//! Every edit returns a new `Table`; the input is never mutated. The
//! application model keeps tables behind an `Arc`, so history snapshots can
//! hold earlier versions without copying them.

mod ops;
pub mod structural;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use structural::{EditRefusal, SortOrder, DEFAULT_COLUMN_WIDTH, MIN_COLUMN_WIDTH};

/// Row index used to address the header row in a [`CellCoord`]
pub const HEADER_ROW: isize = -1;

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Classify a delimiter-row cell (`---`, `:---:`, `---:`)
    ///
    /// A cell with a colon on the left only (`:---`) is `Left`, the same as
    /// a plain `---`.
    pub fn from_delimiter(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.starts_with(':') && cell.ends_with(':') {
            Alignment::Center
        } else if cell.ends_with(':') {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }

    /// The delimiter-row marker written by the serializer
    pub fn delimiter(self) -> &'static str {
        match self {
            Alignment::Left => "---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
        }
    }

    /// CSS `text-align` keyword
    pub fn css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Ok(Alignment::Left),
            "center" | "centre" | "c" => Ok(Alignment::Center),
            "right" | "r" => Ok(Alignment::Right),
            other => Err(format!("unknown alignment '{}'", other)),
        }
    }
}

/// Address of one cell; `row == HEADER_ROW` is the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellCoord {
    pub row: isize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: isize, col: usize) -> Self {
        Self { row, col }
    }

    /// Coordinate of a header cell
    pub fn header(col: usize) -> Self {
        Self {
            row: HEADER_ROW,
            col,
        }
    }

    pub fn is_header(&self) -> bool {
        self.row == HEADER_ROW
    }

    /// Data row index, `None` for the header or any other negative row
    pub fn data_row(&self) -> Option<usize> {
        usize::try_from(self.row).ok()
    }

    /// String key in `"{row}-{col}"` form, e.g. `"-1-0"` for the first header
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for CellCoord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The row may be negative, so split on the last '-'
        let (row, col) = s
            .rsplit_once('-')
            .ok_or_else(|| format!("invalid cell key '{}'", s))?;
        let row = row
            .parse::<isize>()
            .map_err(|_| format!("invalid row in cell key '{}'", s))?;
        let col = col
            .parse::<usize>()
            .map_err(|_| format!("invalid column in cell key '{}'", s))?;
        Ok(Self { row, col })
    }
}

/// Normalized `{headers, rows}` shape handed over by importers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A Markdown table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub alignments: Vec<Alignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_widths: Option<Vec<f64>>,
}

impl Table {
    /// Build a table from headers and rows with left alignment everywhere
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let alignments = vec![Alignment::Left; headers.len()];
        Self {
            headers,
            rows,
            alignments,
            column_widths: None,
        }
    }

    /// Build a table from importer output
    ///
    /// Rows are padded to the widest of headers and rows; columns without a
    /// header name get a positional one.
    pub fn from_tabular(data: TabularData) -> Self {
        let TabularData { mut headers, rows } = data;
        let width = rows
            .iter()
            .map(|r| r.len())
            .max()
            .unwrap_or(0)
            .max(headers.len());

        while headers.len() < width {
            headers.push(default_header_name(headers.len()));
        }

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();

        Self::new(headers, rows)
    }

    /// Number of columns (header count)
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell value, treating missing cells as empty
    pub fn cell(&self, row: isize, col: usize) -> &str {
        match usize::try_from(row) {
            Err(_) if row == HEADER_ROW => self.headers.get(col).map(String::as_str).unwrap_or(""),
            Err(_) => "",
            Ok(row) => self
                .rows
                .get(row)
                .and_then(|r| r.get(col))
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Alignment of a column, `Left` when out of range
    pub fn alignment(&self, col: usize) -> Alignment {
        self.alignments.get(col).copied().unwrap_or_default()
    }

    /// Width of a column in pixels, falling back to the default width
    pub fn column_width(&self, col: usize) -> f64 {
        self.column_widths
            .as_ref()
            .and_then(|w| w.get(col))
            .copied()
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Whether every row has exactly one cell per header
    pub fn is_rectangular(&self) -> bool {
        let n = self.column_count();
        self.rows.iter().all(|r| r.len() == n)
    }

    /// Copy with every short row padded to the header count
    pub fn rectangular(&self) -> Self {
        let n = self.column_count();
        let mut table = self.clone();
        for row in &mut table.rows {
            if row.len() < n {
                row.resize(n, String::new());
            }
        }
        table
    }

    /// Copy whose per-column lists match the header count
    ///
    /// The parser keeps as many alignments as the delimiter row has cells,
    /// and stored files may carry width lists of any length. Alignments and
    /// widths are truncated or padded with defaults; non-finite widths fall
    /// back to the default. Rows are left as they are.
    pub fn normalized(&self) -> Self {
        let n = self.column_count();
        let mut table = self.clone();
        table.alignments.resize(n, Alignment::Left);
        if let Some(widths) = table.column_widths.as_mut() {
            widths.resize(n, DEFAULT_COLUMN_WIDTH);
            for width in widths.iter_mut().filter(|w| !w.is_finite()) {
                *width = DEFAULT_COLUMN_WIDTH;
            }
        }
        table
    }

    /// Normalized `{headers, rows}` view, padded to the header count
    pub fn to_tabular(&self) -> TabularData {
        let table = self.rectangular();
        TabularData {
            headers: table.headers,
            rows: table.rows,
        }
    }
}

/// Positional header name, 0-based index in, 1-based label out
pub(crate) fn default_header_name(index: usize) -> String {
    format!("Header {}", index + 1)
}
