//! Single-cell, row and column primitives
//!
//! Out-of-range indices are silent no-ops: the returned table equals the
//! input and the caller decides whether to warn.

use super::structural::DEFAULT_COLUMN_WIDTH;
use super::{default_header_name, Alignment, Table, HEADER_ROW};

impl Table {
    /// Blank table with positional headers and left alignment
    pub fn create_empty(rows: usize, cols: usize) -> Self {
        let headers = (0..cols).map(default_header_name).collect();
        let rows = vec![vec![String::new(); cols]; rows];
        Self::new(headers, rows)
    }

    /// Insert a blank row at `index`, appending when absent or out of range
    pub fn add_row(&self, index: Option<usize>) -> Self {
        let mut table = self.clone();
        let row = vec![String::new(); self.column_count()];
        match index {
            Some(i) if i <= table.rows.len() => table.rows.insert(i, row),
            _ => table.rows.push(row),
        }
        table
    }

    /// Remove the row at `index`
    ///
    /// The last remaining row may be removed; a table with zero data rows is
    /// valid.
    pub fn remove_row(&self, index: usize) -> Self {
        if index >= self.rows.len() {
            return self.clone();
        }
        let mut table = self.clone();
        table.rows.remove(index);
        table
    }

    /// Insert a column at `index`, appending when absent or out of range
    ///
    /// The new header is named after the new column count. A width entry is
    /// added only when the table already tracks widths.
    pub fn add_column(&self, index: Option<usize>) -> Self {
        let n = self.column_count();
        let at = match index {
            Some(i) if i <= n => i,
            _ => n,
        };

        let mut table = self.normalized();
        table.headers.insert(at, default_header_name(n));
        table.alignments.insert(at, Alignment::Left);
        if let Some(widths) = table.column_widths.as_mut() {
            widths.insert(at, DEFAULT_COLUMN_WIDTH);
        }
        for row in &mut table.rows {
            if row.len() < at {
                row.resize(at, String::new());
            }
            row.insert(at, String::new());
        }
        table
    }

    /// Remove the column at `index`; at least one column always remains
    pub fn remove_column(&self, index: usize) -> Self {
        let n = self.column_count();
        if index >= n || n <= 1 {
            return self.clone();
        }

        let mut table = self.normalized();
        table.headers.remove(index);
        table.alignments.remove(index);
        if let Some(widths) = table.column_widths.as_mut() {
            widths.remove(index);
        }
        for row in &mut table.rows {
            if index < row.len() {
                row.remove(index);
            }
        }
        table
    }

    /// Write one cell; `row == HEADER_ROW` targets the header
    pub fn update_cell(&self, row: isize, col: usize, value: &str) -> Self {
        if col >= self.column_count() {
            return self.clone();
        }

        if row == HEADER_ROW {
            let mut table = self.clone();
            table.headers[col] = value.to_string();
            return table;
        }

        let Some(r) = usize::try_from(row).ok().filter(|&r| r < self.rows.len()) else {
            return self.clone();
        };

        let mut table = self.clone();
        let cells = &mut table.rows[r];
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }
        cells[col] = value.to_string();
        table
    }

    /// Replace the alignment of one column
    pub fn update_alignment(&self, col: usize, alignment: Alignment) -> Self {
        if col >= self.column_count() {
            return self.clone();
        }
        let mut table = self.normalized();
        table.alignments[col] = alignment;
        table
    }
}
