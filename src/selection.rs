//! Grid selection
//!
//! Three independent sets: selected cells, whole rows and whole columns.
//! Style commands act on cells; bulk row/column deletion acts on the
//! distinct rows/columns the selection touches. The anchor is the cell a
//! range extends from (the last plain or toggled click).

use std::collections::BTreeSet;

use crate::table::{CellCoord, Table, HEADER_ROW};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub cells: BTreeSet<CellCoord>,
    pub rows: BTreeSet<usize>,
    pub columns: BTreeSet<usize>,
    pub anchor: Option<CellCoord>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection holding a single cell
    pub fn single(coord: CellCoord) -> Self {
        let mut selection = Self::default();
        selection.select_cell(coord);
        selection
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.rows.is_empty() && self.columns.is_empty()
    }

    /// Replace everything with one cell
    pub fn select_cell(&mut self, coord: CellCoord) {
        self.clear();
        self.cells.insert(coord);
        self.anchor = Some(coord);
    }

    /// Add or remove one cell, keeping the rest (Cmd+Click)
    pub fn toggle_cell(&mut self, coord: CellCoord) {
        if self.cells.remove(&coord) {
            if self.anchor == Some(coord) {
                self.anchor = None;
            }
        } else {
            self.cells.insert(coord);
            self.anchor = Some(coord);
        }
    }

    /// Replace everything with the rectangle spanned by two corners
    pub fn select_range(&mut self, anchor: CellCoord, head: CellCoord) {
        self.clear();
        let (top, bottom) = (anchor.row.min(head.row), anchor.row.max(head.row));
        let (left, right) = (anchor.col.min(head.col), anchor.col.max(head.col));
        for row in top..=bottom {
            for col in left..=right {
                self.cells.insert(CellCoord::new(row, col));
            }
        }
        self.anchor = Some(anchor);
    }

    /// Extend from the anchor to `head` (Shift+Click)
    ///
    /// Both corners are clamped into `table` first; without an anchor this
    /// selects `head` alone.
    pub fn extend_to(&mut self, head: CellCoord, table: &Table) {
        let Some(head) = clamp_coord(head, table) else {
            return;
        };
        let anchor = self
            .anchor
            .or_else(|| self.first_cell())
            .and_then(|anchor| clamp_coord(anchor, table));
        match anchor {
            Some(anchor) => self.select_range(anchor, head),
            None => self.select_cell(head),
        }
    }

    /// Select a whole data row
    pub fn select_row(&mut self, row: usize, table: &Table) {
        self.clear();
        self.rows.insert(row);
        for col in 0..table.column_count() {
            self.cells.insert(CellCoord::new(row as isize, col));
        }
    }

    /// Select a whole column, header included
    pub fn select_column(&mut self, col: usize, table: &Table) {
        self.clear();
        self.columns.insert(col);
        for row in HEADER_ROW..table.row_count() as isize {
            self.cells.insert(CellCoord::new(row, col));
        }
    }

    /// Select every cell, header row included
    pub fn select_all(&mut self, table: &Table) {
        self.clear();
        let cols = table.column_count();
        if cols == 0 {
            return;
        }
        self.select_range(
            CellCoord::header(0),
            CellCoord::new(table.row_count() as isize - 1, cols - 1),
        );
        self.rows.extend(0..table.row_count());
        self.columns.extend(0..cols);
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.rows.clear();
        self.columns.clear();
        self.anchor = None;
    }

    /// Top-left selected cell (header row first)
    pub fn first_cell(&self) -> Option<CellCoord> {
        self.cells.iter().next().copied()
    }

    /// Distinct data rows touched by the selection
    pub fn touched_rows(&self) -> BTreeSet<usize> {
        let mut rows: BTreeSet<usize> = self.cells.iter().filter_map(|c| c.data_row()).collect();
        rows.extend(self.rows.iter().copied());
        rows
    }

    /// Distinct columns touched by the selection
    pub fn touched_columns(&self) -> BTreeSet<usize> {
        let mut cols: BTreeSet<usize> = self.cells.iter().map(|c| c.col).collect();
        cols.extend(self.columns.iter().copied());
        cols
    }

    /// Drop indices that no longer exist in `table`
    pub fn clamp_to(&mut self, table: &Table) {
        let rows = table.row_count();
        let cols = table.column_count();
        self.cells.retain(|c| {
            c.col < cols && (c.is_header() || c.data_row().is_some_and(|r| r < rows))
        });
        self.rows.retain(|&r| r < rows);
        self.columns.retain(|&c| c < cols);
        if self.anchor.is_some_and(|a| !self.cells.contains(&a)) {
            self.anchor = None;
        }
    }
}

/// Nearest cell of `table` to `coord`, `None` when the table has no columns
fn clamp_coord(coord: CellCoord, table: &Table) -> Option<CellCoord> {
    let last_col = table.column_count().checked_sub(1)?;
    let last_row = table.row_count() as isize - 1;
    Some(CellCoord::new(
        coord.row.clamp(HEADER_ROW, last_row),
        coord.col.min(last_col),
    ))
}
