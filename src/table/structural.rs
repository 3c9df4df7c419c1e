//! Table-shape operations beyond the single row/column primitives
//!
//! Column widths, bulk deletes, uniform alignment, sort, transpose and
//! tab-separated paste. All functions are pure.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::io::Cursor;

use super::{default_header_name, Alignment, Table};

/// Width given to columns that have no explicit width
pub const DEFAULT_COLUMN_WIDTH: f64 = 150.0;

/// Narrowest width a column can be resized to
pub const MIN_COLUMN_WIDTH: f64 = 50.0;

/// Reasons a bulk structural edit is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditRefusal {
    #[error("nothing is selected")]
    EmptySelection,
    #[error("cannot delete every row of the table")]
    WouldRemoveAllRows,
    #[error("cannot delete every column of the table")]
    WouldRemoveAllColumns,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl Table {
    /// Set the width of one column, clamped to [`MIN_COLUMN_WIDTH`]
    ///
    /// Creates the width list on first use, filled with the default width.
    /// Non-finite widths are ignored since JSON cannot represent them.
    pub fn update_column_width(&self, index: usize, width: f64) -> Self {
        let n = self.column_count();
        if index >= n || !width.is_finite() {
            return self.clone();
        }

        let mut table = self.normalized();
        let widths = table
            .column_widths
            .get_or_insert_with(|| vec![DEFAULT_COLUMN_WIDTH; n]);
        widths[index] = width.max(MIN_COLUMN_WIDTH);
        table
    }

    /// Remove several data rows at once
    pub fn remove_rows(&self, indices: &BTreeSet<usize>) -> Result<Self, EditRefusal> {
        let doomed: BTreeSet<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.rows.len())
            .collect();
        if doomed.is_empty() {
            return Err(EditRefusal::EmptySelection);
        }
        if doomed.len() >= self.rows.len() {
            return Err(EditRefusal::WouldRemoveAllRows);
        }

        let mut table = self.clone();
        table.rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|(i, _)| !doomed.contains(i))
            .map(|(_, row)| row.clone())
            .collect();
        Ok(table)
    }

    /// Remove several columns at once
    pub fn remove_columns(&self, indices: &BTreeSet<usize>) -> Result<Self, EditRefusal> {
        let n = self.column_count();
        let doomed: BTreeSet<usize> = indices.iter().copied().filter(|&i| i < n).collect();
        if doomed.is_empty() {
            return Err(EditRefusal::EmptySelection);
        }
        if doomed.len() >= n {
            return Err(EditRefusal::WouldRemoveAllColumns);
        }

        fn keep<T: Clone>(items: &[T], doomed: &BTreeSet<usize>) -> Vec<T> {
            items
                .iter()
                .enumerate()
                .filter(|(i, _)| !doomed.contains(i))
                .map(|(_, item)| item.clone())
                .collect()
        }

        let source = self.normalized();
        Ok(Table {
            headers: keep(&source.headers, &doomed),
            rows: source.rows.iter().map(|row| keep(row, &doomed)).collect(),
            alignments: keep(&source.alignments, &doomed),
            column_widths: source.column_widths.as_ref().map(|w| keep(w, &doomed)),
        })
    }

    /// Give every listed column the same alignment
    pub fn set_alignments(&self, columns: &BTreeSet<usize>, alignment: Alignment) -> Self {
        columns
            .iter()
            .fold(self.clone(), |table, &col| table.update_alignment(col, alignment))
    }

    /// Stable sort of the data rows by one column
    pub fn sort_by_column(&self, col: usize, order: SortOrder) -> Self {
        if col >= self.column_count() {
            return self.clone();
        }

        let mut table = self.clone();
        table.rows.sort_by(|a, b| {
            let a = a.get(col).map(String::as_str).unwrap_or("");
            let b = b.get(col).map(String::as_str).unwrap_or("");
            let ord = compare_cells(a, b);
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
        table
    }

    /// Swap rows and columns
    ///
    /// The first column becomes the header row: the new headers are the
    /// original first header followed by the first cell of every data row.
    pub fn transpose(&self) -> Self {
        let source = self.rectangular();
        let Some(corner) = source.headers.first() else {
            return self.clone();
        };

        let mut headers = vec![corner.clone()];
        headers.extend(source.rows.iter().map(|row| row[0].clone()));

        let rows = (1..source.column_count())
            .map(|j| {
                let mut row = vec![source.headers[j].clone()];
                row.extend(source.rows.iter().map(|r| r[j].clone()));
                row
            })
            .collect();

        Table::new(headers, rows)
    }

    /// Append tab-separated clipboard rows, widening the table as needed
    ///
    /// Existing rows are not padded; cells for new columns read as empty.
    pub fn paste_tsv(&self, text: &str) -> Self {
        let pasted = parse_tsv(text);
        if pasted.is_empty() {
            return self.clone();
        }

        let mut table = self.normalized();
        let needed = pasted.iter().map(Vec::len).max().unwrap_or(0);
        while table.headers.len() < needed {
            let n = table.headers.len();
            table.headers.push(default_header_name(n));
            table.alignments.push(Alignment::Left);
            if let Some(widths) = table.column_widths.as_mut() {
                widths.push(DEFAULT_COLUMN_WIDTH);
            }
        }
        table.rows.extend(pasted);
        table
    }
}

/// Order two cell values: numerically when both are numbers, otherwise by
/// case-folded text with the exact text as tie-breaker
///
/// Numbers sort before text so the ordering stays total on mixed columns.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    }
}

fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Split clipboard text into rows of cells on tabs and newlines
fn parse_tsv(text: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(true)
        .from_reader(Cursor::new(text.as_bytes()));

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        match record {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
                if row.iter().all(|c| c.is_empty()) {
                    continue;
                }
                rows.push(row);
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable pasted row {}: {}", line + 1, e);
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn set(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    fn grid() -> Table {
        Table::new(
            strings(&["Name", "Age", "City"]),
            vec![
                strings(&["Ann", "31", "Oslo"]),
                strings(&["Bob", "27", "Rome"]),
                strings(&["Cid", "45", "Lima"]),
            ],
        )
    }

    #[test]
    fn test_update_column_width_creates_widths() {
        let table = grid().update_column_width(1, 220.0);
        assert_eq!(
            table.column_widths,
            Some(vec![DEFAULT_COLUMN_WIDTH, 220.0, DEFAULT_COLUMN_WIDTH])
        );
    }

    #[test]
    fn test_update_column_width_clamps() {
        let table = grid().update_column_width(0, 10.0);
        assert_eq!(table.column_width(0), MIN_COLUMN_WIDTH);
    }

    #[test]
    fn test_update_column_width_ignores_non_finite() {
        let table = grid();
        assert_eq!(table.update_column_width(0, f64::INFINITY), table);
        assert_eq!(table.update_column_width(0, f64::NAN), table);

        let sized = table.update_column_width(0, 90.0);
        assert_eq!(sized.update_column_width(0, f64::NEG_INFINITY), sized);
    }

    #[test]
    fn test_update_column_width_out_of_range() {
        let table = grid();
        assert_eq!(table.update_column_width(3, 200.0), table);
    }

    #[test]
    fn test_remove_rows() {
        let table = grid().remove_rows(&set(&[0, 2])).unwrap();
        assert_eq!(table.rows, vec![strings(&["Bob", "27", "Rome"])]);
    }

    #[test]
    fn test_remove_rows_refusals() {
        let table = grid();
        assert_eq!(table.remove_rows(&set(&[])), Err(EditRefusal::EmptySelection));
        assert_eq!(table.remove_rows(&set(&[7])), Err(EditRefusal::EmptySelection));
        assert_eq!(
            table.remove_rows(&set(&[0, 1, 2])),
            Err(EditRefusal::WouldRemoveAllRows)
        );
    }

    #[test]
    fn test_remove_columns() {
        let mut table = grid();
        table.column_widths = Some(vec![60.0, 70.0, 80.0]);
        let table = table.remove_columns(&set(&[0, 2])).unwrap();

        assert_eq!(table.headers, strings(&["Age"]));
        assert_eq!(table.alignments, vec![Alignment::Left]);
        assert_eq!(table.column_widths, Some(vec![70.0]));
        assert_eq!(table.rows[2], strings(&["45"]));
    }

    #[test]
    fn test_remove_columns_refuses_all() {
        assert_eq!(
            grid().remove_columns(&set(&[0, 1, 2])),
            Err(EditRefusal::WouldRemoveAllColumns)
        );
    }

    #[test]
    fn test_set_alignments() {
        let table = grid().set_alignments(&set(&[1, 2, 9]), Alignment::Right);
        assert_eq!(
            table.alignments,
            vec![Alignment::Left, Alignment::Right, Alignment::Right]
        );
    }

    #[test]
    fn test_sort_numeric_ascending() {
        let table = Table::new(
            strings(&["N"]),
            vec![strings(&["3"]), strings(&["1"]), strings(&["2"])],
        );
        let sorted = table.sort_by_column(0, SortOrder::Ascending);
        assert_eq!(
            sorted.rows,
            vec![strings(&["1"]), strings(&["2"]), strings(&["3"])]
        );
    }

    #[test]
    fn test_sort_numeric_not_lexical() {
        let table = Table::new(
            strings(&["N"]),
            vec![strings(&["10"]), strings(&["9"]), strings(&["100"])],
        );
        let sorted = table.sort_by_column(0, SortOrder::Descending);
        assert_eq!(
            sorted.rows,
            vec![strings(&["100"]), strings(&["10"]), strings(&["9"])]
        );
    }

    #[test]
    fn test_sort_text_is_case_insensitive() {
        let table = Table::new(
            strings(&["W"]),
            vec![strings(&["banana"]), strings(&["Apple"]), strings(&["cherry"])],
        );
        let sorted = table.sort_by_column(0, SortOrder::Ascending);
        assert_eq!(
            sorted.rows,
            vec![strings(&["Apple"]), strings(&["banana"]), strings(&["cherry"])]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let table = Table::new(
            strings(&["K", "V"]),
            vec![
                strings(&["b", "1"]),
                strings(&["a", "2"]),
                strings(&["b", "3"]),
                strings(&["a", "4"]),
            ],
        );
        let sorted = table.sort_by_column(0, SortOrder::Ascending);
        let order: Vec<&str> = sorted.rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(order, vec!["2", "4", "1", "3"]);

        let sorted = table.sort_by_column(0, SortOrder::Descending);
        let order: Vec<&str> = sorted.rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(order, vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_sort_mixed_column_is_total() {
        let table = Table::new(
            strings(&["M"]),
            vec![
                strings(&["10"]),
                strings(&["2"]),
                strings(&["1x"]),
                strings(&[""]),
            ],
        );
        let sorted = table.sort_by_column(0, SortOrder::Ascending);
        assert_eq!(
            sorted.rows,
            vec![strings(&["2"]), strings(&["10"]), strings(&[""]), strings(&["1x"])]
        );
    }

    #[test]
    fn test_transpose() {
        let table = grid().transpose();
        assert_eq!(table.headers, strings(&["Name", "Ann", "Bob", "Cid"]));
        assert_eq!(
            table.rows,
            vec![
                strings(&["Age", "31", "27", "45"]),
                strings(&["City", "Oslo", "Rome", "Lima"]),
            ]
        );
        assert_eq!(table.alignments, vec![Alignment::Left; 4]);
    }

    #[test]
    fn test_transpose_pads_short_rows() {
        let table = Table::new(strings(&["A", "B"]), vec![strings(&["x"])]).transpose();
        assert_eq!(table.headers, strings(&["A", "x"]));
        assert_eq!(table.rows, vec![strings(&["B", ""])]);
    }

    #[test]
    fn test_transpose_twice_restores_rectangular_table() {
        let table = grid();
        assert_eq!(table.transpose().transpose(), table);
    }

    #[test]
    fn test_paste_tsv_widens_headers() {
        let table = Table::new(strings(&["A"]), vec![strings(&["old"])]);
        let table = table.paste_tsv("1\t2\t3\n4\t5\n");

        assert_eq!(table.headers, strings(&["A", "Header 2", "Header 3"]));
        assert_eq!(table.alignments.len(), 3);
        assert_eq!(
            table.rows,
            vec![
                strings(&["old"]),
                strings(&["1", "2", "3"]),
                strings(&["4", "5"]),
            ]
        );
        assert_eq!(table.cell(0, 2), "");
    }

    #[test]
    fn test_paste_empty_is_noop() {
        let table = grid();
        assert_eq!(table.paste_tsv("\n\n"), table);
    }
}
