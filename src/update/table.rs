//! Table message handlers (content, structure, layout)

use crate::commands::Cmd;
use crate::messages::TableMsg;
use crate::model::AppModel;
use crate::style::StyleStore;
use crate::table::{EditRefusal, Table};

/// Handle table edits
pub fn update_table(model: &mut AppModel, msg: TableMsg) -> Option<Cmd> {
    match msg {
        TableMsg::SetCell { row, col, value } => {
            // Missing cells read as empty, so writing "" there changes nothing
            if model.table.cell(row, col) == value {
                return None;
            }
            let table = model.table.update_cell(row, col, &value);
            if table == *model.table {
                return refuse(model, format!("Cell {}-{} does not exist", row, col));
            }
            model.commit_table(table);
            Some(Cmd::Redraw)
        }

        TableMsg::AddRow { at } => {
            let table = model.table.add_row(at);
            model.commit_table(table);
            Some(Cmd::Redraw)
        }

        TableMsg::RemoveRow(index) => {
            let table = model.table.remove_row(index);
            commit_or_refuse(model, table, format!("Row {} does not exist", index))
        }

        TableMsg::AddColumn { at } => {
            let n = model.table.column_count();
            let inserted_at = at.filter(|&i| i <= n).unwrap_or(n);
            let mut table = model.table.add_column(at);
            if let Some(width) = table
                .column_widths
                .as_mut()
                .and_then(|w| w.get_mut(inserted_at))
            {
                *width = model.config.default_column_width;
            }
            model.commit_table(table);
            Some(Cmd::Redraw)
        }

        TableMsg::RemoveColumn(index) => {
            if model.table.column_count() <= 1 {
                return refuse(model, "A table needs at least one column");
            }
            let table = model.table.remove_column(index);
            commit_or_refuse(model, table, format!("Column {} does not exist", index))
        }

        TableMsg::SetAlignment { col, alignment } => {
            let table = model.table.update_alignment(col, alignment);
            if table == *model.table {
                return None;
            }
            model.commit_table(table);
            Some(Cmd::Redraw)
        }

        TableMsg::AlignSelection(alignment) => {
            let columns = model.selection.touched_columns();
            if columns.is_empty() {
                return refuse(model, EditRefusal::EmptySelection.to_string());
            }
            let table = model.table.set_alignments(&columns, alignment);
            if table == *model.table {
                return None;
            }
            model.commit_table(table);
            Some(Cmd::Redraw)
        }

        TableMsg::SetColumnWidth { col, width } => {
            if !width.is_finite() {
                return refuse(model, format!("Invalid column width {}", width));
            }
            let width = width.max(model.config.min_column_width);
            let table = model.table.update_column_width(col, width);
            if table == *model.table {
                return None;
            }
            model.commit_table(table);
            Some(Cmd::Redraw)
        }

        TableMsg::DeleteSelectedRows => {
            let rows = model.selection.touched_rows();
            match model.table.remove_rows(&rows) {
                Ok(table) => {
                    tracing::debug!("Deleting {} selected rows", rows.len());
                    model.selection.clear();
                    model.commit_table(table);
                    Some(Cmd::Redraw)
                }
                Err(refusal) => refuse(model, refusal.to_string()),
            }
        }

        TableMsg::DeleteSelectedColumns => {
            let columns = model.selection.touched_columns();
            match model.table.remove_columns(&columns) {
                Ok(table) => {
                    tracing::debug!("Deleting {} selected columns", columns.len());
                    model.selection.clear();
                    model.commit_table(table);
                    Some(Cmd::Redraw)
                }
                Err(refusal) => refuse(model, refusal.to_string()),
            }
        }

        TableMsg::SortBySelection(order) => {
            let first_col = model.selection.first_cell().map(|c| c.col);
            let Some(col) = first_col.or_else(|| model.selection.columns.first().copied()) else {
                return refuse(model, "Select a cell in the column to sort by");
            };
            let table = model.table.sort_by_column(col, order);
            if table == *model.table {
                model.ui.info("Already sorted");
                return Some(Cmd::Redraw);
            }
            model.commit_table(table);
            Some(Cmd::Redraw)
        }

        TableMsg::Transpose => {
            let table = model.table.transpose();
            if table == *model.table {
                return refuse(model, "Nothing to transpose");
            }
            model.selection.clear();
            // Coordinates mean something else after a transpose
            model.commit(table, StyleStore::default());
            Some(Cmd::Redraw)
        }

        TableMsg::Paste(text) => {
            let table = model.table.paste_tsv(&text);
            commit_or_refuse(model, table, "Clipboard has no rows to paste")
        }

        TableMsg::Replace(table) => {
            model.commit_table(table);
            Some(Cmd::Redraw)
        }

        TableMsg::New { rows, cols } => {
            model.selection.clear();
            model.commit(Table::create_empty(rows, cols.max(1)), StyleStore::default());
            Some(Cmd::Redraw)
        }
    }
}

fn commit_or_refuse(model: &mut AppModel, table: Table, reason: impl Into<String>) -> Option<Cmd> {
    if table == *model.table {
        return refuse(model, reason);
    }
    model.commit_table(table);
    Some(Cmd::Redraw)
}

/// Warn without touching the table or history
fn refuse(model: &mut AppModel, reason: impl Into<String>) -> Option<Cmd> {
    let reason = reason.into();
    tracing::warn!("Edit refused: {}", reason);
    model.ui.warn(reason);
    Some(Cmd::Redraw)
}
