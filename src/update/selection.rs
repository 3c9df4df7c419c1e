//! Selection message handlers
//!
//! Selection changes never create history entries; the present snapshot's
//! selection is kept in step instead.

use crate::commands::Cmd;
use crate::messages::SelectionMsg;
use crate::model::AppModel;

pub fn update_selection(model: &mut AppModel, msg: SelectionMsg) -> Option<Cmd> {
    let before = model.selection.clone();

    match msg {
        SelectionMsg::SelectCell(coord) => model.selection.select_cell(coord),
        SelectionMsg::ToggleCell(coord) => model.selection.toggle_cell(coord),
        SelectionMsg::ExtendTo(head) => model.selection.extend_to(head, &model.table),
        SelectionMsg::SelectRow(row) => model.selection.select_row(row, &model.table),
        SelectionMsg::SelectColumn(col) => model.selection.select_column(col, &model.table),
        SelectionMsg::SelectAll => model.selection.select_all(&model.table),
        SelectionMsg::Clear => model.selection.clear(),
    }

    if model.selection == before {
        return None;
    }
    model.sync_selection();
    Some(Cmd::Redraw)
}
