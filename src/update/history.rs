//! Undo/redo handlers

use crate::commands::Cmd;
use crate::messages::HistoryMsg;
use crate::model::AppModel;

pub fn update_history(model: &mut AppModel, msg: HistoryMsg) -> Option<Cmd> {
    let snapshot = match msg {
        HistoryMsg::Undo => model.history.undo().cloned(),
        HistoryMsg::Redo => model.history.redo().cloned(),
    };

    match snapshot {
        Some(snapshot) => {
            model.restore(&snapshot);
            Some(Cmd::Redraw)
        }
        None => {
            let text = match msg {
                HistoryMsg::Undo => "Nothing to undo",
                HistoryMsg::Redo => "Nothing to redo",
            };
            tracing::debug!("{}", text);
            model.ui.info(text);
            Some(Cmd::Redraw)
        }
    }
}
