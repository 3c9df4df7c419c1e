//! Cell style message handlers

use crate::commands::Cmd;
use crate::messages::StyleMsg;
use crate::model::AppModel;

/// Handle style edits
pub fn update_style(model: &mut AppModel, msg: StyleMsg) -> Option<Cmd> {
    match msg {
        StyleMsg::Apply { coord, style } => {
            let styles = model.styles.set_style(coord, &style);
            if styles == *model.styles {
                return None;
            }
            model.commit_styles(styles);
            Some(Cmd::Redraw)
        }

        StyleMsg::ApplyToSelection(style) => {
            if model.selection.cells.is_empty() {
                model.ui.warn("Select cells to style");
                return Some(Cmd::Redraw);
            }
            let coords: Vec<_> = model.selection.cells.iter().copied().collect();
            let styles = model.styles.set_style_many(coords, &style);
            if styles == *model.styles {
                return None;
            }
            model.commit_styles(styles);
            Some(Cmd::Redraw)
        }

        StyleMsg::ClearAll => {
            if model.styles.is_empty() {
                return None;
            }
            let styles = model.styles.clear_all();
            model.commit_styles(styles);
            Some(Cmd::Redraw)
        }
    }
}
