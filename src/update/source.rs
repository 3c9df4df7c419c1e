//! Markdown source panel handlers
//!
//! Keystrokes schedule a debounced parse; a `ParseReady` whose revision has
//! been superseded is dropped.

use crate::commands::Cmd;
use crate::messages::SourceMsg;
use crate::model::AppModel;

pub fn update_source(model: &mut AppModel, msg: SourceMsg) -> Option<Cmd> {
    match msg {
        SourceMsg::Edit(text) => {
            let revision = model.source.edit(text);
            Some(Cmd::batch(vec![
                Cmd::Redraw,
                schedule_source_parse(model, revision),
            ]))
        }

        SourceMsg::ParseReady { revision } => {
            if !model.source.is_current(revision) {
                tracing::debug!(
                    "Skipping stale source parse: revision {} != current {}",
                    revision,
                    model.source.revision
                );
                return None;
            }
            apply_draft(model)
        }

        SourceMsg::Apply => apply_draft(model),

        SourceMsg::Revert => {
            let markdown = model.markdown();
            model.source.sync(markdown);
            Some(Cmd::Redraw)
        }
    }
}

/// Debounce command for the given source revision
pub fn schedule_source_parse(model: &AppModel, revision: u64) -> Cmd {
    Cmd::DebouncedSourceParse {
        revision,
        delay_ms: model.config.source_debounce_ms,
    }
}

/// Parse the draft and commit it when it differs from the table
fn apply_draft(model: &mut AppModel) -> Option<Cmd> {
    if !model.source.dirty {
        return None;
    }

    let Some(mut table) = model.source.parse().map(|t| t.normalized()) else {
        tracing::debug!(
            "Source draft does not parse: {}",
            model.source.error.as_deref().unwrap_or_default()
        );
        return Some(Cmd::Redraw);
    };

    if table.column_count() == model.table.column_count() {
        table.column_widths = model.table.column_widths.clone();
    }

    if table == *model.table {
        model.source.dirty = false;
        return Some(Cmd::Redraw);
    }

    // Keep the user's text as typed rather than the normalized form
    let draft = std::mem::take(&mut model.source.text);
    model.commit_table(table);
    model.source.text = draft;
    Some(Cmd::Redraw)
}
