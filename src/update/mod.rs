//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod history;
mod selection;
mod source;
mod style;
mod table;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::ModelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use history::update_history;
pub use selection::update_selection;
pub use source::{schedule_source_parse, update_source};
pub use style::update_style;
pub use table::update_table;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Table(m) => table::update_table(model, m),
        Msg::Style(m) => style::update_style(model, m),
        Msg::Selection(m) => selection::update_selection(model, m),
        Msg::History(m) => history::update_history(model, m),
        Msg::Source(m) => source::update_source(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after model shape and logs diffs for debugging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = ModelSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = ModelSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "model", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Payloads that carry whole documents are abbreviated.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{AppMsg, SourceMsg, TableMsg};

    match msg {
        Msg::Table(TableMsg::Replace(t)) => {
            format!("Table::Replace({}x{})", t.row_count(), t.column_count())
        }
        Msg::Table(TableMsg::Paste(text)) => format!("Table::Paste({} bytes)", text.len()),
        Msg::Table(m) => format!("Table::{:?}", m),
        Msg::Style(m) => format!("Style::{:?}", m),
        Msg::Selection(m) => format!("Selection::{:?}", m),
        Msg::History(m) => format!("History::{:?}", m),
        Msg::Source(SourceMsg::Edit(text)) => format!("Source::Edit({} bytes)", text.len()),
        Msg::Source(m) => format!("Source::{:?}", m),
        Msg::App(AppMsg::Import { format, content }) => {
            format!("App::Import({:?}, {} bytes)", format, content.len())
        }
        Msg::App(AppMsg::FileLoaded { path, result }) => format!(
            "App::FileLoaded({}, {})",
            path.display(),
            if result.is_ok() { "ok" } else { "err" }
        ),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
