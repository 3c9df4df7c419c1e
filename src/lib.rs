//! mdgrid - Elm-style Markdown table editor core
//!
//! This crate provides the table model, the GFM pipe-table codec, cell
//! styles, undo/redo history and the message/update loop that a grid UI
//! drives. Rendering is left to the embedding application.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod export;
pub mod files;
pub mod history;
pub mod import;
pub mod markdown;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod selection;
pub mod style;
pub mod table;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Runtime;
pub use table::{Alignment, CellCoord, Table};
