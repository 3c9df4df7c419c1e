//! App message handlers (import, file operations, stored tables)

use std::path::Path;

use crate::commands::Cmd;
use crate::export;
use crate::import::{self, ImportFormat};
use crate::messages::AppMsg;
use crate::model::AppModel;
use crate::style::StyleStore;

/// Handle app messages (import, file operations, stored tables)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Import { format, content } => {
            load_document(model, format, &content, "clipboard");
            Some(Cmd::Redraw)
        }

        AppMsg::LoadFile(path) => {
            model.ui.is_loading = true;
            Some(Cmd::LoadFile { path })
        }

        AppMsg::FileLoaded { path, result } => {
            model.ui.is_loading = false;
            match result {
                Ok(content) => {
                    let format = ImportFormat::from_path(&path).unwrap_or(ImportFormat::Markdown);
                    load_document(model, format, &content, &path.display().to_string());
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", path.display(), e);
                    model.ui.error(format!("Error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::SaveAs { path, format } => {
            let content = export::export(format, &model.table, &model.styles);
            model.ui.is_saving = true;
            Some(Cmd::SaveFile { path, content })
        }

        AppMsg::SaveCompleted(result) => {
            model.ui.is_saving = false;
            match result {
                Ok(path) => model.ui.info(format!("Saved: {}", path.display())),
                Err(e) => {
                    tracing::warn!("Save failed: {}", e);
                    model.ui.error(format!("Error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::StoreCurrent { name, description } => {
            let id = model
                .files
                .create(name.clone(), (*model.table).clone(), description);
            tracing::info!("Stored current table as '{}' ({})", name, id);
            persist_files(model);
            model.ui.info(format!("Stored: {}", name));
            Some(Cmd::Redraw)
        }

        AppMsg::OpenStored(id) => {
            let Some(file) = model.files.get(&id) else {
                model.ui.warn(format!("No stored table with id {}", id));
                return Some(Cmd::Redraw);
            };
            let (name, table) = (file.name.clone(), file.data.normalized());
            model.selection.clear();
            model.commit(table, StyleStore::default());
            model.ui.info(format!("Opened: {}", name));
            Some(Cmd::Redraw)
        }

        AppMsg::DeleteStored(id) => {
            match model.files.remove(&id) {
                Some(file) => {
                    persist_files(model);
                    model.ui.info(format!("Deleted: {}", file.name));
                }
                None => model.ui.warn(format!("No stored table with id {}", id)),
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Replace the table with imported content; failures leave the model untouched
fn load_document(model: &mut AppModel, format: ImportFormat, content: &str, origin: &str) {
    match import::import(format, content) {
        Ok(table) => {
            tracing::info!(
                "Imported {}x{} table from {}",
                table.row_count(),
                table.column_count(),
                origin
            );
            model.selection.clear();
            model.commit(table, StyleStore::default());
            model.ui.info(format!("Loaded: {}", origin));
        }
        Err(e) => {
            tracing::warn!("Import from {} failed: {}", origin, e);
            model.ui.error(format!("Import failed: {}", e));
        }
    }
}

fn persist_files(model: &mut AppModel) {
    let Some(path) = model.files_path.clone() else {
        return;
    };
    if let Err(e) = save_store(model, &path) {
        tracing::warn!("Failed to save file store to {}: {}", path.display(), e);
        model.ui.error(format!("Could not save stored tables: {}", e));
    }
}

fn save_store(model: &AppModel, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    model.files.save_to(path)
}
