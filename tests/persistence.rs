//! Config, stored tables and file import/export through the runtime

mod common;

use std::time::Duration;

use common::{notice_text, scores, test_model};
use mdgrid::config::EditorConfig;
use mdgrid::config_paths;
use mdgrid::export::ExportFormat;
use mdgrid::files::FileStore;
use mdgrid::import::ImportFormat;
use mdgrid::messages::{AppMsg, Msg};
use mdgrid::model::{AppModel, NoticeLevel};
use mdgrid::runtime::Runtime;
use mdgrid::update::update;
use pretty_assertions::assert_eq;

// ========================================================================
// Config
// ========================================================================

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_config_roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let config = EditorConfig {
        max_history: 7,
        new_table_columns: 5,
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    let loaded = EditorConfig::load_from(&path);
    assert_eq!(loaded, config);
    assert_eq!(AppModel::new(loaded).table.column_count(), 5);
}

// ========================================================================
// Stored tables
// ========================================================================

#[test]
fn test_store_open_and_delete_persist() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store").join("files.json");
    let mut model = test_model(scores()).with_file_store(path.clone());

    update(
        &mut model,
        Msg::App(AppMsg::StoreCurrent {
            name: "Scores".into(),
            description: Some("weekly".into()),
        }),
    );
    let on_disk = FileStore::load_from(&path);
    assert_eq!(on_disk.len(), 1);
    let id = on_disk.files[0].id.clone();
    assert_eq!(on_disk.files[0].data, scores());

    update(&mut model, Msg::Table(mdgrid::messages::TableMsg::New { rows: 1, cols: 1 }));
    update(&mut model, Msg::App(AppMsg::OpenStored(id.clone())));
    assert_eq!(*model.table, scores());

    update(&mut model, Msg::App(AppMsg::DeleteStored(id)));
    assert!(FileStore::load_from(&path).is_empty());
}

#[test]
fn test_open_unknown_stored_table_warns() {
    let mut model = test_model(scores());
    update(&mut model, Msg::App(AppMsg::OpenStored("nope".into())));

    assert_eq!(*model.table, scores());
    assert_eq!(
        model.ui.active_notice().map(|n| n.level),
        Some(NoticeLevel::Warning)
    );
}

#[test]
fn test_corrupt_store_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("files.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(FileStore::load_from(&path).is_empty());
}

// ========================================================================
// Import
// ========================================================================

#[test]
fn test_import_csv_replaces_table() {
    let mut model = test_model(scores());
    update(
        &mut model,
        Msg::App(AppMsg::Import {
            format: ImportFormat::Csv,
            content: "city,pop\n\"Oslo, NO\",700000\n".into(),
        }),
    );

    assert_eq!(model.table.headers, vec!["city", "pop"]);
    assert_eq!(model.table.rows, vec![vec!["Oslo, NO", "700000"]]);
    assert_eq!(model.history_summary().past, 1);
}

#[test]
fn test_failed_import_leaves_table() {
    let mut model = test_model(scores());
    update(
        &mut model,
        Msg::App(AppMsg::Import {
            format: ImportFormat::Json,
            content: "42".into(),
        }),
    );

    assert_eq!(*model.table, scores());
    assert!(notice_text(&model).unwrap().starts_with("Import failed"));
}

// ========================================================================
// File IO via the runtime
// ========================================================================

#[test]
fn test_load_and_save_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.tsv");
    let output = dir.path().join("out.md");
    std::fs::write(&input, "a\tb\n1\t2\n").unwrap();

    let mut runtime = Runtime::new(test_model(scores()));
    runtime.dispatch(Msg::App(AppMsg::LoadFile(input)));
    assert!(runtime.model.ui.is_loading);
    runtime.pump_for(Duration::from_millis(300));

    assert!(!runtime.model.ui.is_loading);
    assert_eq!(runtime.model.table.headers, vec!["a", "b"]);

    runtime.dispatch(Msg::App(AppMsg::SaveAs {
        path: output.clone(),
        format: ExportFormat::Markdown,
    }));
    runtime.pump_for(Duration::from_millis(300));

    assert!(!runtime.model.ui.is_saving);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "| a | b |\n| --- | --- |\n| 1 | 2 |"
    );
}

#[test]
fn test_load_missing_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut runtime = Runtime::new(test_model(scores()));
    runtime.dispatch(Msg::App(AppMsg::LoadFile(dir.path().join("absent.md"))));
    runtime.pump_for(Duration::from_millis(300));

    assert_eq!(*runtime.model.table, scores());
    assert_eq!(
        runtime.model.ui.active_notice().map(|n| n.level),
        Some(NoticeLevel::Error)
    );
}
