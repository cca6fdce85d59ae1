// tests/catalog_override.rs

use quiz_meta_editor_lib::{
    activity_log::{recent_activity, take_failure_warn_pending, ActivityKind},
    command::{self, DocumentEditor},
    context::AppCtx,
    error::AppError,
};
use std::fs;

#[test]
fn override_catalog_drives_default_school() {
    let td = tempfile::tempdir().unwrap();
    let catalog_path = td.path().join("schools.json5");
    fs::write(
        &catalog_path,
        r#"{
          "HEC": { departments: ["Econ", "Finance"], levels: ["L1", "L2"] },
          "ESSEC": { departments: ["BBA"], levels: ["1A"] },
        }"#,
    )
    .unwrap();

    let ctx = AppCtx::new(td.path().join("data")).with_catalog_path(Some(catalog_path));
    let state = quiz_meta_editor_lib::init_state(&ctx).expect("init_state");

    assert_eq!(state.catalog.first_school(), Some("HEC"));
    assert!(!take_failure_warn_pending(&state));

    let mut ed = DocumentEditor::new();
    ed.edit_text(r#"{"title":"Café Noir","department":"Econ"}"#);
    command::verify_document(&mut ed, &state);
    assert!(command::open_metadata_edit(&mut ed, &state));

    let meta = ed.session().unwrap().meta().clone();
    assert_eq!(meta.school, "HEC");
    assert_eq!(meta.department, "Econ");
    assert_eq!(meta.level, "L1");

    assert_eq!(
        command::save_metadata(&mut ed, &state).as_deref(),
        Some("cafe_noir_econ_l1_hec")
    );
}

#[test]
fn broken_override_falls_back_to_builtin_and_warns() {
    let td = tempfile::tempdir().unwrap();
    let catalog_path = td.path().join("schools.json5");
    fs::write(&catalog_path, "{ nope").unwrap();

    let ctx = AppCtx::new(td.path().join("data")).with_catalog_path(Some(catalog_path));
    let state = quiz_meta_editor_lib::init_state(&ctx).expect("init_state");

    assert_eq!(state.catalog.first_school(), Some("EM-LYON"));
    assert!(recent_activity(&state)
        .iter()
        .any(|e| e.kind == ActivityKind::CatalogFallback));
    assert!(take_failure_warn_pending(&state));
}

#[test]
fn activity_survives_restart() {
    let td = tempfile::tempdir().unwrap();
    let data = td.path().join("data");

    {
        let ctx = AppCtx::new(data.clone()).with_catalog_path(None);
        let state = quiz_meta_editor_lib::init_state(&ctx).unwrap();
        let mut ed = DocumentEditor::new();
        ed.edit_text("[]");
        command::verify_document(&mut ed, &state);
    }

    let ctx = AppCtx::new(data).with_catalog_path(None);
    let state = quiz_meta_editor_lib::init_state(&ctx).unwrap();
    let events = recent_activity(&state);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, ActivityKind::JsonInvalid);
}

#[test]
fn data_dir_that_is_a_file_fails_startup_with_io_error() {
    let td = tempfile::tempdir().unwrap();
    let blocker = td.path().join("data");
    fs::write(&blocker, "not a dir").unwrap();

    let ctx = AppCtx::new(blocker).with_catalog_path(None);
    match quiz_meta_editor_lib::init_state(&ctx) {
        Err(AppError::Io(_)) => {}
        Err(other) => panic!("expected Io, got: {:?}", other),
        Ok(_) => panic!("expected startup to fail"),
    }
}
