// tests/download_gating.rs

mod common;

use quiz_meta_editor_lib::{
    activity_log::{recent_activity, take_failure_warn_pending, ActivityKind},
    command,
    error::AppError,
};
use std::fs;

#[test]
fn unchecked_document_cannot_be_downloaded() {
    let env = common::setup();
    let ed = common::editor_with(common::FULL_DOC);

    assert!(ed.download().is_none());
    match command::download_to_dir(&ed, &env.state, env.ctx()) {
        Err(AppError::ExportNotReady) => {}
        other => panic!("expected ExportNotReady, got: {:?}", other),
    }
    assert!(!env.ctx().exports_dir().exists());
}

#[test]
fn invalid_document_cannot_be_downloaded() {
    let env = common::setup();
    let mut ed = common::editor_with("{not json");
    command::verify_document(&mut ed, &env.state);

    let dest = env.ctx().app_data_dir.join("out.json");
    match command::download_to_path(&ed, &env.state, &dest) {
        Err(AppError::ExportNotReady) => {}
        other => panic!("expected ExportNotReady, got: {:?}", other),
    }
    assert!(!dest.exists());
}

#[test]
fn verified_document_is_written_verbatim() {
    let env = common::setup();
    let mut ed = common::editor_with(common::FULL_DOC);
    command::verify_document(&mut ed, &env.state);

    let path = command::download_to_dir(&ed, &env.state, env.ctx()).expect("download");

    assert_eq!(
        path,
        env.ctx()
            .exports_dir()
            .join("marches_financiers_bba_l2_kedge.json")
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), ed.text());

    assert!(recent_activity(&env.state)
        .iter()
        .any(|e| e.kind == ActivityKind::ExportWritten));
    assert!(!take_failure_warn_pending(&env.state));
}

#[test]
fn download_does_not_touch_editor_state() {
    let env = common::setup();
    let mut ed = common::editor_with(r#"{"title":"A"}"#);
    command::verify_document(&mut ed, &env.state);
    let before = ed.text().to_string();

    let file = ed.download().expect("export");
    assert_eq!(file.file_name, "a___.json");
    assert_eq!(file.mime, "application/json");
    assert_eq!(ed.text(), before);
    assert!(ed.is_valid());
}

#[test]
fn failed_write_is_logged_as_failure() {
    let env = common::setup();
    let mut ed = common::editor_with(r#"{"title":"A"}"#);
    command::verify_document(&mut ed, &env.state);

    let dest = env.ctx().app_data_dir.join("missing_dir").join("a.json");
    assert!(command::download_to_path(&ed, &env.state, &dest).is_err());

    assert!(recent_activity(&env.state)
        .iter()
        .any(|e| e.kind == ActivityKind::ExportFailed));
    assert!(take_failure_warn_pending(&env.state));
}
