// tests/common/mod.rs

#![allow(dead_code)]

use quiz_meta_editor_lib::{command::DocumentEditor, context::AppCtx, types::AppState};

pub const FULL_DOC: &str = r#"{
  "id": "old_id",
  "title": "Marchés Financiers",
  "description": "Chapitre 3",
  "department": "BBA",
  "level": "L2",
  "school": "KEDGE",
  "questions": [
    { "q": "2+2?", "choices": ["3", "4"], "answer": 1 }
  ],
  "extra": 42
}"#;

pub struct TestEnv {
    // Keep tempdirs alive for the duration of the test.
    _td_state: tempfile::TempDir,

    pub state: AppState,
    ctx: AppCtx,
}

impl TestEnv {
    pub fn ctx(&self) -> &AppCtx {
        &self.ctx
    }
}

/// Fresh data dir, built-in catalog.
pub fn setup() -> TestEnv {
    let td_state = tempfile::tempdir().expect("tempdir state");

    let ctx = AppCtx::new(td_state.path().to_path_buf()).with_catalog_path(None);
    let state = quiz_meta_editor_lib::init_state(&ctx).expect("init_state");

    TestEnv {
        _td_state: td_state,
        state,
        ctx,
    }
}

pub fn editor_with(text: &str) -> DocumentEditor {
    let mut ed = DocumentEditor::new();
    ed.edit_text(text);
    ed
}

pub fn field(text: &str, key: &str) -> Option<serde_json::Value> {
    let v: serde_json::Value = serde_json::from_str(text).expect("document parses");
    v.get(key).cloned()
}
