// src/command/mod.rs

use crate::activity_log::{record_activity, ActivityKind};
use crate::types::{AppState, Validity};

pub mod editor;
pub mod export;
pub mod json_ops;
pub mod reconcile;

pub use editor::{DocumentEditor, EditSession, VerifyOutcome};
pub use export::{download_to_dir, download_to_path, write_export};
pub use reconcile::reconcile_school;

// --- State-aware wrappers: same transitions as the editor, plus activity log ---

pub fn verify_document(editor: &mut DocumentEditor, state: &AppState) -> Validity {
    match editor.verify() {
        VerifyOutcome::Invalid { reason } => {
            record_activity(state, ActivityKind::JsonInvalid, reason);
        }
        VerifyOutcome::IdRepaired { id } => {
            record_activity(state, ActivityKind::IdRepaired, id);
        }
        VerifyOutcome::Valid => {}
    }

    editor.validity()
}

pub fn open_metadata_edit(editor: &mut DocumentEditor, state: &AppState) -> bool {
    editor.open_edit(&state.catalog)
}

pub fn save_metadata(editor: &mut DocumentEditor, state: &AppState) -> Option<String> {
    let id = editor.save_edit()?;
    record_activity(state, ActivityKind::MetadataSaved, id.as_str());
    Some(id)
}
