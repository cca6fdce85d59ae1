// src/types.rs

use std::sync::Mutex;

use crate::activity_log::ActivityLog;
use crate::catalog::Catalog;

pub const JSON_MIME: &str = "application/json";
pub const FALLBACK_EXPORT_STEM: &str = "data";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    Unchecked,
    Valid,
    Invalid,
}

/// Editable subset of a quiz document, alive only while the edit form is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub id: String,
    pub title: String,
    pub description: String,
    pub department: String,
    pub level: String,
    pub school: String,
}

/// What a school change corrected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub department_corrected: bool,
    pub level_corrected: bool,
}

impl Reconciliation {
    pub fn any(&self) -> bool {
        self.department_corrected || self.level_corrected
    }
}

/// A file ready to be handed to a save action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime: &'static str,
    pub contents: String,
}

pub struct AppState {
    // built once at startup, never mutated
    pub catalog: Catalog,

    // persistent + in-memory activity log
    pub activity_log: Mutex<ActivityLog>,
}
