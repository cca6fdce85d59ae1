// src/activity_log/model.rs

use serde::{Deserialize, Serialize};

pub const LOG_FILE_NAME: &str = "activity.jsonl";

/// Events kept in memory and shown in the Activity view.
pub const MAX_EVENTS: usize = 50;

/// Lines the file may hold before it is rewritten from memory.
pub const COMPACT_AT_LINES: usize = MAX_EVENTS * 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    JsonInvalid,
    IdRepaired,
    MetadataSaved,
    ExportWritten,
    ExportFailed,
    CatalogFallback,
}

impl ActivityKind {
    /// Failures raise the one-shot warning banner.
    pub fn is_failure(self) -> bool {
        matches!(self, ActivityKind::ExportFailed | ActivityKind::CatalogFallback)
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::JsonInvalid => "JSON invalid",
            ActivityKind::IdRepaired => "Id repaired",
            ActivityKind::MetadataSaved => "Metadata saved",
            ActivityKind::ExportWritten => "Export written",
            ActivityKind::ExportFailed => "Export failed",
            ActivityKind::CatalogFallback => "Catalog fallback",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub seq: u64,
    pub ts_ms: i64,
    pub kind: ActivityKind,
    pub detail: String,
}
