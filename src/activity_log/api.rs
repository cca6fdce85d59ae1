// src/activity_log/api.rs

use crate::types::AppState;

use super::model::{ActivityEvent, ActivityKind};

/// Best effort: a poisoned lock drops the event.
pub fn record_activity(state: &AppState, kind: ActivityKind, detail: impl Into<String>) {
    if let Ok(mut log) = state.activity_log.lock() {
        log.push(kind, detail);
    }
}

pub fn recent_activity(state: &AppState) -> Vec<ActivityEvent> {
    state
        .activity_log
        .lock()
        .map(|log| log.recent())
        .unwrap_or_default()
}

pub fn take_failure_warn_pending(state: &AppState) -> bool {
    state
        .activity_log
        .lock()
        .map(|mut log| log.take_unseen_failure())
        .unwrap_or(false)
}
