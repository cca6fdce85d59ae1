// src/activity_log/mod.rs

mod api;
mod model;
mod store;

pub use api::{recent_activity, record_activity, take_failure_warn_pending};

pub use model::{ActivityEvent, ActivityKind};

pub use store::ActivityLog;
