// src/lib.rs

pub mod activity_log;
pub mod catalog;
pub mod command;
pub mod context;
pub mod error;
pub mod quiz_id;
pub mod types;

use crate::activity_log::{record_activity, ActivityKind, ActivityLog};
use crate::catalog::Catalog;
use crate::context::AppCtx;
use crate::error::AppResult;
use crate::types::AppState;
use std::sync::Mutex;

pub fn init_state(ctx: &AppCtx) -> AppResult<AppState> {
    std::fs::create_dir_all(&ctx.app_data_dir)?;

    let activity_log = ActivityLog::open(&ctx.app_data_dir)?;

    let (catalog, catalog_err) = match ctx.catalog_path.as_deref() {
        None => (Catalog::builtin(), None),
        Some(path) => match Catalog::load_from_path(path) {
            Ok(c) => (c, None),
            Err(e) => (
                Catalog::builtin(),
                Some(format!("{}: {e}", path.display())),
            ),
        },
    };

    let state = AppState {
        catalog,
        activity_log: Mutex::new(activity_log),
    };

    if let Some(msg) = catalog_err {
        record_activity(&state, ActivityKind::CatalogFallback, msg);
    }

    Ok(state)
}
