// src/context.rs

use std::path::PathBuf;

pub const APP_QUALIFIER: &str = "org";
pub const APP_ORG: &str = "quizmeta";
pub const APP_ID: &str = "quiz-meta-editor";

pub const EXPORTS_DIR: &str = "exports";

pub const ENV_DATA_DIR: &str = "QUIZ_META_DATA_DIR";
pub const ENV_DEBUG: &str = "QUIZ_META_DEBUG";
pub const ENV_CATALOG: &str = "QUIZ_META_CATALOG";

#[derive(Debug)]
pub struct AppCtx {
    pub app_data_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub debug_ui: bool,
}

impl AppCtx {
    pub fn new(app_data_dir: PathBuf) -> Self {
        let debug_ui = std::env::var(ENV_DEBUG)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let catalog_path = std::env::var(ENV_CATALOG)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            app_data_dir,
            catalog_path,
            debug_ui,
        }
    }

    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        self.catalog_path = path;
        self
    }

    /// <app_data>/exports
    pub fn exports_dir(&self) -> PathBuf {
        self.app_data_dir.join(EXPORTS_DIR)
    }
}
