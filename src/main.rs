// src/main.rs

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use directories::ProjectDirs;
use quiz_meta_editor_lib::context::{AppCtx, APP_ID, APP_ORG, APP_QUALIFIER, ENV_DATA_DIR};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    let app_data_dir: PathBuf = if let Ok(p) = env::var(ENV_DATA_DIR) {
        PathBuf::from(p)
    } else if cfg!(debug_assertions) {
        // dev-only sandbox
        let home = env::var("HOME").expect("HOME not set");
        PathBuf::from(home).join(".local/share/quiz-meta-editor-dev")
    } else {
        let proj = ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_ID)
            .expect("Could not determine app data dir");
        proj.data_dir().to_path_buf()
    };

    std::fs::create_dir_all(&app_data_dir).expect("Could not create app data dir");

    let ctx = Arc::new(AppCtx::new(app_data_dir));

    let state = quiz_meta_editor_lib::init_state(ctx.as_ref()).expect("failed to init app state");
    let state = Arc::new(state);

    eframe::run_native(
        "Quiz Metadata Editor",
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(ui::UiApp::new(state.clone(), ctx.clone())))),
    )
}
