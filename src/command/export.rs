// src/command/export.rs

use crate::activity_log::{record_activity, ActivityKind};
use crate::context::AppCtx;
use crate::error::{AppError, AppResult};
use crate::types::{AppState, ExportFile};

use rand::rngs::OsRng;
use rand::RngCore;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::editor::DocumentEditor;

/// Writes `file.contents` to `dest` through a sibling temp file and a rename.
/// The temp file never outlives this call.
pub fn write_export(dest: &Path, file: &ExportFile) -> AppResult<()> {
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        Some(_) => Path::new("."),
        None => return Err(AppError::InvalidPath),
    };

    if dest.file_name().is_none() {
        return Err(AppError::InvalidPath);
    }

    let mut rnd = [0u8; 12];
    OsRng.fill_bytes(&mut rnd);
    let tmp = parent.join(format!(".export.{}.tmp", hex::encode(rnd)));

    let mut f = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(&tmp)
        .map_err(|e| AppError::ExportWriteFailed(e.to_string()))?;

    let write_res: AppResult<()> = (|| {
        f.write_all(file.contents.as_bytes())
            .map_err(|e| AppError::ExportWriteFailed(e.to_string()))?;

        f.flush()
            .map_err(|e| AppError::ExportSyncFailed(e.to_string()))?;
        f.sync_all()
            .map_err(|e| AppError::ExportSyncFailed(e.to_string()))?;

        fs::rename(&tmp, dest).map_err(|e| AppError::ExportRenameFailed(e.to_string()))?;

        Ok(())
    })();

    drop(f);

    if write_res.is_err() {
        let _ = fs::remove_file(&tmp);
    }

    write_res
}

/// Download to a path picked by the user (save dialog).
pub fn download_to_path(
    editor: &DocumentEditor,
    state: &AppState,
    dest: &Path,
) -> AppResult<PathBuf> {
    let file = editor.download().ok_or(AppError::ExportNotReady)?;

    match write_export(dest, &file) {
        Ok(()) => {
            record_activity(
                state,
                ActivityKind::ExportWritten,
                format!("{} ({} bytes)", dest.display(), file.contents.len()),
            );
            Ok(dest.to_path_buf())
        }
        Err(e) => {
            record_activity(state, ActivityKind::ExportFailed, e.to_string());
            Err(e)
        }
    }
}

/// Download into `<app_data>/exports/<file_name>`.
pub fn download_to_dir(
    editor: &DocumentEditor,
    state: &AppState,
    ctx: &AppCtx,
) -> AppResult<PathBuf> {
    let file = editor.download().ok_or(AppError::ExportNotReady)?;

    let dir = ctx.exports_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        let err = AppError::ExportWriteFailed(e.to_string());
        record_activity(state, ActivityKind::ExportFailed, err.to_string());
        return Err(err);
    }

    download_to_path(editor, state, &dir.join(&file.file_name))
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JSON_MIME;

    fn sample(contents: &str) -> ExportFile {
        ExportFile {
            file_name: "quiz.json".into(),
            mime: JSON_MIME,
            contents: contents.into(),
        }
    }

    fn list_tmp_files(dir: &Path) -> Vec<PathBuf> {
        let mut out = vec![];
        if let Ok(rd) = fs::read_dir(dir) {
            for e in rd.flatten() {
                let p = e.path();
                if let Some(name) = p.file_name().and_then(|s| s.to_str()) {
                    if name.starts_with(".export.") && name.ends_with(".tmp") {
                        out.push(p);
                    }
                }
            }
        }
        out
    }

    #[test]
    fn writes_exact_contents_and_leaves_no_tmp() {
        let td = tempfile::tempdir().expect("tempdir");
        let dest = td.path().join("quiz.json");

        write_export(&dest, &sample("{\n  \"id\": \"q\"\n}")).expect("write");

        assert_eq!(fs::read_to_string(&dest).unwrap(), "{\n  \"id\": \"q\"\n}");
        assert!(list_tmp_files(td.path()).is_empty());
    }

    #[test]
    fn replaces_existing_file() {
        let td = tempfile::tempdir().expect("tempdir");
        let dest = td.path().join("quiz.json");
        fs::write(&dest, "old").unwrap();

        write_export(&dest, &sample("new")).expect("write");
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn failed_rename_removes_tmp() {
        let td = tempfile::tempdir().expect("tempdir");
        // a non-empty directory cannot be replaced by a file rename
        let dest = td.path().join("occupied");
        fs::create_dir_all(dest.join("child")).unwrap();

        match write_export(&dest, &sample("x")) {
            Err(AppError::ExportRenameFailed(_)) => {}
            other => panic!("expected ExportRenameFailed, got: {:?}", other),
        }
        assert!(list_tmp_files(td.path()).is_empty());
    }

    #[test]
    fn missing_parent_dir_fails_without_residue() {
        let td = tempfile::tempdir().expect("tempdir");
        let dest = td.path().join("no_such_dir").join("quiz.json");

        match write_export(&dest, &sample("x")) {
            Err(AppError::ExportWriteFailed(_)) => {}
            other => panic!("expected ExportWriteFailed, got: {:?}", other),
        }
        assert!(list_tmp_files(td.path()).is_empty());
    }
}
