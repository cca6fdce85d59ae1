// src/error.rs

use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    // --------------------------------------------------
    // generic / plumbing
    // --------------------------------------------------
    Io(std::io::Error),
    InvalidPath,

    // --------------------------------------------------
    // json text
    // --------------------------------------------------
    InvalidJson(String),
    JsonNotObject,
    JsonSerialize(String),

    // --------------------------------------------------
    // organization catalog
    // --------------------------------------------------
    CatalogReadFailed(String),
    CatalogTooLarge { bytes: u64, max: u64 },
    CatalogInvalid(String),
    CatalogEmpty,

    // --------------------------------------------------
    // export
    // --------------------------------------------------
    ExportNotReady,
    ExportWriteFailed(String),
    ExportSyncFailed(String),
    ExportRenameFailed(String),
}

impl AppError {
    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let mut kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            // generic
            Io(_) => "File operation failed.",
            InvalidPath => "Invalid path.",

            // json
            InvalidJson(_) => "Invalid JSON.",
            JsonNotObject => "JSON value must be an object.",
            JsonSerialize(_) => "JSON formatting failed.",

            // catalog
            CatalogReadFailed(_) => "Failed to read school catalog.",
            CatalogTooLarge { .. } => "School catalog is too large.",
            CatalogInvalid(_) => "School catalog is invalid.",
            CatalogEmpty => "School catalog is empty.",

            // export
            ExportNotReady => {
                kind = UserMsgKind::Warn;
                "Verify the JSON before downloading."
            }
            ExportWriteFailed(_) => "Failed to write export file.",
            ExportSyncFailed(_) => "Failed to sync export file.",
            ExportRenameFailed(_) => "Failed to replace export file.",
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AppError::*;

        match self {
            Io(e) => write!(f, "io error: {e}"),
            InvalidPath => write!(f, "invalid path"),

            InvalidJson(s) => write!(f, "invalid json: {s}"),
            JsonNotObject => write!(f, "json not object"),
            JsonSerialize(s) => write!(f, "json serialize failed: {s}"),

            CatalogReadFailed(s) => write!(f, "catalog read failed: {s}"),
            CatalogTooLarge { bytes, max } => write!(f, "catalog too large: {bytes} > {max}"),
            CatalogInvalid(s) => write!(f, "catalog invalid: {s}"),
            CatalogEmpty => write!(f, "catalog has no schools"),

            ExportNotReady => write!(f, "export requires a verified document"),
            ExportWriteFailed(s) => write!(f, "export write failed: {s}"),
            ExportSyncFailed(s) => write!(f, "export sync failed: {s}"),
            ExportRenameFailed(s) => write!(f, "export rename failed: {s}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_not_ready_is_a_warning() {
        let m = AppError::ExportNotReady.user_msg();
        assert_eq!(m.kind, UserMsgKind::Warn);
    }

    #[test]
    fn detail_carries_display_text() {
        let err = AppError::InvalidJson("expected value at line 1".into());
        let m = err.user_msg();
        assert_eq!(m.kind, UserMsgKind::Error);
        assert_eq!(m.short, "Invalid JSON.");
        assert_eq!(
            m.detail.as_deref(),
            Some("invalid json: expected value at line 1")
        );
    }

    #[test]
    fn io_errors_convert_through_question_mark() {
        fn create(dir: &std::path::Path) -> AppResult<()> {
            std::fs::create_dir_all(dir)?;
            Ok(())
        }

        let td = tempfile::tempdir().expect("tempdir");
        let file = td.path().join("f");
        std::fs::write(&file, "x").expect("write");

        let err = create(&file).expect_err("file blocks dir");
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.user_msg().short, "File operation failed.");
    }
}
