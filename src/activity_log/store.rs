// src/activity_log/store.rs

use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::AppResult;

use super::model::{ActivityEvent, ActivityKind, COMPACT_AT_LINES, LOG_FILE_NAME, MAX_EVENTS};

/// Append-only journal of editor activity with a bounded in-memory view.
pub struct ActivityLog {
    path: PathBuf,
    events: VecDeque<ActivityEvent>,
    lines_on_disk: usize,
    unseen_failure: bool,
}

impl ActivityLog {
    /// Opens (or starts) the journal in `dir`. A missing file is an empty
    /// journal; lines that do not parse are skipped.
    pub fn open(dir: &Path) -> AppResult<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(LOG_FILE_NAME);

        let text = match fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let mut events = VecDeque::with_capacity(MAX_EVENTS);
        let mut lines_on_disk = 0;
        for line in text.lines() {
            lines_on_disk += 1;
            if let Ok(ev) = serde_json::from_str::<ActivityEvent>(line) {
                push_bounded(&mut events, ev);
            }
        }

        Ok(Self {
            path,
            events,
            lines_on_disk,
            unseen_failure: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn push(&mut self, kind: ActivityKind, detail: impl Into<String>) {
        let ev = ActivityEvent {
            seq: self.events.back().map_or(1, |e| e.seq.saturating_add(1)),
            ts_ms: chrono::Utc::now().timestamp_millis(),
            kind,
            detail: detail.into(),
        };

        if kind.is_failure() {
            self.unseen_failure = true;
        }

        push_bounded(&mut self.events, ev.clone());

        // best effort: the in-memory view stays authoritative for this run
        let _ = if self.lines_on_disk >= COMPACT_AT_LINES {
            self.rewrite()
        } else {
            self.append(&ev)
        };
    }

    /// Oldest first.
    pub fn recent(&self) -> Vec<ActivityEvent> {
        self.events.iter().cloned().collect()
    }

    pub fn take_unseen_failure(&mut self) -> bool {
        std::mem::take(&mut self.unseen_failure)
    }

    fn append(&mut self, ev: &ActivityEvent) -> io::Result<()> {
        let mut line = serde_json::to_string(ev)?;
        line.push('\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?
            .write_all(line.as_bytes())?;

        self.lines_on_disk += 1;
        Ok(())
    }

    fn rewrite(&mut self) -> io::Result<()> {
        let mut body = String::new();
        for ev in &self.events {
            body.push_str(&serde_json::to_string(ev)?);
            body.push('\n');
        }

        let tmp = self.path.with_extension("jsonl.tmp");
        fs::write(&tmp, body)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        self.lines_on_disk = self.events.len();
        Ok(())
    }
}

fn push_bounded(events: &mut VecDeque<ActivityEvent>, ev: ActivityEvent) {
    if events.len() == MAX_EVENTS {
        events.pop_front();
    }
    events.push_back(ev);
}

// ======================================================
// Unit Tests
// ======================================================
