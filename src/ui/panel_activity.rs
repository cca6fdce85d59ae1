// src/ui/panel_activity.rs

use eframe::egui;
use quiz_meta_editor_lib::activity_log::{recent_activity, ActivityEvent};
use quiz_meta_editor_lib::types::AppState;

pub struct ActivityPanel {
    rendered: String,
}

impl ActivityPanel {
    pub fn new() -> Self {
        Self {
            rendered: String::new(),
        }
    }

    /// Re-read the log next time the panel is shown.
    pub fn invalidate(&mut self) {
        self.rendered.clear();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.heading("Activity");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Recent editor activity");
            if ui.small_button("Refresh").clicked() {
                self.invalidate();
            }
        });
        ui.add_space(6.0);

        if self.rendered.is_empty() {
            self.rendered = render_events(recent_activity(state));
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.rendered)
                        .desired_rows(18)
                        .desired_width(f32::INFINITY)
                        .interactive(false)
                        .hint_text("No activity recorded."),
                );
            });
    }
}

fn render_events(mut evs: Vec<ActivityEvent>) -> String {
    if evs.is_empty() {
        return String::new();
    }

    evs.reverse();

    let mut out = String::new();
    for e in evs {
        let mark = if e.kind.is_failure() { " [!]" } else { "" };
        out.push_str(&format!(
            "#{} | {} | {}{}\n{}\n\n",
            e.seq,
            fmt_ts_ms_utc(e.ts_ms),
            e.kind.label(),
            mark,
            e.detail
        ));
    }
    out
}

fn fmt_ts_ms_utc(ts_ms: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(ts_ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{ts_ms} ms"),
    }
}
