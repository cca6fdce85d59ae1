// src/ui/message.rs

use quiz_meta_editor_lib::error::{AppError, UserMsgKind};

use super::egui;
use super::egui::{Color32, Ui};

#[derive(Clone, Debug, Default)]
pub struct PanelMsgState {
    kind: Option<UserMsgKind>,
    short: Option<String>,
    detail: Option<String>,
}

impl PanelMsgState {
    pub fn clear(&mut self) {
        self.kind = None;
        self.short = None;
        self.detail = None;
    }

    pub fn set_success(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Success, short);
    }

    pub fn set_warn(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Warn, short);
    }

    pub fn set_info(&mut self, short: impl Into<String>) {
        self.set(UserMsgKind::Info, short);
    }

    fn set(&mut self, kind: UserMsgKind, short: impl Into<String>) {
        self.kind = Some(kind);
        self.short = Some(short.into());
        self.detail = None;
    }

    pub fn from_app_error(&mut self, err: &AppError) {
        let m = err.user_msg();
        self.kind = Some(m.kind);
        self.short = Some(m.short.to_string());
        self.detail = m.detail;
    }

    pub fn show(&self, ui: &mut Ui, debug_ui: bool) {
        let (Some(kind), Some(short)) = (self.kind, self.short.as_deref()) else {
            return;
        };

        let text = if debug_ui {
            self.detail.as_deref().unwrap_or(short)
        } else {
            short
        };

        let (stroke, fill) = match kind {
            UserMsgKind::Success => (Color32::from_rgb(0, 220, 90), Color32::from_rgb(0, 80, 40)),
            UserMsgKind::Warn => (Color32::from_rgb(255, 170, 0), Color32::from_rgb(90, 60, 0)),
            UserMsgKind::Error => (Color32::from_rgb(255, 60, 60), Color32::from_rgb(90, 0, 0)),
            UserMsgKind::Info => (Color32::from_rgb(80, 180, 255), Color32::from_rgb(10, 40, 80)),
        };

        egui::Frame::NONE
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(egui::CornerRadius::same(8u8))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.colored_label(stroke, text);
            });
    }
}
