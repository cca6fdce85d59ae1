// src/ui/nav.rs

use crate::ui::Route;
use eframe::egui;

pub struct LeftNav;

impl LeftNav {
    pub fn new() -> Self {
        Self
    }

    /// Pure view: mutates route on click. Disabled while the edit form is open.
    pub fn ui(&mut self, ctx: &egui::Context, route: &mut Route, enabled: bool) {
        egui::SidePanel::left("left_nav")
            .resizable(false)
            .min_width(140.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.add_enabled_ui(enabled, |ui| {
                    nav_btn(ui, route, Route::Editor, "Editor");
                    nav_btn(ui, route, Route::Activity, "Activity");
                });
            });
    }
}

fn nav_btn(ui: &mut egui::Ui, route: &mut Route, target: Route, label: &str) {
    let selected = *route == target;
    if ui.selectable_label(selected, label).clicked() {
        *route = target;
    }
}
