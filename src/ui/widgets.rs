// src/ui/widgets.rs

use eframe::egui;
use quiz_meta_editor_lib::types::Validity;

pub fn copy_icon_button(ui: &mut egui::Ui, enabled: bool, hover: &str) -> bool {
    ui.add_enabled(enabled, egui::Button::new("⧉"))
        .on_hover_text(hover)
        .clicked()
}

/// Labelled single choice. Returns the new value when the user picked a
/// different entry. `current` is listed even when it is not one of `choices`.
pub fn choice_combo(
    ui: &mut egui::Ui,
    id_salt: &'static str,
    current: &str,
    choices: &[&str],
) -> Option<String> {
    let mut picked = current.to_string();

    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(if current.is_empty() { "(none)" } else { current })
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            if !current.is_empty() && !choices.contains(&current) {
                ui.selectable_value(&mut picked, current.to_string(), current);
                ui.separator();
            }
            for c in choices {
                ui.selectable_value(&mut picked, c.to_string(), *c);
            }
        });

    (picked != current).then_some(picked)
}

/// "JSON valid" / "JSON invalid"; nothing while unchecked.
pub fn validity_badge(ui: &mut egui::Ui, validity: Validity) {
    match validity {
        Validity::Unchecked => {}
        Validity::Valid => {
            ui.colored_label(egui::Color32::from_rgb(0, 200, 90), "JSON valid ✅");
        }
        Validity::Invalid => {
            ui.colored_label(egui::Color32::from_rgb(255, 60, 60), "JSON invalid ❌");
        }
    }
}

pub fn ui_notice(ui: &mut egui::Ui, body: &str) {
    let accent = egui::Color32::from_rgb(255, 215, 90);

    let stroke = egui::Stroke::new(1.5, accent);
    let fill = egui::Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 48);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .stroke(stroke)
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("Notice")
                    .size(18.0)
                    .strong()
                    .color(accent),
            );
            ui.add_space(4.0);
            ui.label(body);
        });
}
