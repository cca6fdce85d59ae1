// src/ui/panel_meta_dialog.rs

use crate::ui::message::PanelMsgState;
use crate::ui::widgets::{choice_combo, ui_notice};
use eframe::egui;
use quiz_meta_editor_lib::command::DocumentEditor;
use quiz_meta_editor_lib::types::AppState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaDialogAction {
    Save,
    Cancel,
}

pub struct MetaDialog {
    msg: PanelMsgState,
}

impl MetaDialog {
    pub fn new() -> Self {
        Self {
            msg: PanelMsgState::default(),
        }
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
    }

    /// Renders the metadata form while the editor has an open session.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        editor: &mut DocumentEditor,
        state: &AppState,
        debug_ui: bool,
    ) -> Option<MetaDialogAction> {
        let session = editor.session_mut()?;
        let catalog = &state.catalog;
        let msg = &mut self.msg;

        let mut action = None;

        egui::Window::new("Edit metadata")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(420.0);

                ui.label("ID");
                let mut id = session.meta().id.clone();
                if ui.text_edit_singleline(&mut id).changed() {
                    session.set_id(id);
                }
                ui.weak(format!("On save: {}", session.preview_id()));
                ui.add_space(6.0);

                ui.label("Title");
                let mut title = session.meta().title.clone();
                if ui.text_edit_singleline(&mut title).changed() {
                    session.set_title(title);
                }
                ui.add_space(6.0);

                ui.label("Description");
                let mut description = session.meta().description.clone();
                if ui
                    .add(egui::TextEdit::multiline(&mut description).desired_rows(4))
                    .changed()
                {
                    session.set_description(description);
                }
                ui.add_space(6.0);

                ui.label("School");
                let schools: Vec<&str> = catalog.school_names().collect();
                if let Some(school) =
                    choice_combo(ui, "meta_school", &session.meta().school, &schools)
                {
                    let r = session.set_school(school, catalog);
                    if r.any() {
                        msg.set_info("Department and level were adjusted to the school's choices.");
                    } else {
                        msg.clear();
                    }
                }
                ui.add_space(6.0);

                let departments: Vec<&str> = session
                    .department_choices(catalog)
                    .iter()
                    .map(String::as_str)
                    .collect();
                let levels: Vec<&str> = session
                    .level_choices(catalog)
                    .iter()
                    .map(String::as_str)
                    .collect();

                if departments.is_empty() || levels.is_empty() {
                    ui_notice(
                        ui,
                        "This school is not in the catalog. Department and level are free text.",
                    );
                    ui.add_space(6.0);
                }

                ui.label("Department");
                if departments.is_empty() {
                    let mut department = session.meta().department.clone();
                    if ui.text_edit_singleline(&mut department).changed() {
                        session.set_department(department);
                    }
                } else if let Some(d) =
                    choice_combo(ui, "meta_department", &session.meta().department, &departments)
                {
                    session.set_department(d);
                }
                ui.add_space(6.0);

                ui.label("Level");
                if levels.is_empty() {
                    let mut level = session.meta().level.clone();
                    if ui.text_edit_singleline(&mut level).changed() {
                        session.set_level(level);
                    }
                } else if let Some(l) =
                    choice_combo(ui, "meta_level", &session.meta().level, &levels)
                {
                    session.set_level(l);
                }

                ui.add_space(8.0);
                msg.show(ui, debug_ui);
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        action = Some(MetaDialogAction::Cancel);
                    }
                    if ui.button("Save").clicked() {
                        action = Some(MetaDialogAction::Save);
                    }
                });
            });

        if action.is_some() {
            self.msg.clear();
        }

        action
    }
}
