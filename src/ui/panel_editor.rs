// src/ui/panel_editor.rs

use crate::ui::message::PanelMsgState;
use crate::ui::panel_meta_dialog::{MetaDialog, MetaDialogAction};
use crate::ui::widgets::{copy_icon_button, validity_badge};
use eframe::egui;
use quiz_meta_editor_lib::command::{self, DocumentEditor};
use quiz_meta_editor_lib::context::AppCtx;
use quiz_meta_editor_lib::types::{AppState, Validity};

pub struct EditorPanel {
    editor: DocumentEditor,
    dialog: MetaDialog,
    msg: PanelMsgState,
}

impl EditorPanel {
    pub fn new() -> Self {
        Self {
            editor: DocumentEditor::new(),
            dialog: MetaDialog::new(),
            msg: PanelMsgState::default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_editing()
    }

    pub fn clear_messages(&mut self) {
        self.msg.clear();
        self.dialog.clear_messages();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &AppState, ctx: &AppCtx) {
        ui.heading("🧠 Quiz review");
        ui.weak("Verify your quiz JSON and download it in the right format.");
        ui.add_space(8.0);

        let editing = self.editor.is_editing();

        ui.horizontal(|ui| {
            ui.label("Document JSON");
            if copy_icon_button(ui, !self.editor.text().is_empty(), "Copy JSON") {
                ui.ctx().copy_text(self.editor.text().to_string());
            }
        });

        let r = ui.add_enabled(
            !editing,
            egui::TextEdit::multiline(self.editor.text_buffer_mut())
                .desired_rows(16)
                .desired_width(f32::INFINITY)
                .code_editor()
                .hint_text("Paste your JSON here…"),
        );
        if r.changed() {
            self.editor.mark_text_edited();
            self.msg.clear();
        }

        ui.add_space(6.0);
        validity_badge(ui, self.editor.validity());
        ui.add_space(6.0);

        let valid = self.editor.validity() == Validity::Valid;

        ui.add_enabled_ui(!editing, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Verify").clicked() {
                    self.msg.clear();
                    command::verify_document(&mut self.editor, state);
                }

                if ui.add_enabled(valid, egui::Button::new("Edit")).clicked() {
                    self.msg.clear();
                    self.dialog.clear_messages();
                    command::open_metadata_edit(&mut self.editor, state);
                }

                if ui
                    .add_enabled(valid, egui::Button::new("Download"))
                    .clicked()
                {
                    self.download(state, ctx);
                }

                ui.add_space(12.0);

                if ui.button("Clear").clicked() {
                    self.editor.reset();
                    self.clear_messages();
                }
            });
        });

        ui.add_space(6.0);
        self.msg.show(ui, ctx.debug_ui);

        if let Some(action) = self.dialog.show(ui.ctx(), &mut self.editor, state, ctx.debug_ui) {
            match action {
                MetaDialogAction::Save => {
                    if let Some(id) = command::save_metadata(&mut self.editor, state) {
                        self.msg.set_success(format!("Metadata saved. id: {id}"));
                    }
                }
                MetaDialogAction::Cancel => self.editor.cancel_edit(),
            }
        }
    }

    fn download(&mut self, state: &AppState, ctx: &AppCtx) {
        self.msg.clear();

        let Some(file) = self.editor.download() else {
            self.msg.set_warn("Verify the JSON before downloading.");
            return;
        };

        let start_dir = ctx.exports_dir();
        let _ = std::fs::create_dir_all(&start_dir);

        let Some(dest) = rfd::FileDialog::new()
            .set_directory(&start_dir)
            .set_file_name(&file.file_name)
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };

        match command::download_to_path(&self.editor, state, &dest) {
            Ok(path) => self.msg.set_success(format!("Saved {}", path.display())),
            Err(e) => self.msg.from_app_error(&e),
        }
    }
}
