// src/ui/mod.rs

pub mod nav;
pub mod panel_activity;
pub mod panel_editor;
pub mod panel_meta_dialog;

pub mod message;
pub mod widgets;

use eframe::egui;
use std::sync::Arc;

use message::PanelMsgState;
use nav::LeftNav;
use panel_activity::ActivityPanel;
use panel_editor::EditorPanel;
use quiz_meta_editor_lib::activity_log::take_failure_warn_pending;
use quiz_meta_editor_lib::context::AppCtx;
use quiz_meta_editor_lib::types::AppState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Editor,
    Activity,
}

pub struct UiApp {
    state: Arc<AppState>,
    ctx: Arc<AppCtx>,

    route: Route,
    prev_route: Route,

    nav: LeftNav,
    editor: EditorPanel,
    activity: ActivityPanel,
    failure_warn: PanelMsgState,
}

impl UiApp {
    pub fn new(state: Arc<AppState>, ctx: Arc<AppCtx>) -> Self {
        Self {
            state,
            ctx,
            route: Route::Editor,
            prev_route: Route::Editor,
            nav: LeftNav::new(),
            editor: EditorPanel::new(),
            activity: ActivityPanel::new(),
            failure_warn: PanelMsgState::default(),
        }
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Route transition hooks
        if self.route != self.prev_route {
            self.editor.clear_messages();
            self.failure_warn.clear();

            if self.route == Route::Activity {
                self.activity.invalidate();
            }

            self.prev_route = self.route;
        }

        if take_failure_warn_pending(self.state.as_ref()) {
            self.failure_warn
                .set_warn("Something went wrong. See the Activity log.");
            self.activity.invalidate();
        }

        let nav_enabled = !self.editor.is_editing();
        self.nav.ui(ctx, &mut self.route, nav_enabled);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.failure_warn.show(ui, self.ctx.debug_ui);

            match self.route {
                Route::Editor => self.editor.ui(ui, self.state.as_ref(), &self.ctx),
                Route::Activity => self.activity.ui(ui, self.state.as_ref()),
            }
        });
    }
}
