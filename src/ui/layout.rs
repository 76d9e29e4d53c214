use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui};

use crate::QuizApp;
use crate::app::TestMode;
use crate::model::AppState;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.strong("📘 Web Technologies");
            ui.separator();
            if ui
                .selectable_label(app.state == AppState::Home, "🏠 Notes")
                .clicked()
            {
                app.go_home();
            }
            if ui
                .selectable_label(app.state == AppState::PracticeTest, "📝 Practice Test")
                .clicked()
            {
                app.open_test(TestMode::Practice);
            }
            if ui
                .selectable_label(app.state == AppState::McqTest, "⚡ MCQ Test")
                .clicked()
            {
                app.open_test(TestMode::Mcq);
            }
        });
    });
}

/// Bottom line with the last action message, if any.
pub fn bottom_panel(app: &QuizApp, ctx: &Context) {
    if app.message.is_empty() {
        return;
    }
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.label(&app.message);
    });
}

/// Scrollable central panel with content capped at `max_width`.
pub fn simple_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(16, 16))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        inner(ui);
                    });
            });
        });
    });
}

/// Two equally sized buttons side by side. Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled(left.1, Button::new(left.0).min_size([btn_w, 36.0].into()))
            .clicked();
        clicked_right = ui
            .add_enabled(right.1, Button::new(right.0).min_size([btn_w, 36.0].into()))
            .clicked();
    });
    (clicked_left, clicked_right)
}
