mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Timers advance here, once per frame, and nowhere else.
        if let Some(wait) = self.tick() {
            ctx.request_repaint_after(wait);
        }

        top_panel(self, ctx);
        bottom_panel(self, ctx);

        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::PracticeTest => views::practice::ui_practice(self, ctx),
            AppState::McqTest => views::mcq::ui_mcq(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.preferences);
    }
}
