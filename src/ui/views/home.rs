use egui::{Context, ProgressBar, RichText};

use crate::QuizApp;
use crate::app::TestMode;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::{simple_panel, two_button_row};

/// Course outline with per-unit progress and the entry points to both tests.
pub fn ui_home(app: &mut QuizApp, ctx: &Context) {
    let cards = app.unit_cards();
    let mut to_mark: Option<String> = None;
    let mut open: Option<TestMode> = None;

    simple_panel(ctx, 720.0, |ui| {
        ui.heading(RichText::new("Web Technologies: Notes & Quiz").size(28.0));
        ui.add_space(8.0);

        let w = ui.available_width();
        let (practice, mcq) = two_button_row(
            ui,
            w,
            ("📝 Practice Test (1 hour)", true),
            ("⚡ Timed MCQ Test", true),
        );
        if practice {
            open = Some(TestMode::Practice);
        }
        if mcq {
            open = Some(TestMode::Mcq);
        }
        ui.add_space(16.0);

        for card in &cards {
            egui::CollapsingHeader::new(card.label())
                .id_salt(card.id)
                .show(ui, |ui| {
                    ui.label(format!("{} hours", card.hours));
                    ui.add(
                        ProgressBar::new(card.progress as f32 / 100.0)
                            .text(format!("{}%", card.progress)),
                    );
                    ui.add_space(4.0);
                    for section in &card.sections {
                        let label = if section.done {
                            format!("✅ {}", section.title)
                        } else {
                            format!("Mark \"{}\" as complete", section.title)
                        };
                        if big_list_button(ui, label, w, 28.0, !section.done) {
                            to_mark = Some(section.key.clone());
                        }
                    }
                });
            ui.add_space(8.0);
        }
    });

    if let Some(key) = to_mark {
        app.mark_section(&key);
    }
    if let Some(mode) = open {
        app.open_test(mode);
    }
}
