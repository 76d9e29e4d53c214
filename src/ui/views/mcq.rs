use egui::{Context, ProgressBar, RichText, Ui};

use crate::QuizApp;
use crate::app::{PresetCard, TestMode};
use crate::config::TestKind;
use crate::quiz::{ActiveRun, FinishedRun, RunState};
use crate::ui::helpers::{
    OptionState, RED, big_list_button, difficulty_color, format_ms, option_button, tier_color,
};
use crate::ui::layout::{simple_panel, two_button_row};

const MODE: TestMode = TestMode::Mcq;

enum Action {
    Select(TestKind),
    Start,
    Answer(usize),
    Next,
    TryAgain,
    Home,
}

pub fn ui_mcq(app: &mut QuizApp, ctx: &Context) {
    let mut action = None;
    match app.mcq.state() {
        RunState::Setup => {
            let cards = app.preset_cards(MODE);
            simple_panel(ctx, 680.0, |ui| ui_setup(ui, &cards, &mut action));
        }
        RunState::Active(run) => {
            let remaining = app.mcq.remaining_seconds();
            simple_panel(ctx, 680.0, |ui| ui_active(ui, run, remaining, &mut action));
        }
        RunState::Results(finished) => {
            simple_panel(ctx, 680.0, |ui| ui_results(ui, finished, &mut action));
        }
    }

    match action {
        Some(Action::Select(kind)) => app.select_kind(MODE, kind),
        Some(Action::Start) => app.start_test(MODE),
        Some(Action::Answer(i)) => {
            app.answer(MODE, i);
        }
        Some(Action::Next) => app.next_question(MODE),
        Some(Action::TryAgain) => app.retry_test(MODE),
        Some(Action::Home) => app.go_home(),
        None => {}
    }
}

fn ui_setup(ui: &mut Ui, cards: &[PresetCard], action: &mut Option<Action>) {
    ui.heading("⚡ Timed MCQ Test");
    ui.label("Each question has its own countdown. Harder questions are worth more points.");
    ui.add_space(12.0);
    let w = ui.available_width();
    for card in cards {
        let label = if card.selected {
            format!("▶ {}", card.label())
        } else {
            card.label()
        };
        if big_list_button(ui, label, w, 40.0, true) {
            *action = Some(Action::Select(card.kind));
        }
    }
    ui.add_space(12.0);
    if ui.button(RichText::new("▶ Start").size(18.0)).clicked() {
        *action = Some(Action::Start);
    }
}

fn ui_active(ui: &mut Ui, run: &ActiveRun, remaining: u32, action: &mut Option<Action>) {
    let total = run.questions.len();
    let question = run.current();
    let selected = run.selected_for_current();

    ui.horizontal(|ui| {
        ui.strong(format!("Question {} of {}", run.current_index + 1, total));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let text = RichText::new(format!("⏱ {}", format_ms(remaining)))
                .monospace()
                .size(18.0);
            ui.label(if remaining <= 10 { text.color(RED) } else { text });
        });
    });
    ui.add(ProgressBar::new(run.current_index as f32 / total as f32));
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.colored_label(difficulty_color(question.difficulty), question.difficulty.label());
        ui.label(format!("· {} pts", question.points));
    });
    ui.label(RichText::new(&question.stem).size(18.0));
    ui.add_space(8.0);

    let w = ui.available_width();
    for (i, option) in question.options.iter().enumerate() {
        let state = OptionState::for_option(i, question.correct_index, selected, run.revealed);
        if option_button(ui, option, state, w) {
            *action = Some(Action::Answer(i));
        }
    }

    if run.revealed {
        ui.add_space(8.0);
        ui.label(RichText::new(format!("💡 {}", question.explanation)).italics());
        ui.add_space(8.0);
        let next = if run.is_last() { "🏁 Finish" } else { "Next ➡" };
        if ui.button(next).clicked() {
            *action = Some(Action::Next);
        }
    }
}

fn ui_results(ui: &mut Ui, finished: &FinishedRun, action: &mut Option<Action>) {
    let score = &finished.score;
    let total = finished.questions.len();
    let tier = score.tier();

    ui.heading("Quiz Complete");
    ui.label(
        RichText::new(format!("{} / {} points", score.earned_points, score.max_points))
            .size(32.0)
            .color(tier_color(tier)),
    );
    ui.label(format!("{}%", score.percentage));
    ui.label(format!("Answered {}/{}", score.answered_count, total));
    ui.label(tier.message());
    ui.add_space(12.0);

    ui.columns(3, |cols| {
        cols[0].vertical_centered(|ui| {
            ui.strong(format!("{}%", score.percentage));
            ui.weak("Accuracy");
        });
        cols[1].vertical_centered(|ui| {
            ui.strong(score.earned_points.to_string());
            ui.weak("Points");
        });
        cols[2].vertical_centered(|ui| {
            ui.strong(format!("{}/{}", score.correct_count, total));
            ui.weak("Questions");
        });
    });
    ui.add_space(16.0);

    let w = ui.available_width();
    let (again, home) = two_button_row(ui, w, ("🔄 Try Again", true), ("🏠 Back to Notes", true));
    if again {
        *action = Some(Action::TryAgain);
    }
    if home {
        *action = Some(Action::Home);
    }
}
