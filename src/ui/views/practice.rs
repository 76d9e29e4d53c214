use egui::{Context, ProgressBar, RichText, Ui};

use crate::QuizApp;
use crate::app::{QuestionReview, TestMode};
use crate::config::TestKind;
use crate::quiz::{ActiveRun, RunState, Score};
use crate::ui::helpers::{GREEN, RED, difficulty_color, format_hms, tier_color};
use crate::ui::layout::{simple_panel, two_button_row};

const MODE: TestMode = TestMode::Practice;

enum Action {
    Select(TestKind),
    Start,
    Answer(usize),
    Previous,
    Next,
    Submit,
    Retake,
}

/// One-hour practice test: setup, the running test and the review.
pub fn ui_practice(app: &mut QuizApp, ctx: &Context) {
    let mut action = None;
    match app.practice.state() {
        RunState::Setup => {
            let cards = app.preset_cards(MODE);
            simple_panel(ctx, 680.0, |ui| {
                ui.heading("📝 Practice Test");
                ui.label("Choose what to practice. You have one hour for the whole test.");
                ui.add_space(12.0);
                for card in &cards {
                    if ui.radio(card.selected, card.label()).clicked() {
                        action = Some(Action::Select(card.kind));
                    }
                }
                ui.add_space(12.0);
                if ui.button(RichText::new("▶ Start Test").size(18.0)).clicked() {
                    action = Some(Action::Start);
                }
            });
        }
        RunState::Active(run) => {
            let remaining = app.practice.remaining_seconds();
            simple_panel(ctx, 720.0, |ui| ui_active(ui, run, remaining, &mut action));
        }
        RunState::Results(finished) => {
            let rows = app.review_rows(MODE);
            simple_panel(ctx, 720.0, |ui| {
                ui_results(ui, &finished.score, finished.timed_out, &rows, &mut action)
            });
        }
    }

    match action {
        Some(Action::Select(kind)) => app.select_kind(MODE, kind),
        Some(Action::Start) => app.start_test(MODE),
        Some(Action::Answer(i)) => {
            app.answer(MODE, i);
        }
        Some(Action::Previous) => app.previous_question(MODE),
        Some(Action::Next) => app.next_question(MODE),
        Some(Action::Submit) => app.submit_test(MODE),
        Some(Action::Retake) => app.retake_test(MODE),
        None => {}
    }
}

fn ui_active(ui: &mut Ui, run: &ActiveRun, remaining: u32, action: &mut Option<Action>) {
    let total = run.questions.len();
    let question = run.current();
    let selected = run.selected_for_current();

    ui.horizontal(|ui| {
        ui.strong(format!("Question {} of {}", run.current_index + 1, total));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let text = RichText::new(format!("⏱ {}", format_hms(remaining))).monospace();
            ui.label(if remaining < 300 { text.color(RED) } else { text });
        });
    });
    ui.add(ProgressBar::new((run.current_index + 1) as f32 / total as f32));
    ui.label(format!("Answered: {}/{}", run.answers.len(), total));
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label(question.category.as_str());
        ui.label("·");
        ui.colored_label(difficulty_color(question.difficulty), question.difficulty.label());
    });
    ui.label(RichText::new(&question.stem).size(18.0));
    ui.add_space(8.0);

    for (i, option) in question.options.iter().enumerate() {
        if ui.radio(selected == Some(i), option.as_str()).clicked() {
            *action = Some(Action::Answer(i));
        }
    }
    ui.add_space(16.0);

    let w = ui.available_width();
    let (prev, next) = two_button_row(
        ui,
        w,
        ("⬅ Previous", run.current_index > 0),
        ("Next ➡", !run.is_last()),
    );
    if prev {
        *action = Some(Action::Previous);
    }
    if next {
        *action = Some(Action::Next);
    }
    ui.add_space(8.0);
    if ui.button("✅ Submit Test").clicked() {
        *action = Some(Action::Submit);
    }
}

fn ui_results(
    ui: &mut Ui,
    score: &Score,
    timed_out: bool,
    rows: &[QuestionReview],
    action: &mut Option<Action>,
) {
    let tier = score.tier();
    ui.heading("Test Results");
    if timed_out {
        ui.colored_label(RED, "⏰ Time is up. Your answers were submitted automatically.");
    }
    ui.label(
        RichText::new(format!(
            "{}/{} ({}%)",
            score.correct_count,
            rows.len(),
            score.percentage
        ))
        .size(32.0)
        .color(tier_color(tier)),
    );
    ui.label(tier.message());
    ui.add_space(8.0);
    if ui.button("🔄 Retake Test").clicked() {
        *action = Some(Action::Retake);
    }
    ui.separator();

    for row in rows {
        ui.add_space(6.0);
        let mark = if row.is_correct() { "✔" } else { "✖" };
        ui.strong(format!("{mark} {}. {}", row.number, row.stem));
        for (i, option) in row.options.iter().enumerate() {
            if i == row.correct_index {
                ui.colored_label(GREEN, format!("  ✔ {option}"));
            } else if row.selected == Some(i) {
                ui.colored_label(RED, format!("  ✖ {option}"));
            } else {
                ui.label(format!("    {option}"));
            }
        }
        if row.selected.is_none() {
            ui.weak("  Not answered");
        }
        ui.label(RichText::new(format!("💡 {}", row.explanation)).italics());
    }
}
