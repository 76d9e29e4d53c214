// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

use crate::model::Difficulty;
use crate::quiz::ScoreTier;

pub const GREEN: Color32 = Color32::from_rgb(22, 163, 74);
pub const YELLOW: Color32 = Color32::from_rgb(202, 138, 4);
pub const RED: Color32 = Color32::from_rgb(220, 38, 38);

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Visual state of one option in the timed quiz.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OptionState {
    Open,
    Correct,
    Wrong,
    Dimmed,
}

impl OptionState {
    pub fn for_option(index: usize, correct: usize, selected: Option<usize>, revealed: bool) -> Self {
        if !revealed {
            OptionState::Open
        } else if index == correct {
            OptionState::Correct
        } else if selected == Some(index) {
            OptionState::Wrong
        } else {
            OptionState::Dimmed
        }
    }
}

/// Full-width option button; only clickable while `Open`.
pub fn option_button(ui: &mut Ui, text: &str, state: OptionState, width: f32) -> bool {
    let label = match state {
        OptionState::Correct => RichText::new(format!("{text}  ✔")).color(GREEN),
        OptionState::Wrong => RichText::new(format!("{text}  ✖")).color(RED),
        OptionState::Open | OptionState::Dimmed => RichText::new(text),
    };
    let button = Button::new(label).min_size(Vec2::new(width, 36.0));
    ui.add_enabled(state == OptionState::Open, button).clicked()
}

pub fn tier_color(tier: ScoreTier) -> Color32 {
    match tier {
        ScoreTier::Excellent => GREEN,
        ScoreTier::Good => YELLOW,
        ScoreTier::KeepStudying => RED,
    }
}

pub fn difficulty_color(difficulty: Difficulty) -> Color32 {
    match difficulty {
        Difficulty::Easy => GREEN,
        Difficulty::Medium => YELLOW,
        Difficulty::Hard => RED,
    }
}

/// `HH:MM:SS`, used for the one-hour practice test.
pub fn format_hms(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// `M:SS`, used for per-question countdowns.
pub fn format_ms(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats() {
        assert_eq!(format_hms(3600), "01:00:00");
        assert_eq!(format_hms(3599), "00:59:59");
        assert_eq!(format_ms(75), "1:15");
        assert_eq!(format_ms(9), "0:09");
    }

    #[test]
    fn option_states_after_reveal() {
        assert_eq!(OptionState::for_option(1, 2, Some(1), false), OptionState::Open);
        assert_eq!(OptionState::for_option(2, 2, Some(1), true), OptionState::Correct);
        assert_eq!(OptionState::for_option(1, 2, Some(1), true), OptionState::Wrong);
        assert_eq!(OptionState::for_option(0, 2, Some(1), true), OptionState::Dimmed);
        // timed out: only the right answer is highlighted
        assert_eq!(OptionState::for_option(0, 2, None, true), OptionState::Dimmed);
    }
}
