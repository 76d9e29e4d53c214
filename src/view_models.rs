// src/view_models.rs

use crate::config::TestKind;

#[derive(Clone, Debug)]
pub struct PresetCard {
    pub kind: TestKind,
    pub name: String,
    pub difficulty: &'static str,
    /// Questions this preset will actually draw from the bank.
    pub question_count: usize,
    pub seconds_per_question: u32,
    pub selected: bool,
}

#[derive(Clone, Debug)]
pub struct QuestionReview {
    pub number: usize, // 1-based
    pub stem: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub selected: Option<usize>,
    pub explanation: String,
}

impl QuestionReview {
    pub fn is_correct(&self) -> bool {
        self.selected == Some(self.correct_index)
    }
}

#[derive(Clone, Debug)]
pub struct SectionRow {
    pub key: String,
    pub title: &'static str,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct UnitCard {
    pub id: &'static str,
    pub title: &'static str,
    pub hours: u32,
    pub progress: u32,
    pub sections: Vec<SectionRow>,
}

impl PresetCard {
    pub fn label(&self) -> String {
        if self.seconds_per_question > 0 {
            format!(
                "{} · {} · {} questions · {}s each",
                self.name, self.difficulty, self.question_count, self.seconds_per_question
            )
        } else {
            format!("{} ({} questions)", self.name, self.question_count)
        }
    }
}

impl UnitCard {
    pub fn label(&self) -> String {
        if self.progress == 100 {
            format!("{} ✅", self.title)
        } else {
            format!("{} ({}%)", self.title, self.progress)
        }
    }
}
