use serde::{Deserialize, Serialize};

pub type QuestionId = u32;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub stem: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub category: String, // "Unit 1", "Unit 2"...
    pub difficulty: Difficulty,
    #[serde(default = "default_points")]
    pub points: u32,
}

fn default_points() -> u32 {
    1
}

impl Question {
    pub fn is_correct(&self, option_index: usize) -> bool {
        self.correct_index == option_index
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Home,
    PracticeTest,
    McqTest,
}
