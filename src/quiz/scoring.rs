use serde::Serialize;

use crate::model::Question;
use crate::quiz::AnswerRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    pub correct_count: usize,
    pub answered_count: usize,
    pub earned_points: u32,
    pub max_points: u32,
    /// 0..=100, rounded half up. 0 when there is nothing to score.
    pub percentage: u32,
}

impl Score {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_percentage(self.percentage)
    }
}

pub fn compute_score(questions: &[Question], answers: &AnswerRecord) -> Score {
    let mut score = Score::default();
    for q in questions {
        score.max_points += q.points;
        let Some(&selected) = answers.get(&q.id) else {
            continue;
        };
        score.answered_count += 1;
        if q.is_correct(selected) {
            score.correct_count += 1;
            score.earned_points += q.points;
        }
    }
    score.percentage = percentage(score.earned_points, score.max_points);
    score
}

fn percentage(earned: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let (earned, max) = (u64::from(earned), u64::from(max));
    ((200 * earned + max) / (2 * max)) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    KeepStudying,
}

impl ScoreTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => ScoreTier::Excellent,
            60..=79 => ScoreTier::Good,
            _ => ScoreTier::KeepStudying,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent work!",
            ScoreTier::Good => "Good job!",
            ScoreTier::KeepStudying => "Keep studying!",
        }
    }
}
