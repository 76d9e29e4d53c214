use super::*;
use crate::catalog::UNITS;
use crate::config::{MCQ_KINDS, PRACTICE_KINDS, TestConfiguration};
use crate::quiz::selection_size;

impl QuizApp {
    pub fn preset_cards(&self, mode: TestMode) -> Vec<PresetCard> {
        let kinds = match mode {
            TestMode::Practice => PRACTICE_KINDS,
            TestMode::Mcq => MCQ_KINDS,
        };
        let selected = self.selected_kind(mode);
        kinds
            .iter()
            .map(|&kind| {
                let config = TestConfiguration::preset(kind);
                PresetCard {
                    kind,
                    name: kind.name(),
                    difficulty: kind.difficulty_label(),
                    question_count: selection_size(self.bank(mode), &config),
                    seconds_per_question: config.per_question_time_seconds,
                    selected: kind == selected,
                }
            })
            .collect()
    }

    /// Per-question breakdown of the finished attempt, in the order asked.
    pub fn review_rows(&self, mode: TestMode) -> Vec<QuestionReview> {
        let Some(results) = self.runner(mode).results() else {
            return Vec::new();
        };
        results
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| QuestionReview {
                number: i + 1,
                stem: q.stem.clone(),
                options: q.options.clone(),
                correct_index: q.correct_index,
                selected: results.answers.get(&q.id).copied(),
                explanation: q.explanation.clone(),
            })
            .collect()
    }

    pub fn unit_cards(&self) -> Vec<UnitCard> {
        UNITS
            .iter()
            .map(|unit| UnitCard {
                id: unit.id,
                title: unit.title,
                hours: unit.hours,
                progress: self.progress.unit_progress(unit),
                sections: unit
                    .sections
                    .iter()
                    .map(|s| {
                        let key = unit.section_key(s);
                        SectionRow {
                            done: self.progress.is_marked(&key),
                            key,
                            title: s.title,
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}
