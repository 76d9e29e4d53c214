// src/data.rs

use std::collections::HashSet;

use crate::error::BankError;
use crate::model::{Question, QuestionId};

const PRACTICE_BANK: &str = include_str!("data/practice_questions.yaml");
const MCQ_BANK: &str = include_str!("data/mcq_questions.yaml");

/// Immutable, validated list of questions.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(BankError::DuplicateId(q.id));
            }
            if q.options.is_empty() {
                return Err(BankError::NoOptions(q.id));
            }
            if q.correct_index >= q.options.len() {
                return Err(BankError::CorrectIndexOutOfRange {
                    id: q.id,
                    index: q.correct_index,
                    options: q.options.len(),
                });
            }
            if q.points == 0 {
                return Err(BankError::ZeroPoints(q.id));
            }
        }
        Ok(Self { questions })
    }

    pub fn from_yaml(source: &str) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_yaml::from_str(source)?;
        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// Long-form bank: every unit, one point per question.
pub fn read_practice_bank() -> Result<QuestionBank, BankError> {
    let bank = QuestionBank::from_yaml(PRACTICE_BANK)?;
    log::debug!("practice bank loaded: {} questions", bank.len());
    Ok(bank)
}

pub fn read_mcq_bank() -> Result<QuestionBank, BankError> {
    let bank = QuestionBank::from_yaml(MCQ_BANK)?;
    log::debug!("mcq bank loaded: {} questions", bank.len());
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn question(id: QuestionId) -> Question {
        Question {
            id,
            stem: format!("Question {id}"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: 0,
            explanation: String::new(),
            category: "Unit 1".into(),
            difficulty: Difficulty::Easy,
            points: 1,
        }
    }

    #[test]
    fn embedded_banks_parse_and_validate() {
        let practice = read_practice_bank().expect("practice bank ok");
        let mcq = read_mcq_bank().expect("mcq bank ok");
        assert_eq!(practice.len(), 35);
        assert_eq!(mcq.len(), 25);
        assert!(practice.iter().all(|q| q.points == 1));
        assert!(mcq.iter().all(|q| q.options.len() == 4));
    }

    #[test]
    fn mcq_points_follow_difficulty() {
        let mcq = read_mcq_bank().expect("mcq bank ok");
        for q in mcq.iter() {
            let expected = match q.difficulty {
                Difficulty::Easy => 1,
                Difficulty::Medium => 2,
                Difficulty::Hard => 3,
            };
            assert_eq!(q.points, expected, "question {}", q.id);
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = QuestionBank::new(vec![question(1), question(1)]).unwrap_err();
        assert!(matches!(err, BankError::DuplicateId(1)));
    }

    #[test]
    fn correct_index_must_point_at_an_option() {
        let mut q = question(7);
        q.correct_index = 4;
        let err = QuestionBank::new(vec![q]).unwrap_err();
        assert!(matches!(
            err,
            BankError::CorrectIndexOutOfRange { id: 7, index: 4, options: 4 }
        ));
    }

    #[test]
    fn points_default_to_one_and_zero_is_rejected() {
        let yaml = r#"
- id: 1
  stem: "What does WWW stand for?"
  options: ["World Wide Web", "Web World Wide"]
  correct_index: 0
  explanation: "..."
  category: "Unit 1"
  difficulty: Easy
"#;
        let bank = QuestionBank::from_yaml(yaml).expect("valid bank");
        assert_eq!(bank.get(1).map(|q| q.points), Some(1));

        let mut q = question(2);
        q.points = 0;
        assert!(matches!(
            QuestionBank::new(vec![q]).unwrap_err(),
            BankError::ZeroPoints(2)
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = QuestionBank::from_yaml("- id: [not a number").unwrap_err();
        assert!(matches!(err, BankError::Parse(_)));
    }
}
