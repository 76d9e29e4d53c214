use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{QuestionFilter, TestConfiguration};
use crate::data::QuestionBank;
use crate::model::Question;
use crate::quiz::ActiveQuestionSet;

fn passes_filter(filter: QuestionFilter, q: &Question) -> bool {
    match filter {
        QuestionFilter::All => true,
        QuestionFilter::Unit(n) => q
            .category
            .to_lowercase()
            .contains(&format!("unit {n}")),
        QuestionFilter::Difficulty(d) => q.difficulty == d,
        QuestionFilter::Composite(slices) => slices.iter().any(|(d, _)| q.difficulty == *d),
    }
}

/// Builds the question set for one attempt.
///
/// Filters the bank by the preset, caps it at `question_count` and shuffles
/// the result. Composite presets take a fixed slice from each difficulty
/// bucket first. Fewer matches than requested is not an error.
pub fn select_questions<R: Rng + ?Sized>(
    bank: &QuestionBank,
    config: &TestConfiguration,
    rng: &mut R,
) -> ActiveQuestionSet {
    let filter = config.kind.filter();

    let mut picked: Vec<Question> = match filter {
        QuestionFilter::Composite(slices) => slices
            .iter()
            .flat_map(|&(difficulty, take)| {
                bank.iter()
                    .filter(move |q| q.difficulty == difficulty)
                    .take(take)
            })
            .cloned()
            .collect(),
        _ => bank
            .iter()
            .filter(|q| passes_filter(filter, q))
            .take(config.question_count)
            .cloned()
            .collect(),
    };
    picked.truncate(config.question_count);
    picked.shuffle(rng);

    log::debug!(
        "selected {} of {} questions for {:?}",
        picked.len(),
        bank.len(),
        config.kind
    );
    picked
}

/// How many questions `select_questions` returns for `config`.
pub fn selection_size(bank: &QuestionBank, config: &TestConfiguration) -> usize {
    let filter = config.kind.filter();
    let size = match filter {
        QuestionFilter::Composite(slices) => slices
            .iter()
            .map(|&(difficulty, take)| {
                bank.iter()
                    .filter(|q| q.difficulty == difficulty)
                    .count()
                    .min(take)
            })
            .sum(),
        _ => bank.iter().filter(|q| passes_filter(filter, q)).count(),
    };
    size.min(config.question_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MCQ_KINDS, PRACTICE_KINDS, TestKind};
    use crate::data::{read_mcq_bank, read_practice_bank};
    use crate::model::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn selection_never_exceeds_the_requested_count() {
        let bank = read_mcq_bank().expect("bank");
        let mut rng = StdRng::seed_from_u64(7);
        for kind in MCQ_KINDS {
            let config = TestConfiguration::preset(kind);
            let set = select_questions(&bank, &config, &mut rng);
            let available = bank.iter().filter(|q| passes_filter(kind.filter(), q)).count();
            assert!(set.len() <= config.question_count, "{kind:?}");
            if available >= config.question_count && !matches!(kind, TestKind::Mixed) {
                assert_eq!(set.len(), config.question_count, "{kind:?}");
            }
        }
    }

    #[test]
    fn quick_test_fills_exactly_and_expert_is_underfilled() {
        let bank = read_mcq_bank().expect("bank");
        let mut rng = StdRng::seed_from_u64(1);
        let quick = select_questions(&bank, &TestConfiguration::preset(TestKind::Quick), &mut rng);
        assert_eq!(quick.len(), 10);
        // only five hard questions exist
        let expert = select_questions(&bank, &TestConfiguration::preset(TestKind::Expert), &mut rng);
        assert_eq!(expert.len(), 5);
    }

    #[test]
    fn selected_questions_match_the_preset_filter() {
        let mut rng = StdRng::seed_from_u64(42);
        let mcq = read_mcq_bank().expect("bank");
        for kind in MCQ_KINDS {
            let set = select_questions(&mcq, &TestConfiguration::preset(kind), &mut rng);
            assert!(set.iter().all(|q| passes_filter(kind.filter(), q)), "{kind:?}");
        }
        let practice = read_practice_bank().expect("bank");
        for kind in PRACTICE_KINDS {
            let set = select_questions(&practice, &TestConfiguration::preset(kind), &mut rng);
            assert!(!set.is_empty());
            if let TestKind::Unit(n) = kind {
                let label = format!("Unit {n}");
                assert!(set.iter().all(|q| q.category == label), "{kind:?}");
            } else {
                assert_eq!(set.len(), practice.len());
            }
        }
    }

    #[test]
    fn mixed_test_takes_capped_slices_per_difficulty() {
        let bank = read_mcq_bank().expect("bank");
        let mut rng = StdRng::seed_from_u64(3);
        let set = select_questions(&bank, &TestConfiguration::preset(TestKind::Mixed), &mut rng);
        let count = |d: Difficulty| set.iter().filter(|q| q.difficulty == d).count();
        assert_eq!(count(Difficulty::Easy), 8);
        assert_eq!(count(Difficulty::Medium), 10);
        assert_eq!(count(Difficulty::Hard), 5);
    }

    #[test]
    fn selection_is_deterministic_for_a_seed_and_leaves_the_bank_alone() {
        let bank = read_practice_bank().expect("bank");
        let before: Vec<u32> = bank.iter().map(|q| q.id).collect();
        let config = TestConfiguration::preset(TestKind::CompleteTest);

        let a = select_questions(&bank, &config, &mut StdRng::seed_from_u64(9));
        let b = select_questions(&bank, &config, &mut StdRng::seed_from_u64(9));
        let ids = |set: &ActiveQuestionSet| set.iter().map(|q| q.id).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
        // 35 questions: the identity permutation is astronomically unlikely
        assert_ne!(ids(&a), before);
        assert_eq!(bank.iter().map(|q| q.id).collect::<Vec<_>>(), before);
    }

    #[test]
    fn selection_size_predicts_the_selected_length() {
        let mut rng = StdRng::seed_from_u64(5);
        let mcq = read_mcq_bank().expect("bank");
        let practice = read_practice_bank().expect("bank");
        for (bank, kinds) in [(&mcq, MCQ_KINDS), (&practice, PRACTICE_KINDS)] {
            for kind in kinds {
                let config = TestConfiguration::preset(kind);
                let set = select_questions(bank, &config, &mut rng);
                assert_eq!(selection_size(bank, &config), set.len(), "{kind:?}");
            }
        }
    }

    #[test]
    fn unknown_unit_yields_an_empty_set() {
        let bank = read_practice_bank().expect("bank");
        let config = TestConfiguration::preset(TestKind::Unit(9));
        let set = select_questions(&bank, &config, &mut StdRng::seed_from_u64(0));
        assert!(set.is_empty());
    }
}
