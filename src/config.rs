// src/config.rs

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::Difficulty;

/// Upper bound for long-form tests; larger than any bank we ship.
pub const PRACTICE_QUESTION_CAP: usize = 100;
/// One hour for the whole practice test.
pub const PRACTICE_TIME_SECONDS: u32 = 3600;

const CONFIG_ENV: &str = "WEBNOTES_CONFIG";
const PROGRESS_DIR_ENV: &str = "WEBNOTES_PROGRESS_DIR";
const DEFAULT_CONFIG_FILE: &str = "webnotes.yaml";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TestKind {
    // Long-form practice tests
    CompleteTest,
    Unit(u8),
    // Timed multiple choice
    Quick,
    Medium,
    Expert,
    Mixed,
}

pub const PRACTICE_KINDS: [TestKind; 4] = [
    TestKind::CompleteTest,
    TestKind::Unit(1),
    TestKind::Unit(2),
    TestKind::Unit(3),
];

pub const MCQ_KINDS: [TestKind; 4] = [
    TestKind::Quick,
    TestKind::Medium,
    TestKind::Expert,
    TestKind::Mixed,
];

/// Slices taken from each difficulty bucket for the mixed quiz.
pub const MIXED_SLICES: [(Difficulty, usize); 3] = [
    (Difficulty::Easy, 8),
    (Difficulty::Medium, 10),
    (Difficulty::Hard, 7),
];

/// Which questions a preset draws from the bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionFilter {
    All,
    Unit(u8),
    Difficulty(Difficulty),
    Composite(&'static [(Difficulty, usize)]),
}

impl TestKind {
    pub fn name(self) -> String {
        match self {
            TestKind::CompleteTest => "Complete Test (All Units)".to_string(),
            TestKind::Unit(1) => "Unit 1: Web Technology".to_string(),
            TestKind::Unit(2) => "Unit 2: Markup Languages".to_string(),
            TestKind::Unit(3) => "Unit 3: CSS".to_string(),
            TestKind::Unit(n) => format!("Unit {n}"),
            TestKind::Quick => "Quick Test".to_string(),
            TestKind::Medium => "Medium Test".to_string(),
            TestKind::Expert => "Expert Test".to_string(),
            TestKind::Mixed => "Mixed Test".to_string(),
        }
    }

    pub fn filter(self) -> QuestionFilter {
        match self {
            TestKind::CompleteTest => QuestionFilter::All,
            TestKind::Unit(n) => QuestionFilter::Unit(n),
            TestKind::Quick => QuestionFilter::Difficulty(Difficulty::Easy),
            TestKind::Medium => QuestionFilter::Difficulty(Difficulty::Medium),
            TestKind::Expert => QuestionFilter::Difficulty(Difficulty::Hard),
            TestKind::Mixed => QuestionFilter::Composite(&MIXED_SLICES),
        }
    }

    /// Difficulty badge shown on the preset card ("Mixed" for composites).
    pub fn difficulty_label(self) -> &'static str {
        match self.filter() {
            QuestionFilter::Difficulty(d) => d.label(),
            QuestionFilter::Composite(_) => "Mixed",
            QuestionFilter::All | QuestionFilter::Unit(_) => "All",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    /// One overall timer, free navigation, review at the end.
    LongForm,
    /// Per-question timer with immediate feedback.
    ShortQuiz,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestConfiguration {
    pub kind: TestKind,
    pub question_count: usize,
    /// 0 means no per-question timer.
    pub per_question_time_seconds: u32,
    /// 0 means no overall timer.
    pub overall_time_seconds: u32,
}

impl TestConfiguration {
    pub fn preset(kind: TestKind) -> Self {
        let (question_count, per_question) = match kind {
            TestKind::CompleteTest | TestKind::Unit(_) => (PRACTICE_QUESTION_CAP, 0),
            TestKind::Quick => (10, 30),
            TestKind::Medium => (15, 45),
            TestKind::Expert => (20, 60),
            TestKind::Mixed => (25, 75),
        };
        let overall = if per_question == 0 { PRACTICE_TIME_SECONDS } else { 0 };
        Self {
            kind,
            question_count,
            per_question_time_seconds: per_question,
            overall_time_seconds: overall,
        }
    }

    pub fn variant(&self) -> Variant {
        if self.per_question_time_seconds > 0 {
            Variant::ShortQuiz
        } else {
            Variant::LongForm
        }
    }

    /// Seconds the timer is armed with when a question (ShortQuiz) or the
    /// whole test (LongForm) begins.
    pub fn initial_seconds(&self) -> u32 {
        match self.variant() {
            Variant::ShortQuiz => self.per_question_time_seconds,
            Variant::LongForm => self.overall_time_seconds,
        }
    }
}

/// Application settings. Every field has a default so a partial file works.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub progress_dir: PathBuf,
    pub window_title: String,
    pub practice_kind: TestKind,
    pub mcq_kind: TestKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            progress_dir: PathBuf::from("."),
            window_title: "Web Technologies Notes & Quiz".to_string(),
            practice_kind: TestKind::CompleteTest,
            mcq_kind: TestKind::Quick,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Looks for `$WEBNOTES_CONFIG` or `./webnotes.yaml`, then applies
    /// `$WEBNOTES_PROGRESS_DIR`. Problems with the file are logged and the
    /// defaults are used instead.
    pub fn discover() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut config = if path.exists() {
            match Self::load(&path) {
                Ok(config) => {
                    log::info!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("ignoring {}: {e}", path.display());
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        if let Some(dir) = std::env::var_os(PROGRESS_DIR_ENV) {
            config.progress_dir = PathBuf::from(dir);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_presets_match_the_course_table() {
        let quick = TestConfiguration::preset(TestKind::Quick);
        assert_eq!((quick.question_count, quick.per_question_time_seconds), (10, 30));
        let medium = TestConfiguration::preset(TestKind::Medium);
        assert_eq!((medium.question_count, medium.per_question_time_seconds), (15, 45));
        let expert = TestConfiguration::preset(TestKind::Expert);
        assert_eq!((expert.question_count, expert.per_question_time_seconds), (20, 60));
        let mixed = TestConfiguration::preset(TestKind::Mixed);
        assert_eq!((mixed.question_count, mixed.per_question_time_seconds), (25, 75));

        for kind in MCQ_KINDS {
            let config = TestConfiguration::preset(kind);
            assert_eq!(config.variant(), Variant::ShortQuiz);
            assert_eq!(config.overall_time_seconds, 0);
        }
    }

    #[test]
    fn practice_presets_use_one_overall_timer() {
        for kind in PRACTICE_KINDS {
            let config = TestConfiguration::preset(kind);
            assert_eq!(config.variant(), Variant::LongForm);
            assert_eq!(config.per_question_time_seconds, 0);
            assert_eq!(config.initial_seconds(), 3600);
        }
    }

    #[test]
    fn mixed_slices_add_up_to_the_preset_size() {
        let total: usize = MIXED_SLICES.iter().map(|(_, n)| n).sum();
        assert_eq!(total, TestConfiguration::preset(TestKind::Mixed).question_count);
        assert_eq!(TestKind::Mixed.difficulty_label(), "Mixed");
    }

    #[test]
    fn partial_config_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("webnotes.yaml");
        std::fs::write(&path, "mcq_kind: Expert\n").expect("write config");

        let config = AppConfig::load(&path).expect("config ok");
        assert_eq!(config.mcq_kind, TestKind::Expert);
        assert_eq!(config.practice_kind, TestKind::CompleteTest);
        assert_eq!(config.progress_dir, PathBuf::from("."));
    }

    #[test]
    fn broken_config_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("webnotes.yaml");
        std::fs::write(&path, "mcq_kind: [").expect("write config");
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse(_))));
    }
}
