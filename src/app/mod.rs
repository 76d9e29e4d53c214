use crate::config::{AppConfig, TestKind};
use crate::data::{QuestionBank, read_mcq_bank, read_practice_bank};
use crate::error::AppError;
use crate::model::AppState;
use crate::progress::{CompletionStore, FileBackend, ProgressBackend};
use crate::quiz::TestRunner;
use serde::{Deserialize, Serialize};

// Submodules
pub mod actions;
pub mod navigation;
pub mod view_models;

// View models consumed by the screens
pub use crate::view_models::{PresetCard, QuestionReview, SectionRow, UnitCard};

/// Which of the two quiz screens an action targets.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TestMode {
    Practice,
    Mcq,
}

/// Remembered between sessions through eframe storage.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Preferences {
    pub practice_kind: TestKind,
    pub mcq_kind: TestKind,
}

impl Preferences {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            practice_kind: config.practice_kind,
            mcq_kind: config.mcq_kind,
        }
    }
}

pub struct QuizApp {
    pub state: AppState,
    pub config: AppConfig,
    pub preferences: Preferences,
    pub practice_bank: QuestionBank,
    pub mcq_bank: QuestionBank,
    pub practice: TestRunner,
    pub mcq: TestRunner,
    pub progress: CompletionStore<Box<dyn ProgressBackend>>,
    pub message: String,
}

impl QuizApp {
    /// App backed by the progress directory from `config`.
    pub fn new(config: AppConfig, preferences: Option<Preferences>) -> Result<Self, AppError> {
        let backend = FileBackend::new(config.progress_dir.clone());
        Self::with_backend(config, preferences, Box::new(backend))
    }

    pub fn with_backend(
        config: AppConfig,
        preferences: Option<Preferences>,
        backend: Box<dyn ProgressBackend>,
    ) -> Result<Self, AppError> {
        let practice_bank = read_practice_bank()?;
        let mcq_bank = read_mcq_bank()?;
        let preferences = preferences.unwrap_or_else(|| Preferences::from_config(&config));
        log::info!(
            "quiz app ready: {} practice / {} mcq questions",
            practice_bank.len(),
            mcq_bank.len()
        );

        Ok(Self {
            state: AppState::Home,
            config,
            preferences,
            practice_bank,
            mcq_bank,
            practice: TestRunner::new(),
            mcq: TestRunner::new(),
            progress: CompletionStore::load(backend),
            message: String::new(),
        })
    }

    pub fn runner(&self, mode: TestMode) -> &TestRunner {
        match mode {
            TestMode::Practice => &self.practice,
            TestMode::Mcq => &self.mcq,
        }
    }

    pub fn runner_mut(&mut self, mode: TestMode) -> &mut TestRunner {
        match mode {
            TestMode::Practice => &mut self.practice,
            TestMode::Mcq => &mut self.mcq,
        }
    }

    pub fn bank(&self, mode: TestMode) -> &QuestionBank {
        match mode {
            TestMode::Practice => &self.practice_bank,
            TestMode::Mcq => &self.mcq_bank,
        }
    }

    pub fn selected_kind(&self, mode: TestMode) -> TestKind {
        match mode {
            TestMode::Practice => self.preferences.practice_kind,
            TestMode::Mcq => self.preferences.mcq_kind,
        }
    }

    pub fn select_kind(&mut self, mode: TestMode, kind: TestKind) {
        match mode {
            TestMode::Practice => self.preferences.practice_kind = kind,
            TestMode::Mcq => self.preferences.mcq_kind = kind,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> QuizApp {
    use crate::progress::MemoryBackend;
    QuizApp::with_backend(AppConfig::default(), None, Box::new(MemoryBackend::new()))
        .expect("embedded banks are valid")
}
