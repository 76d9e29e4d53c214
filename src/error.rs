//! Error types for the quiz core, the question banks and the progress store.

use thiserror::Error;

use crate::model::QuestionId;

/// Raised while loading or validating a question bank.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("malformed question bank: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),

    #[error("question {0} has no options")]
    NoOptions(QuestionId),

    #[error("question {id}: correct index {index} out of range for {options} options")]
    CorrectIndexOutOfRange {
        id: QuestionId,
        index: usize,
        options: usize,
    },

    #[error("question {0} is worth zero points")]
    ZeroPoints(QuestionId),
}

/// Operation called in a phase that does not accept it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RunnerError {
    #[error("a test is already running or finished; retry first")]
    NotInSetup,

    #[error("no test is in progress")]
    NotActive,

    #[error("the test has not finished yet")]
    NotFinished,

    #[error("this test does not allow going back")]
    NotNavigable,

    #[error("option {index} out of range ({options} options)")]
    OptionOutOfRange { index: usize, options: usize },
}

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("progress storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode progress: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Start-up failures surfaced to eframe's app creator.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Bank(#[from] BankError),
}
