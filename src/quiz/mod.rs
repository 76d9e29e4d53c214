//! UI-agnostic quiz core: question selection, countdown timer, scoring and
//! the test runner state machine shared by both quiz screens.

pub mod runner;
pub mod scoring;
pub mod selection;
pub mod timer;

use std::collections::HashMap;

use crate::model::{Question, QuestionId};

/// Shuffled, filtered questions for one attempt.
pub type ActiveQuestionSet = Vec<Question>;

/// Selected option per answered question. Skipped and timed-out questions
/// have no entry.
pub type AnswerRecord = HashMap<QuestionId, usize>;

pub use runner::{ActiveRun, AnswerOutcome, FinishedRun, Phase, RunState, TestRunner};
pub use scoring::{Score, ScoreTier, compute_score};
pub use selection::{select_questions, selection_size};
pub use timer::{Clock, Countdown, ManualClock, SystemClock, TimerEvent};
