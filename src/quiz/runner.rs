//! Setup → Active → Results state machine shared by both quiz screens.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{TestConfiguration, Variant};
use crate::data::QuestionBank;
use crate::error::RunnerError;
use crate::model::Question;
use crate::quiz::scoring::{Score, compute_score};
use crate::quiz::selection::select_questions;
use crate::quiz::timer::{Clock, Countdown, SystemClock, TimerEvent};
use crate::quiz::{ActiveQuestionSet, AnswerRecord};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Setup,
    Active,
    Results,
}

#[derive(Debug, Clone)]
pub struct ActiveRun {
    pub config: TestConfiguration,
    pub questions: ActiveQuestionSet,
    pub current_index: usize,
    pub answers: AnswerRecord,
    /// ShortQuiz only: the current answer's feedback is showing.
    pub revealed: bool,
}

impl ActiveRun {
    pub fn current(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn selected_for_current(&self) -> Option<usize> {
        self.answers.get(&self.current().id).copied()
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }
}

#[derive(Debug, Clone)]
pub struct FinishedRun {
    pub config: TestConfiguration,
    pub questions: ActiveQuestionSet,
    pub answers: AnswerRecord,
    pub score: Score,
    /// Ended by the overall timer rather than by the user.
    pub timed_out: bool,
}

#[derive(Debug, Clone, Default)]
pub enum RunState {
    #[default]
    Setup,
    Active(ActiveRun),
    Results(FinishedRun),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub advanced: bool,
}

pub struct TestRunner<C: Clock = SystemClock> {
    state: RunState,
    timer: Countdown<C>,
    rng: StdRng,
}

impl TestRunner<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock::default(), StdRng::from_entropy())
    }
}

impl Default for TestRunner<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TestRunner<C> {
    pub fn with_clock(clock: C, rng: StdRng) -> Self {
        Self {
            state: RunState::Setup,
            timer: Countdown::new(clock),
            rng,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            RunState::Setup => Phase::Setup,
            RunState::Active(_) => Phase::Active,
            RunState::Results(_) => Phase::Results,
        }
    }

    pub fn active(&self) -> Option<&ActiveRun> {
        match &self.state {
            RunState::Active(run) => Some(run),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&FinishedRun> {
        match &self.state {
            RunState::Results(run) => Some(run),
            _ => None,
        }
    }

    pub fn score(&self) -> Option<Score> {
        self.results().map(|r| r.score)
    }

    /// Seconds left on the running attempt; 0 outside Active.
    pub fn remaining_seconds(&self) -> u32 {
        match self.state {
            RunState::Active(_) => self.timer.remaining(),
            _ => 0,
        }
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn until_next_tick(&self) -> Option<std::time::Duration> {
        self.timer.until_next_tick()
    }

    pub fn start(&mut self, bank: &QuestionBank, config: TestConfiguration) -> Result<(), RunnerError> {
        if !matches!(self.state, RunState::Setup) {
            return Err(RunnerError::NotInSetup);
        }
        let questions = select_questions(bank, &config, &mut self.rng);
        log::info!(
            "starting {:?} with {} questions ({:?})",
            config.kind,
            questions.len(),
            config.variant()
        );

        if questions.is_empty() {
            // nothing to ask; report an empty result instead of hanging
            self.timer.stop();
            self.state = RunState::Results(FinishedRun {
                config,
                questions,
                answers: AnswerRecord::new(),
                score: Score::default(),
                timed_out: false,
            });
            return Ok(());
        }

        self.timer.start(config.initial_seconds());
        self.state = RunState::Active(ActiveRun {
            config,
            questions,
            current_index: 0,
            answers: AnswerRecord::new(),
            revealed: false,
        });
        Ok(())
    }

    /// Records the option for the current question; a second answer
    /// replaces the first. LongForm moves on to the next question.
    pub fn answer(&mut self, option_index: usize) -> Result<AnswerOutcome, RunnerError> {
        let RunState::Active(run) = &mut self.state else {
            return Err(RunnerError::NotActive);
        };
        let question = run.current();
        if option_index >= question.options.len() {
            return Err(RunnerError::OptionOutOfRange {
                index: option_index,
                options: question.options.len(),
            });
        }
        let correct = question.is_correct(option_index);
        let id = question.id;
        run.answers.insert(id, option_index);

        let advanced = match run.config.variant() {
            Variant::ShortQuiz => {
                run.revealed = true;
                false
            }
            Variant::LongForm if !run.is_last() => {
                run.current_index += 1;
                true
            }
            Variant::LongForm => false,
        };
        log::debug!("question {id}: option {option_index} (correct: {correct})");
        Ok(AnswerOutcome { correct, advanced })
    }

    /// Next question, or Results after the last one.
    pub fn advance(&mut self) -> Result<(), RunnerError> {
        let RunState::Active(run) = &mut self.state else {
            return Err(RunnerError::NotActive);
        };
        if run.is_last() {
            self.finish(false);
            return Ok(());
        }
        run.current_index += 1;
        run.revealed = false;
        if run.config.variant() == Variant::ShortQuiz {
            self.timer.start(run.config.per_question_time_seconds);
        }
        Ok(())
    }

    /// LongForm only: a timed quiz never reopens a revealed question.
    pub fn previous(&mut self) -> Result<(), RunnerError> {
        let RunState::Active(run) = &mut self.state else {
            return Err(RunnerError::NotActive);
        };
        if run.config.variant() == Variant::ShortQuiz {
            return Err(RunnerError::NotNavigable);
        }
        run.current_index = run.current_index.saturating_sub(1);
        Ok(())
    }

    /// Ends the attempt now, scoring whatever was answered.
    pub fn submit(&mut self) -> Result<(), RunnerError> {
        if !matches!(self.state, RunState::Active(_)) {
            return Err(RunnerError::NotActive);
        }
        self.finish(false);
        Ok(())
    }

    pub fn retry(&mut self) -> Result<(), RunnerError> {
        if !matches!(self.state, RunState::Results(_)) {
            return Err(RunnerError::NotFinished);
        }
        self.reset();
        Ok(())
    }

    /// Drops the attempt from any phase, e.g. when its screen is closed.
    pub fn abandon(&mut self) {
        if self.phase() != Phase::Setup {
            log::info!("abandoning run in {:?}", self.phase());
        }
        self.reset();
    }

    /// Applies elapsed timer ticks. Returns the events that were handled.
    pub fn poll_timer(&mut self) -> Vec<TimerEvent> {
        let events = self.timer.poll();
        if events.contains(&TimerEvent::Expired) {
            self.on_expired();
        }
        events
    }

    fn on_expired(&mut self) {
        let RunState::Active(run) = &self.state else {
            return;
        };
        match run.config.variant() {
            Variant::ShortQuiz => {
                log::debug!("question {} timed out", run.current().id);
                // advance only fails outside Active, checked above
                let _ = self.advance();
            }
            Variant::LongForm => {
                log::info!("time is up, submitting");
                self.finish(true);
            }
        }
    }

    fn finish(&mut self, timed_out: bool) {
        self.timer.stop();
        let RunState::Active(run) = std::mem::take(&mut self.state) else {
            return;
        };
        let score = compute_score(&run.questions, &run.answers);
        log::info!(
            "{:?} finished: {}/{} points ({}%)",
            run.config.kind,
            score.earned_points,
            score.max_points,
            score.percentage
        );
        self.state = RunState::Results(FinishedRun {
            config: run.config,
            questions: run.questions,
            answers: run.answers,
            score,
            timed_out,
        });
    }

    fn reset(&mut self) {
        self.timer.stop();
        self.state = RunState::Setup;
    }
}
