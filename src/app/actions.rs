use super::*;
use crate::config::TestConfiguration;
use crate::error::RunnerError;
use crate::quiz::{AnswerOutcome, TimerEvent};
use std::time::Duration;

impl QuizApp {
    pub fn start_test(&mut self, mode: TestMode) {
        let config = TestConfiguration::preset(self.selected_kind(mode));
        let bank = match mode {
            TestMode::Practice => &self.practice_bank,
            TestMode::Mcq => &self.mcq_bank,
        };
        let runner = match mode {
            TestMode::Practice => &mut self.practice,
            TestMode::Mcq => &mut self.mcq,
        };
        let result = runner.start(bank, config);
        self.report(result);
    }

    pub fn answer(&mut self, mode: TestMode, option_index: usize) -> Option<AnswerOutcome> {
        let result = self.runner_mut(mode).answer(option_index);
        match result {
            Ok(outcome) => {
                self.message.clear();
                Some(outcome)
            }
            Err(e) => {
                self.report::<()>(Err(e));
                None
            }
        }
    }

    pub fn next_question(&mut self, mode: TestMode) {
        let result = self.runner_mut(mode).advance();
        self.report(result);
    }

    pub fn previous_question(&mut self, mode: TestMode) {
        let result = self.runner_mut(mode).previous();
        self.report(result);
    }

    pub fn submit_test(&mut self, mode: TestMode) {
        let result = self.runner_mut(mode).submit();
        self.report(result);
    }

    pub fn retry_test(&mut self, mode: TestMode) {
        let result = self.runner_mut(mode).retry();
        self.report(result);
    }

    /// Retake straight from the results screen with the same preset.
    pub fn retake_test(&mut self, mode: TestMode) {
        self.retry_test(mode);
        self.start_test(mode);
    }

    pub fn mark_section(&mut self, key: &str) {
        match self.progress.mark(key) {
            Ok(true) => log::info!("section {key} completed"),
            Ok(false) => {}
            Err(e) => {
                log::warn!("could not save progress: {e}");
                self.message = format!("⚠ Progress not saved: {e}");
            }
        }
    }

    /// Feeds elapsed seconds into both runners. Returns how long until the
    /// next tick is due, if any timer is running.
    pub fn tick(&mut self) -> Option<Duration> {
        for mode in [TestMode::Practice, TestMode::Mcq] {
            let events = self.runner_mut(mode).poll_timer();
            if events.contains(&TimerEvent::Expired) {
                log::debug!("{mode:?} timer expired");
            }
        }
        [self.practice.until_next_tick(), self.mcq.until_next_tick()]
            .into_iter()
            .flatten()
            .min()
    }

    fn report<T>(&mut self, result: Result<T, RunnerError>) {
        if let Err(e) = result {
            log::warn!("quiz action rejected: {e}");
            self.message = format!("⚠ {e}");
        } else {
            self.message.clear();
        }
    }
}
