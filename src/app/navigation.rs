use super::*;

impl QuizApp {
    /// Switches screens. Leaving a test screen drops its run so no timer
    /// keeps ticking in the background.
    pub fn navigate(&mut self, target: AppState) {
        if self.state == target {
            return;
        }
        match self.state {
            AppState::PracticeTest => self.practice.abandon(),
            AppState::McqTest => self.mcq.abandon(),
            AppState::Home => {}
        }
        log::debug!("navigating {:?} -> {:?}", self.state, target);
        self.state = target;
        self.message.clear();
    }

    pub fn go_home(&mut self) {
        self.navigate(AppState::Home);
    }

    pub fn open_test(&mut self, mode: TestMode) {
        let target = match mode {
            TestMode::Practice => AppState::PracticeTest,
            TestMode::Mcq => AppState::McqTest,
        };
        self.navigate(target);
    }
}
