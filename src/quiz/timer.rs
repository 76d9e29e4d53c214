//! Countdown timer driven by an injectable clock.
//!
//! The countdown never calls back into its owner. `poll` returns the ticks
//! that elapsed since the last poll, so the runner applies them on the same
//! thread that handles user actions.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock for tests. Clones share the same time, so a test can keep one
/// handle and advance it while the runner owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick { remaining: u32 },
    Expired,
}

const ONE_SECOND: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct Countdown<C: Clock> {
    clock: C,
    remaining: u32,
    // start of the second currently being counted; None when stopped
    anchor: Option<Duration>,
}

impl<C: Clock> Countdown<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            remaining: 0,
            anchor: None,
        }
    }

    /// Arms the countdown, replacing whatever was running before.
    pub fn start(&mut self, seconds: u32) {
        self.stop();
        self.remaining = seconds;
        if seconds > 0 {
            self.anchor = Some(self.clock.now());
        }
        log::debug!("countdown started at {seconds}s");
    }

    pub fn stop(&mut self) {
        self.anchor = None;
    }

    pub fn is_running(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Time left until the next tick, for scheduling a wake-up.
    pub fn until_next_tick(&self) -> Option<Duration> {
        let anchor = self.anchor?;
        let elapsed = self.clock.now().saturating_sub(anchor);
        Some(ONE_SECOND.saturating_sub(elapsed))
    }

    /// One `Tick` per whole second elapsed; `Expired` once when reaching
    /// zero, after which the countdown is stopped.
    pub fn poll(&mut self) -> Vec<TimerEvent> {
        let Some(anchor) = self.anchor else {
            return Vec::new();
        };
        let whole = self.clock.now().saturating_sub(anchor).as_secs();
        let steps = whole.min(u64::from(self.remaining)) as u32;

        let mut events = Vec::with_capacity(steps as usize + 1);
        for _ in 0..steps {
            self.remaining -= 1;
            events.push(TimerEvent::Tick {
                remaining: self.remaining,
            });
        }

        if self.remaining == 0 {
            self.anchor = None;
            events.push(TimerEvent::Expired);
        } else {
            self.anchor = Some(anchor + ONE_SECOND * steps);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(events: &[TimerEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, TimerEvent::Tick { .. }))
            .count()
    }

    #[test]
    fn ticks_once_per_elapsed_second() {
        let clock = ManualClock::new();
        let mut timer = Countdown::new(clock.clone());
        timer.start(5);

        clock.advance(Duration::from_millis(999));
        assert!(timer.poll().is_empty());

        clock.advance(Duration::from_millis(1));
        assert_eq!(timer.poll(), vec![TimerEvent::Tick { remaining: 4 }]);

        clock.advance_secs(2);
        assert_eq!(
            timer.poll(),
            vec![
                TimerEvent::Tick { remaining: 3 },
                TimerEvent::Tick { remaining: 2 }
            ]
        );
        assert_eq!(timer.remaining(), 2);
    }

    #[test]
    fn partial_seconds_carry_over_between_polls() {
        let clock = ManualClock::new();
        let mut timer = Countdown::new(clock.clone());
        timer.start(10);

        clock.advance(Duration::from_millis(1500));
        assert_eq!(ticks(&timer.poll()), 1);
        clock.advance(Duration::from_millis(500));
        assert_eq!(ticks(&timer.poll()), 1);
        assert_eq!(timer.remaining(), 8);
    }

    #[test]
    fn expires_exactly_once_then_stops() {
        let clock = ManualClock::new();
        let mut timer = Countdown::new(clock.clone());
        timer.start(2);

        clock.advance_secs(10);
        let events = timer.poll();
        assert_eq!(
            events,
            vec![
                TimerEvent::Tick { remaining: 1 },
                TimerEvent::Tick { remaining: 0 },
                TimerEvent::Expired
            ]
        );
        assert!(!timer.is_running());

        clock.advance_secs(10);
        assert!(timer.poll().is_empty());
    }

    #[test]
    fn restarting_leaves_a_single_tick_source() {
        let clock = ManualClock::new();
        let mut timer = Countdown::new(clock.clone());
        timer.start(30);
        clock.advance(Duration::from_millis(700));
        timer.start(30);

        clock.advance_secs(4);
        let events = timer.poll();
        assert_eq!(ticks(&events), 4);
        assert_eq!(timer.remaining(), 26);
    }

    #[test]
    fn stop_is_idempotent_and_silences_ticks() {
        let clock = ManualClock::new();
        let mut timer = Countdown::new(clock.clone());
        timer.stop();
        timer.start(3);
        timer.stop();
        timer.stop();

        clock.advance_secs(5);
        assert!(timer.poll().is_empty());
        assert!(timer.until_next_tick().is_none());
    }

    #[test]
    fn zero_seconds_never_runs() {
        let mut timer = Countdown::new(ManualClock::new());
        timer.start(0);
        assert!(!timer.is_running());
        assert!(timer.poll().is_empty());
    }

    #[test]
    fn next_tick_deadline_shrinks_with_time() {
        let clock = ManualClock::new();
        let mut timer = Countdown::new(clock.clone());
        timer.start(5);
        clock.advance(Duration::from_millis(300));
        assert_eq!(timer.until_next_tick(), Some(Duration::from_millis(700)));
    }
}
