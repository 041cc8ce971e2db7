//! Turn clock abstraction.
//!
//! `GameState::start` arms a clock and `GameState::stop` disarms it. Whatever
//! owns the clock calls `GameState::tick` once per period; the server uses an
//! actix interval, tests use [`ManualClock`] and step ticks by hand.

use std::time::Duration;

pub trait TurnClock {
    /// Arms the clock with `period`, replacing any armed period.
    fn arm(&mut self, period: Duration);

    /// Cancels the armed period. An in-flight tick is allowed to finish.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;
}

/// Clock that never fires on its own.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    period: Option<Duration>,
    arm_count: usize,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Number of times the clock has been armed.
    pub fn arm_count(&self) -> usize {
        self.arm_count
    }
}

impl TurnClock for ManualClock {
    fn arm(&mut self, period: Duration) {
        self.period = Some(period);
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.period = None;
    }

    fn is_armed(&self) -> bool {
        self.period.is_some()
    }
}
