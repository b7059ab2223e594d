//! Time Management

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use crate::error::{self, ErrorKind};

/// Default safety threshold in milliseconds. Search stops once the time left
/// drops to this value, leaving room to unwind and return a move.
pub const DEFAULT_THRESHOLD_MS: f64 = 10.0;

/// Deadline couples a time-left probe with a safety threshold.
///
/// The probe returns the milliseconds left for the current move, and may be called
/// any number of times. A value at or below the threshold means search must stop:
/// every search call checks the deadline before expanding a node.
pub struct Deadline<F> {
    time_left: F,
    threshold_ms: f64,
}

impl<F: Fn() -> f64> Deadline<F> {
    pub fn new(time_left: F, threshold_ms: f64) -> Self {
        Self {
            time_left,
            threshold_ms,
        }
    }

    /// Milliseconds left as reported by the probe.
    pub fn remaining_ms(&self) -> f64 {
        (self.time_left)()
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    /// Returns true if the time left is at or below the threshold.
    /// A NaN time left or threshold counts as expired.
    pub fn is_expired(&self) -> bool {
        !matches!(
            self.remaining_ms().partial_cmp(&self.threshold_ms),
            Some(Ordering::Greater)
        )
    }

    /// Returns Err(DeadlineExceeded) if the deadline has expired, Ok otherwise.
    pub fn check(&self) -> error::Result<()> {
        if self.is_expired() {
            Err(ErrorKind::DeadlineExceeded.into())
        } else {
            Ok(())
        }
    }
}

/// Returns a probe that never runs out of time.
pub fn unlimited() -> impl Fn() -> f64 + Copy {
    || f64::INFINITY
}

/// Clock measures the time left out of a fixed budget, starting from when it was created.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Clock {
    start: Instant,
    budget: Duration,
}

impl Clock {
    /// Start a clock with `budget` time to spend.
    pub fn start(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// Milliseconds left of the budget. Negative once the budget is overspent.
    pub fn time_left_ms(&self) -> f64 {
        let budget = self.budget.as_secs_f64();
        let elapsed = self.start.elapsed().as_secs_f64();
        (budget - elapsed) * 1000.0
    }

    /// Returns a probe reading this clock, suitable for `Deadline::new`.
    pub fn probe(&self) -> impl Fn() -> f64 + '_ {
        move || self.time_left_ms()
    }
}
