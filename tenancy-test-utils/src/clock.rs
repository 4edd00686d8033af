use std::sync::atomic::{AtomicI64, Ordering};

use tenancy::mutator::Clock;

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Advances by `step` milliseconds on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    next: AtomicI64,
    step: i64,
}

impl SteppingClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> i64 {
        self.next.fetch_add(self.step, Ordering::SeqCst)
    }
}
