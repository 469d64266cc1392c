//! Time source abstraction.
//!
//! Store mutators never read the wall clock directly; they go through a
//! `Clock` so tests can drive the session lifecycle with deterministic
//! timestamps.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use parking_lot::Mutex;

/// A source of "now" for all time-stamping operations.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current local date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Production clock backed by the local system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A settable clock for tests.
///
/// Starts at a fixed timestamp and only moves when `advance` or `set`
/// is called.
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self { now: Mutex::new(start) }
    }

    /// Moves the clock forward by the given duration.
    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock();
        *now += duration;
    }

    /// Jumps the clock to an absolute timestamp.
    pub fn set(&self, timestamp: NaiveDateTime) {
        *self.now.lock() = timestamp;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}
