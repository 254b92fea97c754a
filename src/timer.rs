//! Cooperative timing policies for a single-threaded event loop.
//!
//! Nothing here spawns threads or blocks. Both utilities are driven by
//! polling with an injected [`Instant`], which keeps them deterministic
//! under test and trivially cancelable when their owner is torn down.

use std::time::{Duration, Instant};

/// Quiet period for search-text debouncing.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalesces a stream of values into the last one written during a
/// quiet window.
///
/// Each `submit` replaces any pending value and re-arms the deadline
/// (last-writer-wins, no queueing). `poll` hands the value over once
/// the quiet period has elapsed with no further submissions.
#[derive(Debug)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Debouncer {
            quiet,
            pending: None,
            deadline: None,
        }
    }

    /// Stage `value` for commit after the quiet period, superseding any
    /// earlier pending value.
    pub fn submit(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.deadline = Some(now + self.quiet);
    }

    /// Commit the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Drop any pending value. A torn-down owner must call this so a
    /// later poll cannot act on stale state.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Debouncer::new(SEARCH_DEBOUNCE)
    }
}

/// Fires at a fixed period, independent of other work on the loop.
///
/// `poll` reports at most one tick per call and re-arms from the poll
/// time, so a stalled loop does not burst-fire missed ticks.
#[derive(Debug)]
pub struct IntervalTimer {
    period: Duration,
    next: Option<Instant>,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        IntervalTimer { period, next: None }
    }

    /// Arm the timer; the first tick fires one period from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    /// True once per elapsed period while armed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                self.next = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// Disarm. Subsequent polls return false until restarted.
    pub fn cancel(&mut self) {
        self.next = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }
}
