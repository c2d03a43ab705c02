use std::fmt;
use std::time::{Duration, Instant};
use tracing::trace;

use super::clock::{Clock, SystemClock};
use crate::metrics::CallMetrics;

struct Pending<A> {
    args: A,
    deadline: Instant,
}

/// Trailing-edge debounce.
///
/// [`call`](Self::call) stores the latest arguments and pushes the deadline
/// to `now + wait`; [`poll`](Self::poll) runs the function once that deadline
/// has passed. A burst of calls therefore runs `f` once, with the arguments
/// of the last call. There is a single pending slot, so rescheduling
/// replaces rather than accumulates.
pub struct Debounce<A, F, C = SystemClock>
where
    F: FnMut(A),
    C: Clock,
{
    f: F,
    wait: Duration,
    clock: C,
    pending: Option<Pending<A>>,
    metrics: CallMetrics,
}

/// Wraps `f` in a [`Debounce`] driven by the system clock
pub fn debounce<A, F>(f: F, wait: Duration) -> Debounce<A, F>
where
    F: FnMut(A),
{
    Debounce::with_clock(f, wait, SystemClock)
}

impl<A, F, C> Debounce<A, F, C>
where
    F: FnMut(A),
    C: Clock,
{
    pub fn with_clock(f: F, wait: Duration, clock: C) -> Self {
        Self {
            f,
            wait,
            clock,
            pending: None,
            metrics: CallMetrics::new(),
        }
    }

    /// Shares `metrics` with this governor
    pub fn with_metrics(mut self, metrics: CallMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Schedules `f(args)` for `wait` from now, discarding any earlier schedule
    pub fn call(&mut self, args: A) {
        self.metrics.record_invocation();
        let deadline = self.clock.now() + self.wait;
        if self.pending.replace(Pending { args, deadline }).is_some() {
            self.metrics.record_supersede();
            trace!("Debounced call superseded");
        }
    }

    /// Runs the pending call if its deadline has passed
    pub fn poll(&mut self) -> bool {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| self.clock.now() >= p.deadline);
        if due {
            self.fire();
        }
        due
    }

    /// Runs the pending call now, regardless of its deadline
    pub fn flush(&mut self) -> bool {
        if self.pending.is_some() {
            self.fire();
            true
        } else {
            false
        }
    }

    /// Drops the pending call without running it
    pub fn cancel(&mut self) -> bool {
        let had_pending = self.pending.take().is_some();
        if had_pending {
            self.metrics.record_cancel();
        }
        had_pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending call becomes due, for event loops that sleep
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn metrics(&self) -> &CallMetrics {
        &self.metrics
    }

    fn fire(&mut self) {
        if let Some(Pending { args, .. }) = self.pending.take() {
            self.metrics.record_fire();
            (self.f)(args);
        }
    }
}

impl<A, F, C> fmt::Debug for Debounce<A, F, C>
where
    F: FnMut(A),
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounce")
            .field("wait", &self.wait)
            .field("pending", &self.is_pending())
            .finish()
    }
}
