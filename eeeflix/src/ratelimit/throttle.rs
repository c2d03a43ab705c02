use std::fmt;
use std::time::{Duration, Instant};
use tracing::trace;

use super::clock::{Clock, SystemClock};
use crate::metrics::CallMetrics;

/// Leading-edge throttle.
///
/// The first call runs `f` immediately and opens a window of `period`.
/// Calls inside the window are dropped, not queued. The first call at or
/// after the window's end runs `f` again and opens a new window.
pub struct Throttle<A, F, C = SystemClock>
where
    F: FnMut(A),
    C: Clock,
{
    f: F,
    period: Duration,
    clock: C,
    window_start: Option<Instant>,
    metrics: CallMetrics,
    _args: std::marker::PhantomData<fn(A)>,
}

/// Wraps `f` in a [`Throttle`] driven by the system clock
pub fn throttle<A, F>(f: F, period: Duration) -> Throttle<A, F>
where
    F: FnMut(A),
{
    Throttle::with_clock(f, period, SystemClock)
}

impl<A, F, C> Throttle<A, F, C>
where
    F: FnMut(A),
    C: Clock,
{
    pub fn with_clock(f: F, period: Duration, clock: C) -> Self {
        Self {
            f,
            period,
            clock,
            window_start: None,
            metrics: CallMetrics::new(),
            _args: std::marker::PhantomData,
        }
    }

    /// Shares `metrics` with this governor
    pub fn with_metrics(mut self, metrics: CallMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Runs `f(args)` unless a window is open. Returns whether it ran.
    pub fn call(&mut self, args: A) -> bool {
        self.metrics.record_invocation();
        let now = self.clock.now();
        if self.is_open_at(now) {
            self.metrics.record_drop();
            trace!("Throttled call dropped");
            return false;
        }

        self.window_start = Some(now);
        self.metrics.record_fire();
        (self.f)(args);
        true
    }

    /// Whether a call made now would be dropped
    pub fn is_throttled(&self) -> bool {
        self.is_open_at(self.clock.now())
    }

    /// Closes the current window so the next call runs
    pub fn reset(&mut self) {
        self.window_start = None;
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn metrics(&self) -> &CallMetrics {
        &self.metrics
    }

    fn is_open_at(&self, now: Instant) -> bool {
        self.window_start
            .is_some_and(|start| now.saturating_duration_since(start) < self.period)
    }
}

impl<A, F, C> fmt::Debug for Throttle<A, F, C>
where
    F: FnMut(A),
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttle")
            .field("period", &self.period)
            .field("window_start", &self.window_start)
            .finish()
    }
}
