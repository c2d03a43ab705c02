use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

/// Counts what happened to calls routed through a governor.
///
/// Clones share the same counters, so one instance can be handed to several
/// governors and read back from the composition root.
#[derive(Debug, Clone)]
pub struct CallMetrics {
    invoked: Arc<AtomicU64>,
    fired: Arc<AtomicU64>,
    dropped: Arc<AtomicU64>,
    superseded: Arc<AtomicU64>,
    cancelled: Arc<AtomicU64>,
}

impl CallMetrics {
    pub fn new() -> Self {
        Self {
            invoked: Arc::new(AtomicU64::new(0)),
            fired: Arc::new(AtomicU64::new(0)),
            dropped: Arc::new(AtomicU64::new(0)),
            superseded: Arc::new(AtomicU64::new(0)),
            cancelled: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A wrapped callable was called
    pub fn record_invocation(&self) {
        self.invoked.fetch_add(1, Ordering::Relaxed);
    }

    /// The underlying function ran
    pub fn record_fire(&self) {
        self.fired.fetch_add(1, Ordering::Relaxed);
    }

    /// A throttled call fell inside an open window
    pub fn record_drop(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// A pending debounced call was replaced by a newer one
    pub fn record_supersede(&self) {
        self.superseded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cancel(&self) {
        self.cancelled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn invoked(&self) -> u64 {
        self.invoked.load(Ordering::Relaxed)
    }

    pub fn fired(&self) -> u64 {
        self.fired.load(Ordering::Relaxed)
    }

    pub fn get_stats(&self) -> CallStats {
        CallStats {
            invoked: self.invoked.load(Ordering::Relaxed),
            fired: self.fired.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            superseded: self.superseded.load(Ordering::Relaxed),
            cancelled: self.cancelled.load(Ordering::Relaxed),
        }
    }

    pub fn log_stats(&self, label: &str) {
        let stats = self.get_stats();
        info!(
            "{} call stats: invoked {}, fired {}, dropped {}, superseded {}, cancelled {}",
            label, stats.invoked, stats.fired, stats.dropped, stats.superseded, stats.cancelled
        );
    }
}

impl Default for CallMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of [`CallMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallStats {
    pub invoked: u64,
    pub fired: u64,
    pub dropped: u64,
    pub superseded: u64,
    pub cancelled: u64,
}
