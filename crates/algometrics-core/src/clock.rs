//! Monotonic time source used by the trackers.
//!
//! Trackers never read `Instant::now()` directly; they go through a `Clock`
//! so tests can substitute `ManualClock` and assert exact elapsed readings.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Capability providing the current monotonic instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Process monotonic clock (`Instant::now()`).
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Deterministic clock that only moves when told to.
///
/// Clones share the same reading: keep one handle in the test and hand the
/// other to the tracker.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset_nanos: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset_nanos: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Move the clock forward. Saturates at `u64::MAX` nanoseconds past the base.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        // The update closure always returns Some, so this cannot fail.
        self.offset_nanos
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |cur| {
                Some(cur.saturating_add(nanos))
            })
            .unwrap_or_else(|cur| cur);
    }

    /// Total time advanced since creation.
    pub fn offset(&self) -> Duration {
        Duration::from_nanos(self.offset_nanos.load(Ordering::Relaxed))
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset()
    }
}
