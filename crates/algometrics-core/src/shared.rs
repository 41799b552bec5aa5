//! Thread-safe tracker for instrumenting work spread across threads.
//!
//! `MetricsTracker` is single-owner; when several threads must record into one
//! counter set, share a `SharedTracker` (e.g. behind `Arc`) instead. Counters
//! are relaxed atomics; the start instant sits behind a mutex. A `reset` that
//! races with recording threads may keep some of their increments.

use std::fmt;
use std::sync::atomic::{AtomicI32, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::clock::{Clock, MonotonicClock};
use crate::tracker::MetricsSnapshot;

/// Counter set shared by several recording threads.
pub struct SharedTracker<C: Clock = MonotonicClock> {
    clock: C,
    current_depth: AtomicI32,
    max_depth: AtomicI32,
    comparisons: AtomicU64,
    allocations: AtomicU64,
    start: Mutex<Instant>,
}

impl SharedTracker<MonotonicClock> {
    /// New shared tracker on the process monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl Default for SharedTracker<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SharedTracker<C> {
    /// New shared tracker with all counters zeroed, timing from `clock.now()`.
    pub fn with_clock(clock: C) -> Self {
        let start = clock.now();
        Self {
            clock,
            current_depth: AtomicI32::new(0),
            max_depth: AtomicI32::new(0),
            comparisons: AtomicU64::new(0),
            allocations: AtomicU64::new(0),
            start: Mutex::new(start),
        }
    }

    /// Depth is shared: concurrent enters from different threads stack.
    pub fn enter_recursion(&self) {
        let depth = self.current_depth.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        self.max_depth.fetch_max(depth, Ordering::Relaxed);
    }

    /// Decrement depth. Not floored at zero.
    pub fn exit_recursion(&self) {
        let prev = self.current_depth.fetch_sub(1, Ordering::Relaxed);
        if prev == 0 {
            tracing::warn!("shared exit_recursion without matching enter; depth going negative");
        }
    }

    /// Count one comparison.
    pub fn record_comparison(&self) {
        self.comparisons.fetch_add(1, Ordering::Relaxed);
    }

    /// Count one allocation.
    pub fn record_allocation(&self) {
        self.allocations.fetch_add(1, Ordering::Relaxed);
    }

    /// Highest depth seen since construction or the last `reset`.
    pub fn max_depth(&self) -> i32 {
        self.max_depth.load(Ordering::Relaxed)
    }

    /// Live depth reading; negative after unbalanced exits.
    pub fn current_depth(&self) -> i32 {
        self.current_depth.load(Ordering::Relaxed)
    }

    /// Comparisons recorded so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons.load(Ordering::Relaxed)
    }

    /// Allocations recorded so far.
    pub fn allocations(&self) -> u64 {
        self.allocations.load(Ordering::Relaxed)
    }

    /// Time since construction or the last `reset`.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.start_instant())
    }

    /// Zero all counters (depth included) and restart timing.
    pub fn reset(&self) {
        self.current_depth.store(0, Ordering::Relaxed);
        self.max_depth.store(0, Ordering::Relaxed);
        self.comparisons.store(0, Ordering::Relaxed);
        self.allocations.store(0, Ordering::Relaxed);
        let now = self.clock.now();
        // Poisoned lock only means a recorder panicked; the Instant inside is still valid.
        match self.start.lock() {
            Ok(mut g) => *g = now,
            Err(poisoned) => *poisoned.into_inner() = now,
        }
    }

    /// Freeze the current readings.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            elapsed: self.elapsed(),
            max_depth: self.max_depth(),
            comparisons: self.comparisons(),
            allocations: self.allocations(),
        }
    }

    fn start_instant(&self) -> Instant {
        match self.start.lock() {
            Ok(g) => *g,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl<C: Clock> fmt::Display for SharedTracker<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}
