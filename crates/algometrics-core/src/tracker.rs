//! Single-owner metrics tracker.
//!
//! One algorithm run owns one `MetricsTracker` and mutates it through
//! `&mut self`. Counting operations never fail: counters wrap on overflow and
//! `exit_recursion` is permissive (depth may go negative on unbalanced use).
//! `try_exit_recursion` and `DepthGuard` are the strict/structured ways to
//! keep depth balanced.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

use crate::clock::{Clock, MonotonicClock};
use crate::error::{Result, TrackerError};

/// Counter set for one instrumented algorithm run.
#[derive(Debug, Clone)]
pub struct MetricsTracker<C: Clock = MonotonicClock> {
    clock: C,
    current_depth: i32,
    max_depth: i32,
    comparisons: u64,
    allocations: u64,
    start: Instant,
}

impl MetricsTracker<MonotonicClock> {
    /// New tracker on the process monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl Default for MetricsTracker<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MetricsTracker<C> {
    /// New tracker with all counters zeroed, timing from `clock.now()`.
    pub fn with_clock(clock: C) -> Self {
        let start = clock.now();
        Self {
            clock,
            current_depth: 0,
            max_depth: 0,
            comparisons: 0,
            allocations: 0,
            start,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn enter_recursion(&mut self) {
        self.current_depth = self.current_depth.wrapping_add(1);
        self.max_depth = self.max_depth.max(self.current_depth);
    }

    /// Decrement depth. Not floored at zero.
    pub fn exit_recursion(&mut self) {
        if self.current_depth == 0 {
            tracing::warn!(
                max_depth = self.max_depth,
                "exit_recursion without matching enter; depth going negative"
            );
        }
        self.current_depth = self.current_depth.wrapping_sub(1);
    }

    /// Strict exit: refuses to go below zero and leaves state untouched on error.
    pub fn try_exit_recursion(&mut self) -> Result<()> {
        if self.current_depth <= 0 {
            return Err(TrackerError::UnbalancedExit {
                depth: self.current_depth,
            });
        }
        self.current_depth -= 1;
        Ok(())
    }

    /// Enter one level for the lifetime of the returned guard.
    pub fn enter(&mut self) -> DepthGuard<'_, C> {
        self.enter_recursion();
        DepthGuard { tracker: self }
    }

    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons = self.comparisons.wrapping_add(1);
    }

    #[inline]
    pub fn record_comparisons(&mut self, n: u64) {
        self.comparisons = self.comparisons.wrapping_add(n);
    }

    #[inline]
    pub fn record_allocation(&mut self) {
        self.allocations = self.allocations.wrapping_add(1);
    }

    #[inline]
    pub fn record_allocations(&mut self, n: u64) {
        self.allocations = self.allocations.wrapping_add(n);
    }

    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }

    pub fn current_depth(&self) -> i32 {
        self.current_depth
    }

    /// True when every enter has been matched by an exit.
    pub fn is_balanced(&self) -> bool {
        self.current_depth == 0
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn allocations(&self) -> u64 {
        self.allocations
    }

    /// Time since construction or the last `reset`, read fresh on every call.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.start)
    }

    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed().as_nanos()
    }

    /// Zero all counters and restart timing.
    pub fn reset(&mut self) {
        self.current_depth = 0;
        self.max_depth = 0;
        self.comparisons = 0;
        self.allocations = 0;
        self.start = self.clock.now();
    }

    /// Freeze the current readings (elapsed time included).
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            elapsed: self.elapsed(),
            max_depth: self.max_depth,
            comparisons: self.comparisons,
            allocations: self.allocations,
        }
    }
}

impl<C: Clock> fmt::Display for MetricsTracker<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}

/// Scoped recursion level. Exits on drop.
///
/// Derefs to the tracker so the guarded scope can keep recording (and nest
/// further guards).
pub struct DepthGuard<'a, C: Clock = MonotonicClock> {
    tracker: &'a mut MetricsTracker<C>,
}

impl<C: Clock> Deref for DepthGuard<'_, C> {
    type Target = MetricsTracker<C>;

    fn deref(&self) -> &Self::Target {
        self.tracker
    }
}

impl<C: Clock> DerefMut for DepthGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.tracker
    }
}

impl<C: Clock> Drop for DepthGuard<'_, C> {
    fn drop(&mut self) {
        self.tracker.exit_recursion();
    }
}

/// Frozen view of a tracker's readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub elapsed: Duration,
    pub max_depth: i32,
    pub comparisons: u64,
    pub allocations: u64,
}

impl fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Metrics{{time={} ns, depth={}, comparisons={}, allocations={}}}",
            self.elapsed.as_nanos(),
            self.max_depth,
            self.comparisons,
            self.allocations
        )
    }
}
