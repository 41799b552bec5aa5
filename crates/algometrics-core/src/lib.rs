//! algometrics core: the metrics tracker, its clock capability, and error types.
//!
//! This crate holds the caller-driven counter set used to instrument algorithm
//! runs (elapsed time, recursion depth, comparisons, allocations). It carries
//! no runtime dependencies beyond `thiserror` and `tracing` so any algorithm
//! crate can pull it in.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. The tracker's
//! counting operations are total; strict variants report misuse as
//! `TrackerError` instead of panicking.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod error;
pub mod shared;
pub mod tracker;

pub use clock::{Clock, ManualClock, MonotonicClock};
/// Shared result type.
pub use error::{Result, TrackerError};
pub use shared::SharedTracker;
pub use tracker::{DepthGuard, MetricsSnapshot, MetricsTracker};
