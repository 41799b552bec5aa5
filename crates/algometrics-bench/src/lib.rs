//! algometrics bench library entry.
//!
//! This crate wires the strict run configuration, the instrumented reference
//! algorithms, and the runner that drives them through a `MetricsTracker`. It
//! is consumed by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod algorithms;
pub mod config;
pub mod runner;
