//! Top-level facade crate for algometrics.
//!
//! Re-exports the tracker core and the instrumented runner so users can depend on a single crate.

pub mod core {
    pub use algometrics_core::*;
}

pub mod bench {
    pub use algometrics_bench::*;
}
