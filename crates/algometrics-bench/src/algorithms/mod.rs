//! Reference algorithms instrumented with a `MetricsTracker`.
//!
//! Counting conventions, shared by every algorithm here:
//! - one recursion level per (recursive) call, top-level call included;
//! - one comparison per element comparison (a three-way `cmp` counts once);
//! - one allocation per temporary buffer.

pub mod search;
pub mod sort;

pub use search::binary_search;
pub use sort::{insertion_sort, merge_sort, quick_sort};
