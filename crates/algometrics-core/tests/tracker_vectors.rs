//! Tracker operation-sequence vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use vector_loader::{load, replay};

#[test]
fn tracker_vectors() {
    let files = [
        "depth_three_enters.json",
        "record_counts.json",
        "reset_zeroes.json",
        "nested_balance.json",
        "unbalanced_exit.json",
        "strict_exit.json",
        "display_template.json",
    ];

    for f in files {
        let v = load(f);
        let (t, errors) = replay(&v.ops);
        let ex = &v.expect;

        if let Some(d) = ex.max_depth {
            assert_eq!(t.max_depth(), d, "vector={}", v.description);
        }
        if let Some(d) = ex.current_depth {
            assert_eq!(t.current_depth(), d, "vector={}", v.description);
        }
        if let Some(c) = ex.comparisons {
            assert_eq!(t.comparisons(), c, "vector={}", v.description);
        }
        if let Some(a) = ex.allocations {
            assert_eq!(t.allocations(), a, "vector={}", v.description);
        }
        if let Some(ns) = ex.elapsed_ns {
            assert_eq!(t.elapsed_nanos(), u128::from(ns), "vector={}", v.description);
        }
        if let Some(s) = &ex.display {
            assert_eq!(&t.to_string(), s, "vector={}", v.description);
        }
        assert_eq!(errors, ex.errors, "vector={}", v.description);
    }
}
