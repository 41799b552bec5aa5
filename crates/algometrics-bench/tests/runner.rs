#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use algometrics_bench::config::{self, InputPattern};
use algometrics_bench::runner::{generate_input, prepare_input, run, run_all, run_with_clock};
use algometrics_core::{ManualClock, MonotonicClock};

#[test]
fn shuffled_input_is_seeded_permutation() {
    let a = generate_input(InputPattern::Shuffled, 500, 7);
    let b = generate_input(InputPattern::Shuffled, 500, 7);
    let c = generate_input(InputPattern::Shuffled, 500, 8);
    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut sorted = a.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, generate_input(InputPattern::Ascending, 500, 0));
}

#[test]
fn report_uses_metrics_template() {
    let cfg = config::load_from_str(
        r#"
version: 1
runs:
  - { name: "q", algorithm: quick_sort, input_len: 10, pattern: ascending, repeat: 3 }
"#,
    )
    .unwrap();

    let report = run_with_clock(&cfg.runs[0], ManualClock::new()).unwrap();
    assert_eq!(report.snapshot.max_depth, 10);
    // Repetitions reset the tracker, so counts reflect a single pass.
    assert_eq!(report.snapshot.comparisons, 45);
    assert_eq!(
        report.to_string(),
        "q (quick_sort, n=10): Metrics{time=0 ns, depth=10, comparisons=45, allocations=0}"
    );
}

#[test]
fn run_all_covers_every_algorithm() {
    let cfg = config::load_from_str(
        r#"
version: 1
runs:
  - { name: "m", algorithm: merge_sort, input_len: 300 }
  - { name: "q", algorithm: quick_sort, input_len: 300, pattern: constant }
  - { name: "i", algorithm: insertion_sort, input_len: 300, pattern: descending }
  - { name: "b", algorithm: binary_search, input_len: 300, seed: 1234 }
  - { name: "e", algorithm: binary_search, input_len: 0 }
"#,
    )
    .unwrap();

    let reports = run_all(&cfg).unwrap();
    assert_eq!(reports.len(), 5);
    assert_eq!(reports[0].snapshot.allocations, 299);
    assert_eq!(reports[1].snapshot.max_depth, 300);
    assert_eq!(reports[2].snapshot.comparisons, 300 * 299 / 2);
    assert!(reports[3].snapshot.comparisons <= 9);
    assert_eq!(reports[4].snapshot.comparisons, 0);
}

#[test]
fn run_uses_monotonic_clock() {
    let cfg = config::load_from_str(
        r#"
version: 1
runs:
  - { name: "m", algorithm: merge_sort, input_len: 2000 }
"#,
    )
    .unwrap();
    let report = run(&cfg.runs[0]).unwrap();
    assert_eq!(report.name, "m");
    assert_eq!(report.input_len, 2000);
    assert!(report.snapshot.max_depth >= 12);
}

#[test]
fn search_input_is_sorted_before_timing() {
    let cfg = config::load_from_str(
        r#"
version: 1
runs:
  - { name: "b", algorithm: binary_search, input_len: 1000, seed: 5 }
  - { name: "m", algorithm: merge_sort, input_len: 1000, seed: 5 }
"#,
    )
    .unwrap();

    let search_input = prepare_input(&cfg.runs[0]);
    assert!(search_input.windows(2).all(|w| w[0] <= w[1]));
    // Sort runs get the raw pattern.
    assert_eq!(
        prepare_input(&cfg.runs[1]),
        generate_input(InputPattern::Shuffled, 1000, 5)
    );
}

#[test]
fn search_timing_excludes_input_sort() {
    let cfg = config::load_from_str(
        r#"
version: 1
runs:
  - { name: "b", algorithm: binary_search, input_len: 1000000, seed: 12345 }
"#,
    )
    .unwrap();

    let report = run_with_clock(&cfg.runs[0], MonotonicClock).unwrap();
    assert!(report.snapshot.comparisons <= 20);
    // Sorting a million shuffled values takes far longer than this.
    assert!(
        report.snapshot.elapsed < Duration::from_millis(50),
        "elapsed {:?}",
        report.snapshot.elapsed
    );
}
