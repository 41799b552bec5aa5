#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use algometrics_bench::algorithms::{binary_search, insertion_sort, merge_sort, quick_sort};
use algometrics_bench::config::InputPattern;
use algometrics_bench::runner::generate_input;
use algometrics_core::{ManualClock, MetricsTracker};

fn tracker() -> MetricsTracker<ManualClock> {
    MetricsTracker::with_clock(ManualClock::new())
}

fn is_sorted(v: &[i64]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn merge_sort_counts() {
    let mut v: Vec<i64> = (0..8).collect();
    let mut t = tracker();
    merge_sort(&mut v, &mut t);

    assert!(is_sorted(&v));
    assert!(t.is_balanced());
    assert_eq!(t.max_depth(), 4);
    // One buffer per merge: n - 1 merges.
    assert_eq!(t.allocations(), 7);
    // Ascending input: each merge drains the left half first.
    assert_eq!(t.comparisons(), 12);
}

#[test]
fn merge_sort_trivial_inputs() {
    for len in [0usize, 1] {
        let mut v = generate_input(InputPattern::Ascending, len, 0);
        let mut t = tracker();
        merge_sort(&mut v, &mut t);
        assert_eq!(t.max_depth(), 1);
        assert_eq!(t.allocations(), 0);
        assert_eq!(t.comparisons(), 0);
    }
}

#[test]
fn quick_sort_degenerates_on_sorted_input() {
    let mut v = generate_input(InputPattern::Ascending, 50, 0);
    let mut t = tracker();
    quick_sort(&mut v, &mut t);

    assert!(is_sorted(&v));
    assert!(t.is_balanced());
    assert_eq!(t.max_depth(), 50);
    assert_eq!(t.comparisons(), 50 * 49 / 2);
    assert_eq!(t.allocations(), 0);
}

#[test]
fn quick_sort_shuffled() {
    let mut v = generate_input(InputPattern::Shuffled, 2000, 99);
    let mut t = tracker();
    quick_sort(&mut v, &mut t);

    assert!(is_sorted(&v));
    assert!(t.is_balanced());
    assert!(t.max_depth() < 200, "depth {}", t.max_depth());
}

#[test]
fn insertion_sort_counts() {
    let mut asc = generate_input(InputPattern::Ascending, 100, 0);
    let mut t = tracker();
    insertion_sort(&mut asc, &mut t);
    assert_eq!(t.comparisons(), 99);
    assert_eq!(t.max_depth(), 1);

    let mut desc = generate_input(InputPattern::Descending, 100, 0);
    t.reset();
    insertion_sort(&mut desc, &mut t);
    assert!(is_sorted(&desc));
    assert_eq!(t.comparisons(), 100 * 99 / 2);
    assert!(t.is_balanced());
}

#[test]
fn binary_search_probe_bound() {
    let v = generate_input(InputPattern::Ascending, 1000, 0);
    for target in [0i64, 1, 499, 500, 998, 999] {
        let mut t = tracker();
        let idx = binary_search(&v, target, &mut t);
        assert_eq!(idx, Some(target as usize));
        assert!(t.comparisons() <= 10, "target={target}");
        assert!(t.is_balanced());
    }
}

#[test]
fn binary_search_missing() {
    let v: Vec<i64> = vec![1, 3, 5, 7];
    let mut t = tracker();
    assert_eq!(binary_search(&v, 4, &mut t), None);
    assert!(t.comparisons() <= 3);
    assert!(t.is_balanced());

    let mut t = tracker();
    assert_eq!(binary_search(&[], 4, &mut t), None);
    assert_eq!(t.comparisons(), 0);
    assert_eq!(t.max_depth(), 1);
}
