use std::cmp::Ordering;

use algometrics_core::{Clock, MetricsTracker};

/// Recursive binary search over a sorted slice.
///
/// Returns the index of some element equal to `target`. One comparison per
/// probe, so at most `floor(log2(n)) + 1` comparisons.
pub fn binary_search<C: Clock>(
    v: &[i64],
    target: i64,
    tracker: &mut MetricsTracker<C>,
) -> Option<usize> {
    search(v, target, 0, tracker)
}

fn search<C: Clock>(
    v: &[i64],
    target: i64,
    offset: usize,
    tracker: &mut MetricsTracker<C>,
) -> Option<usize> {
    let mut t = tracker.enter();
    if v.is_empty() {
        return None;
    }
    let mid = v.len() / 2;
    t.record_comparison();
    match v[mid].cmp(&target) {
        Ordering::Equal => Some(offset + mid),
        Ordering::Greater => search(&v[..mid], target, offset, &mut *t),
        Ordering::Less => search(&v[mid + 1..], target, offset + mid + 1, &mut *t),
    }
}
