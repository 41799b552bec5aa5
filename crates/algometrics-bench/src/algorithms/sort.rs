use algometrics_core::{Clock, MetricsTracker};

/// Top-down merge sort. Allocates one buffer (the left half) per merge.
pub fn merge_sort<C: Clock>(v: &mut [i64], tracker: &mut MetricsTracker<C>) {
    let mut t = tracker.enter();
    if v.len() <= 1 {
        return;
    }
    let mid = v.len() / 2;
    merge_sort(&mut v[..mid], &mut *t);
    merge_sort(&mut v[mid..], &mut *t);
    merge(v, mid, &mut *t);
}

fn merge<C: Clock>(v: &mut [i64], mid: usize, t: &mut MetricsTracker<C>) {
    let left = v[..mid].to_vec();
    t.record_allocation();

    // k never overtakes j, so writes only land on consumed slots.
    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < left.len() && j < v.len() {
        t.record_comparison();
        if left[i] <= v[j] {
            v[k] = left[i];
            i += 1;
        } else {
            v[k] = v[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        v[k] = left[i];
        i += 1;
        k += 1;
    }
}

/// Quick sort, Lomuto partition with the last element as pivot. In place.
///
/// Sorted or constant input degenerates to one level per element.
pub fn quick_sort<C: Clock>(v: &mut [i64], t: &mut MetricsTracker<C>) {
    t.enter_recursion();
    if v.len() > 1 {
        let p = partition(v, t);
        let (left, right) = v.split_at_mut(p);
        quick_sort(left, t);
        quick_sort(&mut right[1..], t);
    }
    t.exit_recursion();
}

fn partition<C: Clock>(v: &mut [i64], t: &mut MetricsTracker<C>) -> usize {
    let last = v.len() - 1;
    let pivot = v[last];
    let mut store = 0;
    for i in 0..last {
        t.record_comparison();
        if v[i] <= pivot {
            v.swap(i, store);
            store += 1;
        }
    }
    v.swap(store, last);
    store
}

/// Insertion sort. Iterative, so max depth is 1.
pub fn insertion_sort<C: Clock>(v: &mut [i64], t: &mut MetricsTracker<C>) {
    t.enter_recursion();
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 {
            t.record_comparison();
            if v[j - 1] <= v[j] {
                break;
            }
            v.swap(j - 1, j);
            j -= 1;
        }
    }
    t.exit_recursion();
}
