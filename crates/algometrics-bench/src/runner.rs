//! Drives configured runs through the instrumented algorithms.
//!
//! Each run owns one tracker. Input preparation (generation, plus sorting for
//! searches) happens before the tracker is reset, so timing covers the
//! algorithm only. Every repetition resets the
//! same tracker and the report keeps the last repetition's readings.

use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use algometrics_core::error::{Result, TrackerError};
use algometrics_core::{Clock, MetricsSnapshot, MetricsTracker, MonotonicClock};

use crate::algorithms;
use crate::config::{Algorithm, InputPattern, RunConfig, RunSpec};

/// Outcome of one configured run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub name: String,
    pub algorithm: Algorithm,
    pub input_len: usize,
    pub snapshot: MetricsSnapshot,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, n={}): {}",
            self.name, self.algorithm, self.input_len, self.snapshot
        )
    }
}

/// Build a deterministic input of `len` values.
pub fn generate_input(pattern: InputPattern, len: usize, seed: u64) -> Vec<i64> {
    let n = i64::try_from(len).unwrap_or(i64::MAX);
    match pattern {
        InputPattern::Ascending => (0..n).collect(),
        InputPattern::Descending => (0..n).rev().collect(),
        InputPattern::Constant => vec![0; len],
        InputPattern::Shuffled => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut v: Vec<i64> = (0..n).collect();
            v.shuffle(&mut rng);
            v
        }
    }
}

/// Input handed to the algorithm: generated, and sorted for searches.
pub fn prepare_input(spec: &RunSpec) -> Vec<i64> {
    let mut input = generate_input(spec.pattern, spec.input_len, spec.seed);
    if spec.algorithm == Algorithm::BinarySearch {
        input.sort_unstable();
    }
    input
}

pub fn run(spec: &RunSpec) -> Result<RunReport> {
    run_with_clock(spec, MonotonicClock)
}

pub fn run_with_clock<C: Clock>(spec: &RunSpec, clock: C) -> Result<RunReport> {
    let span = tracing::info_span!("run", name = %spec.name, algorithm = %spec.algorithm);
    let _enter = span.enter();

    let mut tracker = MetricsTracker::with_clock(clock);
    for rep in 0..spec.repeat {
        let input = prepare_input(spec);
        tracker.reset();
        execute(spec, input, &mut tracker)?;
        tracing::debug!(rep, metrics = %tracker, "repetition done");
    }

    let report = RunReport {
        name: spec.name.clone(),
        algorithm: spec.algorithm,
        input_len: spec.input_len,
        snapshot: tracker.snapshot(),
    };
    tracing::info!(metrics = %report.snapshot, "run finished");
    Ok(report)
}

pub fn run_all(cfg: &RunConfig) -> Result<Vec<RunReport>> {
    cfg.runs.iter().map(run).collect()
}

fn execute<C: Clock>(
    spec: &RunSpec,
    mut input: Vec<i64>,
    tracker: &mut MetricsTracker<C>,
) -> Result<()> {
    match spec.algorithm {
        Algorithm::MergeSort => algorithms::merge_sort(&mut input, tracker),
        Algorithm::QuickSort => algorithms::quick_sort(&mut input, tracker),
        Algorithm::InsertionSort => algorithms::insertion_sort(&mut input, tracker),
        Algorithm::BinarySearch => search_and_verify(spec, &input, tracker)?,
    }

    if !tracker.is_balanced() {
        return Err(TrackerError::Verification(format!(
            "{} left depth at {}",
            spec.algorithm,
            tracker.current_depth()
        )));
    }
    if spec.algorithm != Algorithm::BinarySearch && !input.windows(2).all(|w| w[0] <= w[1]) {
        return Err(TrackerError::Verification(format!(
            "{} produced unsorted output",
            spec.algorithm
        )));
    }
    Ok(())
}

/// Search for the element at `seed % len` (or anything, on empty input).
fn search_and_verify<C: Clock>(
    spec: &RunSpec,
    sorted: &[i64],
    tracker: &mut MetricsTracker<C>,
) -> Result<()> {
    let Some(target) = pick_target(sorted, spec.seed) else {
        return match algorithms::binary_search(sorted, 0, tracker) {
            None => Ok(()),
            Some(i) => Err(TrackerError::Verification(format!(
                "binary_search found index {i} in empty input"
            ))),
        };
    };

    match algorithms::binary_search(sorted, target, tracker) {
        Some(i) if sorted.get(i) == Some(&target) => Ok(()),
        other => Err(TrackerError::Verification(format!(
            "binary_search for {target} returned {other:?}"
        ))),
    }
}

fn pick_target(sorted: &[i64], seed: u64) -> Option<i64> {
    if sorted.is_empty() {
        return None;
    }
    let idx = usize::try_from(seed % sorted.len() as u64).unwrap_or(0);
    sorted.get(idx).copied()
}
