use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

use algometrics_core::error::{Result, TrackerError};

/// Largest input any run may request.
pub const MAX_INPUT_LEN: usize = 1_000_000;
/// Quick sort on non-shuffled input recurses once per element.
pub const MAX_DEGENERATE_QUICK_SORT_LEN: usize = 10_000;
/// Insertion sort is quadratic.
pub const MAX_INSERTION_SORT_LEN: usize = 50_000;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub version: u32,

    #[serde(default)]
    pub runs: Vec<RunSpec>,
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TrackerError::UnsupportedVersion(self.version));
        }
        if self.runs.is_empty() {
            return Err(TrackerError::BadConfig("runs must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for run in &self.runs {
            run.validate()?;
            if !seen.insert(run.name.as_str()) {
                return Err(TrackerError::BadConfig(format!(
                    "duplicate run name: {}",
                    run.name
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSpec {
    pub name: String,

    pub algorithm: Algorithm,

    #[serde(default = "default_input_len")]
    pub input_len: usize,

    #[serde(default)]
    pub pattern: InputPattern,

    #[serde(default)]
    pub seed: u64,

    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

impl RunSpec {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::BadConfig("runs[].name must not be empty".into()));
        }
        if self.input_len > MAX_INPUT_LEN {
            return Err(TrackerError::BadConfig(format!(
                "run {}: input_len must be at most {MAX_INPUT_LEN}",
                self.name
            )));
        }
        if !(1..=1000).contains(&self.repeat) {
            return Err(TrackerError::BadConfig(format!(
                "run {}: repeat must be between 1 and 1000",
                self.name
            )));
        }
        match self.algorithm {
            Algorithm::QuickSort
                if self.pattern != InputPattern::Shuffled
                    && self.input_len > MAX_DEGENERATE_QUICK_SORT_LEN =>
            {
                Err(TrackerError::BadConfig(format!(
                    "run {}: quick_sort on {} input is limited to {MAX_DEGENERATE_QUICK_SORT_LEN} elements",
                    self.name, self.pattern
                )))
            }
            Algorithm::InsertionSort if self.input_len > MAX_INSERTION_SORT_LEN => {
                Err(TrackerError::BadConfig(format!(
                    "run {}: insertion_sort is limited to {MAX_INSERTION_SORT_LEN} elements",
                    self.name
                )))
            }
            _ => Ok(()),
        }
    }
}

fn default_input_len() -> usize {
    1000
}
fn default_repeat() -> u32 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    MergeSort,
    QuickSort,
    InsertionSort,
    BinarySearch,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::MergeSort => "merge_sort",
            Algorithm::QuickSort => "quick_sort",
            Algorithm::InsertionSort => "insertion_sort",
            Algorithm::BinarySearch => "binary_search",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPattern {
    Ascending,
    Descending,
    #[default]
    Shuffled,
    Constant,
}

impl InputPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            InputPattern::Ascending => "ascending",
            InputPattern::Descending => "descending",
            InputPattern::Shuffled => "shuffled",
            InputPattern::Constant => "constant",
        }
    }
}

impl fmt::Display for InputPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
