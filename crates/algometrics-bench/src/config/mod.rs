//! Run config loader (strict parsing).

pub mod schema;

use std::fs;

use algometrics_core::error::{Result, TrackerError};

pub use schema::{Algorithm, InputPattern, RunConfig, RunSpec};

pub fn load_from_file(path: &str) -> Result<RunConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TrackerError::Io(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<RunConfig> {
    let cfg: RunConfig = serde_yaml::from_str(s)
        .map_err(|e| TrackerError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    tracing::debug!(runs = cfg.runs.len(), "run config loaded");
    Ok(cfg)
}
