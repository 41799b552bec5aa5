//! algometrics bench runner.
//!
//! Reads a run config (first argument, default `algometrics.yaml`), runs each
//! configured algorithm under a `MetricsTracker`, and prints one summary line
//! per run. Log filtering follows `RUST_LOG`.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use algometrics_bench::{config, runner};

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "algometrics.yaml".to_string());

    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(%path, code = e.code().as_str(), error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%path, runs = cfg.runs.len(), "algometrics-bench starting");
    match runner::run_all(&cfg) {
        Ok(reports) => {
            for r in &reports {
                println!("{r}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
