//! Extractor metrics.

use metrics::{counter, histogram};

/// Metric name constants for consistency.
pub mod names {
    /// Total extractor invocations by operation and outcome.
    pub const EXTRACTOR_RUNS_TOTAL: &str = "tunelink_extractor_runs_total";

    /// Extractor wall time in seconds by operation.
    pub const EXTRACTOR_DURATION_SECONDS: &str = "tunelink_extractor_duration_seconds";
}

/// Record a finished extractor invocation.
pub fn record_extractor_run(operation: &str, success: bool, duration_secs: f64) {
    let outcome = if success { "success" } else { "failure" };

    counter!(
        names::EXTRACTOR_RUNS_TOTAL,
        "operation" => operation.to_string(),
        "outcome" => outcome
    )
    .increment(1);

    histogram!(
        names::EXTRACTOR_DURATION_SECONDS,
        "operation" => operation.to_string()
    )
    .record(duration_secs);
}
