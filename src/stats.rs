//! KPI aggregation
//!
//! Descriptive statistics over a reading window, computed independently per
//! variable. Degenerate windows resolve to explicit no-data sentinels; NaN
//! never leaves this module.

use tracing::debug;

use crate::models::{PerformanceRating, PerformanceReport, Reading, StatSummary};

/// Efficiency target the reference plant measures itself against
pub const DEFAULT_PERFORMANCE_TARGET: f64 = 85.0;

/// Descriptive statistics for one variable over the window
///
/// Filters the window to readings where the variable is present. Standard
/// deviation uses the n-1 denominator and needs at least two samples.
pub fn summarize(readings: &[Reading], variable: &str) -> StatSummary {
    let values: Vec<f64> = readings.iter().filter_map(|r| r.value(variable)).collect();

    if values.is_empty() {
        debug!(variable, "no samples in window, summary is no-data");
        return StatSummary::no_data(variable);
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let max = values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);

    let std_dev = if count > 1 {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        Some((sum_sq / (count - 1) as f64).sqrt())
    } else {
        None
    };

    StatSummary {
        variable: variable.to_string(),
        mean: Some(mean),
        max: Some(max),
        min: Some(min),
        std_dev,
        count,
    }
}

/// Summaries for a batch of variables, in selection order
///
/// Each summary is computed exactly as `summarize` would; batching carries
/// no cross-variable state.
pub fn summarize_all(readings: &[Reading], variables: &[String]) -> Vec<StatSummary> {
    variables
        .iter()
        .map(|variable| summarize(readings, variable))
        .collect()
}

/// Window average of a performance indicator compared against its target
///
/// Returns `None` when the variable has no samples in the window.
pub fn performance_report(
    readings: &[Reading],
    variable: &str,
    target: f64,
) -> Option<PerformanceReport> {
    let summary = summarize(readings, variable);
    let average = summary.mean?;

    let rating = if average >= 90.0 {
        PerformanceRating::Excellent
    } else if average >= 80.0 {
        PerformanceRating::Acceptable
    } else {
        PerformanceRating::Critical
    };

    Some(PerformanceReport {
        variable: variable.to_string(),
        average,
        target,
        delta_vs_target: average - target,
        rating,
    })
}

/// Sum of a variable over the window (throughput-style indicator)
pub fn total(readings: &[Reading], variable: &str) -> f64 {
    readings.iter().filter_map(|r| r.value(variable)).sum()
}
