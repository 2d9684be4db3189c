//! Snapshot orchestration
//!
//! Packages classification, aggregation, correlation, and alarms into one
//! immutable Snapshot for the consuming layer. The builder holds only the
//! shared catalog; every evaluation is a fresh, deterministic function of
//! the supplied window and selection.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::alarms::alarms_from_statuses;
use crate::classify::classify_latest;
use crate::correlation::{correlation_matrix, significant_pairs, SIGNIFICANCE_THRESHOLD};
use crate::error::MonitorError;
use crate::models::{Reading, Snapshot, StatusOverview, WindowBounds};
use crate::stats::summarize_all;
use crate::thresholds::ThresholdCatalog;

/// Builds evaluation snapshots against a shared threshold catalog
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    catalog: Arc<ThresholdCatalog>,
}

impl SnapshotBuilder {
    pub fn new(catalog: Arc<ThresholdCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ThresholdCatalog {
        &self.catalog
    }

    /// Evaluate a reading window, stamped with the current time
    pub fn build(
        &self,
        readings: &[Reading],
        variables: &[String],
    ) -> Result<Snapshot, MonitorError> {
        self.build_at(readings, variables, Utc::now().timestamp())
    }

    /// Evaluate a reading window with an explicit evaluation timestamp
    ///
    /// Two calls with identical inputs yield structurally identical
    /// snapshots; `evaluated_at` is the only time-dependent field of
    /// `build` and is pinned here.
    pub fn build_at(
        &self,
        readings: &[Reading],
        variables: &[String],
        evaluated_at: i64,
    ) -> Result<Snapshot, MonitorError> {
        if readings.is_empty() {
            warn!("evaluation requested on an empty window");
            return Err(MonitorError::EmptyWindow);
        }

        debug!(
            readings = readings.len(),
            variables = variables.len(),
            "building snapshot"
        );

        let statuses = classify_latest(readings, &self.catalog, variables);
        let overview = StatusOverview::from_statuses(&statuses);
        let summaries = summarize_all(readings, variables);
        let matrix = correlation_matrix(readings, variables);
        let correlations = significant_pairs(&matrix, SIGNIFICANCE_THRESHOLD);
        let alarms = alarms_from_statuses(&statuses, evaluated_at);

        // Insertion order is chronological order, so the bounds are the
        // first and last readings
        let window = WindowBounds {
            start: readings[0].timestamp,
            end: readings[readings.len() - 1].timestamp,
            sample_count: readings.len(),
        };

        info!(
            variables = statuses.len(),
            alarms = alarms.len(),
            correlations = correlations.len(),
            "snapshot complete"
        );

        Ok(Snapshot {
            statuses,
            overview,
            summaries,
            correlations,
            alarms,
            window,
            evaluated_at,
        })
    }
}
