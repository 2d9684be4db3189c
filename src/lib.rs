//! Computational core for industrial process monitoring
//!
//! This crate provides the decision logic behind a plant dashboard:
//! - Threshold classification of sensor variables (good/warning/critical)
//! - Descriptive statistics over a reading window
//! - Pairwise correlation analysis with significant-pair extraction
//! - Prioritized alarm generation
//! - Snapshot assembly for the consuming UI layer
//!
//! The core is pure: it holds no state between evaluations apart from the
//! immutable threshold catalog, performs no I/O, and returns a fresh
//! `Snapshot` on every call. Rendering, persistence, and data acquisition
//! belong to the collaborators that feed it.

pub mod alarms;
pub mod classify;
pub mod config;
pub mod correlation;
pub mod error;
pub mod models;
pub mod snapshot;
pub mod stats;
pub mod thresholds;

pub use alarms::{alarms_from_statuses, generate_alarms};
pub use classify::{classify, classify_latest};
pub use correlation::{
    correlation_matrix, significant_pairs, CorrelationMatrix, MIN_ALIGNED_SAMPLES,
    SIGNIFICANCE_THRESHOLD,
};
pub use error::MonitorError;
pub use models::*;
pub use snapshot::SnapshotBuilder;
pub use stats::{
    performance_report, summarize, summarize_all, total, DEFAULT_PERFORMANCE_TARGET,
};
pub use thresholds::{Band, ThresholdBand, ThresholdCatalog};
