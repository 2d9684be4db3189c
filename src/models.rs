//! Core data models for the monitoring core

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One periodic sensor sample: a timestamp plus the variables observed at
/// that instant. Not every variable is present in every reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    /// Unix timestamp in seconds
    pub timestamp: i64,
    /// Variable name -> observed value
    pub values: HashMap<String, f64>,
}

impl Reading {
    pub fn new(timestamp: i64, values: HashMap<String, f64>) -> Self {
        Self { timestamp, values }
    }

    /// Value of a single variable in this reading, if observed
    pub fn value(&self, variable: &str) -> Option<f64> {
        self.values.get(variable).copied()
    }
}

/// Health status of a process variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Value inside the good band
    Good,
    /// Value outside good but inside the warning band
    Warning,
    /// Value outside the warning band
    Critical,
    /// Variable has no catalog entry
    Unknown,
}

impl Status {
    /// Returns true if the variable needs operator attention
    pub fn is_alarming(&self) -> bool {
        matches!(self, Status::Warning | Status::Critical)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Good => write!(f, "good"),
            Status::Warning => write!(f, "warning"),
            Status::Critical => write!(f, "critical"),
            Status::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classification of one variable's latest value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableStatus {
    pub variable: String,
    pub value: f64,
    pub status: Status,
}

/// Descriptive statistics for one variable over a reading window
///
/// `None` is the explicit no-data sentinel: a summary never carries NaN.
/// A zero-sample window leaves every field unset; a single-sample window
/// has mean/max/min but no standard deviation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSummary {
    pub variable: String,
    pub mean: Option<f64>,
    pub max: Option<f64>,
    pub min: Option<f64>,
    /// Sample standard deviation (n-1 denominator); requires >= 2 samples
    pub std_dev: Option<f64>,
    pub count: usize,
}

impl StatSummary {
    /// Summary for a variable with no samples in the window
    pub fn no_data(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            mean: None,
            max: None,
            min: None,
            std_dev: None,
            count: 0,
        }
    }
}

/// Strength label for a significant correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    /// r > 0.7
    StrongPositive,
    /// r < -0.7
    StrongNegative,
    /// 0.5 < |r| <= 0.7
    Moderate,
}

impl CorrelationStrength {
    /// Label for a coefficient, assuming it already passed the
    /// significance threshold
    pub fn for_coefficient(r: f64) -> Self {
        if r > 0.7 {
            CorrelationStrength::StrongPositive
        } else if r < -0.7 {
            CorrelationStrength::StrongNegative
        } else {
            CorrelationStrength::Moderate
        }
    }
}

impl std::fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrelationStrength::StrongPositive => write!(f, "strong positive"),
            CorrelationStrength::StrongNegative => write!(f, "strong negative"),
            CorrelationStrength::Moderate => write!(f, "moderate"),
        }
    }
}

/// A significant correlation between two variables
///
/// The pair is unordered; `variable_a` is always the lexicographically
/// smaller name, so (A,B) and (B,A) can never both appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationPair {
    pub variable_a: String,
    pub variable_b: String,
    pub coefficient: f64,
    pub strength: CorrelationStrength,
}

/// Alarm priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmPriority {
    /// Critical status
    High,
    /// Warning status
    Medium,
}

impl AlarmPriority {
    /// Fixed operator guidance per priority
    pub fn recommended_action(&self) -> &'static str {
        match self {
            AlarmPriority::High => "Immediate review",
            AlarmPriority::Medium => "Monitor",
        }
    }
}

impl std::fmt::Display for AlarmPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlarmPriority::High => write!(f, "high"),
            AlarmPriority::Medium => write!(f, "medium"),
        }
    }
}

/// An alarm raised for a non-nominal variable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alarm {
    pub variable: String,
    pub value: f64,
    /// Warning or Critical only
    pub status: Status,
    pub priority: AlarmPriority,
    pub recommended_action: String,
    /// Unix timestamp of the evaluation that raised this alarm
    pub timestamp: i64,
}

/// Bounds of the evaluated reading window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowBounds {
    /// Timestamp of the first reading
    pub start: i64,
    /// Timestamp of the last reading
    pub end: i64,
    pub sample_count: usize,
}

/// Counts of variables per status tier
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusOverview {
    pub good: usize,
    pub warning: usize,
    pub critical: usize,
    pub unknown: usize,
}

impl StatusOverview {
    /// Tally an evaluated status list
    pub fn from_statuses(statuses: &[VariableStatus]) -> Self {
        let mut overview = StatusOverview::default();
        for vs in statuses {
            match vs.status {
                Status::Good => overview.good += 1,
                Status::Warning => overview.warning += 1,
                Status::Critical => overview.critical += 1,
                Status::Unknown => overview.unknown += 1,
            }
        }
        overview
    }

    pub fn total(&self) -> usize {
        self.good + self.warning + self.critical + self.unknown
    }
}

/// Verdict on a performance indicator's window average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceRating {
    /// Average >= 90
    Excellent,
    /// Average >= 80
    Acceptable,
    /// Average below 80
    Critical,
}

/// A performance indicator's window average compared against its target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub variable: String,
    pub average: f64,
    pub target: f64,
    pub delta_vs_target: f64,
    pub rating: PerformanceRating,
}

/// Complete output of one evaluation cycle
///
/// Owned solely by the caller once returned; the core keeps no reference
/// and no state between evaluations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub statuses: Vec<VariableStatus>,
    pub overview: StatusOverview,
    pub summaries: Vec<StatSummary>,
    pub correlations: Vec<CorrelationPair>,
    pub alarms: Vec<Alarm>,
    pub window: WindowBounds,
    /// Unix timestamp at which this snapshot was computed
    pub evaluated_at: i64,
}
