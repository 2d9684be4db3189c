//! Status classification
//!
//! Maps a variable's value to Good/Warning/Critical against the catalog.
//! The good band is checked before the warning band, so a value on a shared
//! boundary always resolves to the tighter band.

use tracing::debug;

use crate::models::{Reading, Status, VariableStatus};
use crate::thresholds::ThresholdCatalog;

/// Classify a single value for a variable
///
/// Evaluation order is fixed: unknown variable, then good band, then warning
/// band, then critical. A variable without a catalog entry degrades to
/// `Unknown` rather than failing the evaluation.
pub fn classify(catalog: &ThresholdCatalog, variable: &str, value: f64) -> Status {
    let Some(bands) = catalog.bands_for(variable) else {
        return Status::Unknown;
    };

    if bands.good.contains(value) {
        Status::Good
    } else if bands.warning.contains(value) {
        Status::Warning
    } else {
        Status::Critical
    }
}

/// Classify the latest observed value of each selected variable
///
/// Scans the window from the end, so positional order decides "latest" even
/// among duplicate timestamps. Variables absent from every reading are
/// skipped. Output order follows the input selection.
pub fn classify_latest(
    readings: &[Reading],
    catalog: &ThresholdCatalog,
    variables: &[String],
) -> Vec<VariableStatus> {
    let mut statuses = Vec::with_capacity(variables.len());

    for variable in variables {
        let latest = readings.iter().rev().find_map(|r| r.value(variable));
        match latest {
            Some(value) => {
                let status = classify(catalog, variable, value);
                statuses.push(VariableStatus {
                    variable: variable.clone(),
                    value,
                    status,
                });
            }
            None => {
                debug!(
                    variable = variable.as_str(),
                    "no samples in window, skipping classification"
                );
            }
        }
    }

    statuses
}
