//! Alarm generation
//!
//! Scans the latest value of each monitored variable and raises prioritized
//! alarms for anything non-nominal. Every evaluation produces a complete,
//! independent alarm list; there is no history and no suppression state.

use tracing::debug;

use crate::classify::classify_latest;
use crate::models::{Alarm, AlarmPriority, Reading, Status, VariableStatus};
use crate::thresholds::ThresholdCatalog;

/// Raise alarms for the latest value of each selected variable
///
/// Warning classifies as Medium priority, Critical as High. Good and
/// Unknown emit nothing. High alarms come before Medium; within a priority
/// the input variable order is preserved.
pub fn generate_alarms(
    readings: &[Reading],
    catalog: &ThresholdCatalog,
    variables: &[String],
    evaluated_at: i64,
) -> Vec<Alarm> {
    let statuses = classify_latest(readings, catalog, variables);
    alarms_from_statuses(&statuses, evaluated_at)
}

/// Build the prioritized alarm list from already-classified statuses
pub fn alarms_from_statuses(statuses: &[VariableStatus], evaluated_at: i64) -> Vec<Alarm> {
    let mut high = Vec::new();
    let mut medium = Vec::new();

    for vs in statuses {
        let priority = match vs.status {
            Status::Critical => AlarmPriority::High,
            Status::Warning => AlarmPriority::Medium,
            Status::Good | Status::Unknown => continue,
        };

        let alarm = Alarm {
            variable: vs.variable.clone(),
            value: vs.value,
            status: vs.status,
            priority,
            recommended_action: priority.recommended_action().to_string(),
            timestamp: evaluated_at,
        };

        match priority {
            AlarmPriority::High => high.push(alarm),
            AlarmPriority::Medium => medium.push(alarm),
        }
    }

    if !high.is_empty() || !medium.is_empty() {
        debug!(
            high = high.len(),
            medium = medium.len(),
            "raised alarms for non-nominal variables"
        );
    }

    high.extend(medium);
    high
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::{Band, ThresholdBand};
    use std::collections::HashMap;

    fn test_catalog() -> ThresholdCatalog {
        ThresholdCatalog::new(vec![
            (
                "Temperatura_Reactor_1".to_string(),
                ThresholdBand::new(Band::new(240.0, 260.0), Band::new(230.0, 270.0)),
            ),
            (
                "Presion_Sistema".to_string(),
                ThresholdBand::new(Band::new(12.0, 18.0), Band::new(10.0, 20.0)),
            ),
            (
                "Flujo_Entrada".to_string(),
                ThresholdBand::new(Band::new(90.0, 110.0), Band::new(80.0, 120.0)),
            ),
        ])
        .unwrap()
    }

    fn reading(timestamp: i64, pairs: &[(&str, f64)]) -> Reading {
        let values: HashMap<String, f64> = pairs
            .iter()
            .map(|(name, v)| (name.to_string(), *v))
            .collect();
        Reading::new(timestamp, values)
    }

    #[test]
    fn test_critical_before_warning() {
        let catalog = test_catalog();
        // Pressure selected first but only Warning; Temperature is Critical
        let readings = vec![reading(
            100,
            &[
                ("Presion_Sistema", 19.0),
                ("Temperatura_Reactor_1", 220.0),
            ],
        )];
        let variables = vec![
            "Presion_Sistema".to_string(),
            "Temperatura_Reactor_1".to_string(),
        ];

        let alarms = generate_alarms(&readings, &catalog, &variables, 12345);

        assert_eq!(alarms.len(), 2);
        assert_eq!(alarms[0].variable, "Temperatura_Reactor_1");
        assert_eq!(alarms[0].priority, AlarmPriority::High);
        assert_eq!(alarms[0].recommended_action, "Immediate review");
        assert_eq!(alarms[1].variable, "Presion_Sistema");
        assert_eq!(alarms[1].priority, AlarmPriority::Medium);
        assert_eq!(alarms[1].recommended_action, "Monitor");
    }

    #[test]
    fn test_stable_order_within_priority() {
        let catalog = test_catalog();
        let readings = vec![reading(
            100,
            &[
                ("Presion_Sistema", 19.0),
                ("Flujo_Entrada", 85.0),
            ],
        )];
        let variables = vec![
            "Presion_Sistema".to_string(),
            "Flujo_Entrada".to_string(),
        ];

        let alarms = generate_alarms(&readings, &catalog, &variables, 0);

        // Both Medium: selection order preserved
        assert_eq!(alarms.len(), 2);
        assert_eq!(alarms[0].variable, "Presion_Sistema");
        assert_eq!(alarms[1].variable, "Flujo_Entrada");
    }

    #[test]
    fn test_nominal_and_unknown_emit_nothing() {
        let catalog = test_catalog();
        let readings = vec![reading(
            100,
            &[
                ("Temperatura_Reactor_1", 250.0),
                ("Vibration_Motor", 0.6),
            ],
        )];
        let variables = vec![
            "Temperatura_Reactor_1".to_string(),
            "Vibration_Motor".to_string(),
        ];

        let alarms = generate_alarms(&readings, &catalog, &variables, 0);
        assert!(alarms.is_empty());
    }

    #[test]
    fn test_alarm_uses_latest_value_only() {
        let catalog = test_catalog();
        // Earlier reading is Critical, latest is Good: no alarm
        let readings = vec![
            reading(100, &[("Temperatura_Reactor_1", 220.0)]),
            reading(200, &[("Temperatura_Reactor_1", 250.0)]),
        ];
        let variables = vec!["Temperatura_Reactor_1".to_string()];

        let alarms = generate_alarms(&readings, &catalog, &variables, 0);
        assert!(alarms.is_empty());
    }

    #[test]
    fn test_alarm_carries_evaluation_timestamp() {
        let catalog = test_catalog();
        let readings = vec![reading(100, &[("Temperatura_Reactor_1", 220.0)])];
        let variables = vec!["Temperatura_Reactor_1".to_string()];

        let alarms = generate_alarms(&readings, &catalog, &variables, 98765);
        assert_eq!(alarms.len(), 1);
        assert_eq!(alarms[0].timestamp, 98765);
        assert_eq!(alarms[0].value, 220.0);
        assert_eq!(alarms[0].status, Status::Critical);
    }
}
