//! Threshold catalog
//!
//! Static mapping from variable name to its good/warning bands. Built once
//! at process start, validated at construction, and never mutated afterward,
//! so it can be shared across threads without locking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::MonitorError;

/// Closed inclusive interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub lo: f64,
    pub hi: f64,
}

impl Band {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }
}

/// Good and warning bands for one variable
///
/// Critical is the implicit complement of the warning band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand {
    pub good: Band,
    pub warning: Band,
}

impl ThresholdBand {
    pub fn new(good: Band, warning: Band) -> Self {
        Self { good, warning }
    }
}

/// Immutable catalog of per-variable threshold bands
#[derive(Debug, Clone)]
pub struct ThresholdCatalog {
    bands: HashMap<String, ThresholdBand>,
}

impl ThresholdCatalog {
    /// Build a catalog from an enumerated band table
    ///
    /// Fails with `InvalidConfig` when any band has inverted bounds or the
    /// good range is not contained in the warning range. Malformed entries
    /// abort construction; they are never silently dropped.
    pub fn new(
        entries: impl IntoIterator<Item = (String, ThresholdBand)>,
    ) -> Result<Self, MonitorError> {
        let mut bands = HashMap::new();
        for (variable, band) in entries {
            validate_band(&variable, &band)?;
            bands.insert(variable, band);
        }
        Ok(Self { bands })
    }

    /// Bands configured for a variable, if any
    pub fn bands_for(&self, variable: &str) -> Option<&ThresholdBand> {
        self.bands.get(variable)
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.bands.contains_key(variable)
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Variable names with configured bands, in no particular order
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.bands.keys().map(String::as_str)
    }

    /// The stock band table for the reference industrial process
    ///
    /// Six variables with the plant's standard operating envelopes. Handy
    /// for demos and as a test fixture.
    pub fn default_industrial() -> Self {
        let entries = [
            ("Temperatura_Reactor_1", (240.0, 260.0), (230.0, 270.0)),
            ("Presion_Sistema", (12.0, 18.0), (10.0, 20.0)),
            ("Flujo_Entrada", (90.0, 110.0), (80.0, 120.0)),
            ("Nivel_Tanque", (60.0, 90.0), (40.0, 100.0)),
            ("pH_Proceso", (6.8, 7.6), (6.5, 8.0)),
            ("Eficiencia_Proceso", (80.0, 100.0), (70.0, 100.0)),
        ];

        Self::new(entries.into_iter().map(|(name, good, warning)| {
            (
                name.to_string(),
                ThresholdBand::new(Band::new(good.0, good.1), Band::new(warning.0, warning.1)),
            )
        }))
        .expect("stock band table is well-formed")
    }
}

fn validate_band(variable: &str, band: &ThresholdBand) -> Result<(), MonitorError> {
    if band.good.lo > band.good.hi {
        return Err(MonitorError::invalid_config(
            variable,
            format!(
                "good range has inverted bounds [{}, {}]",
                band.good.lo, band.good.hi
            ),
        ));
    }
    if band.warning.lo > band.warning.hi {
        return Err(MonitorError::invalid_config(
            variable,
            format!(
                "warning range has inverted bounds [{}, {}]",
                band.warning.lo, band.warning.hi
            ),
        ));
    }
    if band.warning.lo > band.good.lo || band.good.hi > band.warning.hi {
        return Err(MonitorError::invalid_config(
            variable,
            format!(
                "good range [{}, {}] is not contained in warning range [{}, {}]",
                band.good.lo, band.good.hi, band.warning.lo, band.warning.hi
            ),
        ));
    }
    Ok(())
}
