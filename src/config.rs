//! Threshold catalog configuration
//!
//! Loads the band table from a config file with environment overrides and
//! validates it into an immutable `ThresholdCatalog`. A malformed band
//! aborts loading; it is never silently ignored.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::MonitorError;
use crate::thresholds::{Band, ThresholdBand, ThresholdCatalog};

/// One variable's band definition as it appears in configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BandConfig {
    /// Good range as [lo, hi]
    pub good: [f64; 2],
    /// Warning range as [lo, hi]; must contain the good range
    pub warning: [f64; 2],
}

/// Deserialized catalog configuration: variable name -> band definition
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub variables: HashMap<String, BandConfig>,
}

impl CatalogConfig {
    /// Load configuration from a file plus MONITOR-prefixed environment
    /// overrides (e.g. `MONITOR_VARIABLES__PH_PROCESO__GOOD`)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("MONITOR").separator("__"))
            .build()
            .with_context(|| format!("failed to read catalog config from {}", path.display()))?;

        config
            .try_deserialize()
            .context("catalog config has an unexpected shape")
    }

    /// Validate into the immutable runtime catalog
    ///
    /// Fails with `InvalidConfig` for inverted bounds or a good range not
    /// contained in its warning range. Fatal at startup.
    pub fn into_catalog(self) -> Result<ThresholdCatalog, MonitorError> {
        let entries = self.variables.into_iter().map(|(name, band)| {
            (
                name,
                ThresholdBand::new(
                    Band::new(band.good[0], band.good[1]),
                    Band::new(band.warning[0], band.warning[1]),
                ),
            )
        });

        ThresholdCatalog::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_toml_catalog() {
        let file = write_config(
            r#"
[variables.Temperatura_Reactor_1]
good = [240.0, 260.0]
warning = [230.0, 270.0]

[variables.Presion_Sistema]
good = [12.0, 18.0]
warning = [10.0, 20.0]
"#,
        );

        let config = CatalogConfig::load(file.path()).unwrap();
        let catalog = config.into_catalog().unwrap();

        assert_eq!(catalog.len(), 2);
        let bands = catalog.bands_for("Temperatura_Reactor_1").unwrap();
        assert_eq!(bands.good, Band::new(240.0, 260.0));
        assert_eq!(bands.warning, Band::new(230.0, 270.0));
    }

    #[test]
    fn test_loaded_catalog_classifies_like_inline_one() {
        use crate::classify::classify;
        use crate::models::Status;

        let file = write_config(
            r#"
[variables.Temperatura_Reactor_1]
good = [240.0, 260.0]
warning = [230.0, 270.0]
"#,
        );
        let loaded = CatalogConfig::load(file.path())
            .unwrap()
            .into_catalog()
            .unwrap();

        let inline = ThresholdCatalog::new(vec![(
            "Temperatura_Reactor_1".to_string(),
            ThresholdBand::new(Band::new(240.0, 260.0), Band::new(230.0, 270.0)),
        )])
        .unwrap();

        for value in [220.0, 230.0, 240.0, 250.0, 260.0, 265.0, 280.0] {
            assert_eq!(
                classify(&loaded, "Temperatura_Reactor_1", value),
                classify(&inline, "Temperatura_Reactor_1", value),
                "divergence at {value}"
            );
        }
        assert_eq!(
            classify(&loaded, "Temperatura_Reactor_1", 250.0),
            Status::Good
        );
    }

    #[test]
    fn test_malformed_band_aborts_loading() {
        let file = write_config(
            r#"
[variables.Temperatura_Reactor_1]
good = [240.0, 280.0]
warning = [230.0, 270.0]
"#,
        );

        let config = CatalogConfig::load(file.path()).unwrap();
        let err = config.into_catalog().unwrap_err();
        assert!(matches!(err, MonitorError::InvalidConfig { .. }));
        assert!(err.to_string().contains("Temperatura_Reactor_1"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(CatalogConfig::load("/nonexistent/catalog.toml").is_err());
    }
}
