//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! rate-table registry, either from YAML files on disk or from the
//! copies embedded in the crate at build time.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, StatutoryFile, StatutoryRates, TaxYearRates, TaxYearsFile};

/// The tax-year rate tables shipped with the crate.
const BUILTIN_TAX_YEARS: &str = include_str!("../../config/uk/tax_years.yaml");
/// The statutory payment rates shipped with the crate.
const BUILTIN_STATUTORY: &str = include_str!("../../config/uk/statutory.yaml");

/// Loads and provides access to the rate-table registry.
///
/// # Directory Structure
///
/// When loading from disk, the configuration directory should contain:
/// ```text
/// config/uk/
/// ├── tax_years.yaml   # Income-tax and NI tables by tax year
/// └── statutory.yaml   # SSP/SPP rates by tax year
/// ```
///
/// # Example
///
/// ```
/// use statpay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let rates = loader.tax_year("2025/26").unwrap();
/// assert!(!rates.uk_bands.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/uk")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tax_years_path = path.join("tax_years.yaml");
        let tax_years = Self::load_yaml::<TaxYearsFile>(&tax_years_path)?;

        let statutory_path = path.join("statutory.yaml");
        let statutory = Self::load_yaml::<StatutoryFile>(&statutory_path)?;

        debug!(path = %path.display(), "loaded rate tables from disk");

        Ok(Self {
            config: EngineConfig::new(tax_years.tax_years, statutory.statutory),
        })
    }

    /// Loads the rate tables embedded in the crate.
    ///
    /// This is the usual entry point: it requires no filesystem access
    /// and always reflects the tables the crate was built with.
    pub fn builtin() -> EngineResult<Self> {
        let tax_years = Self::parse_yaml::<TaxYearsFile>(BUILTIN_TAX_YEARS, "builtin:tax_years.yaml")?;
        let statutory = Self::parse_yaml::<StatutoryFile>(BUILTIN_STATUTORY, "builtin:statutory.yaml")?;

        debug!("loaded builtin rate tables");

        Ok(Self {
            config: EngineConfig::new(tax_years.tax_years, statutory.statutory),
        })
    }

    /// Loads and parses a YAML file from disk.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    /// Parses YAML content, reporting the source name on failure.
    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, source: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded registry.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the income-tax and NI tables for a tax year.
    pub fn tax_year(&self, key: &str) -> EngineResult<&TaxYearRates> {
        self.config.tax_year(key)
    }

    /// Returns the statutory payment rates for a tax year.
    pub fn statutory(&self, key: &str) -> EngineResult<&StatutoryRates> {
        self.config.statutory(key)
    }
}
