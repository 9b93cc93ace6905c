//! Configuration types for the rate-table registry.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML rate tables.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

/// A single income-tax or National Insurance band.
///
/// Bands within a table are contiguous and non-overlapping, listed in
/// ascending threshold order. `threshold` is the published lower bound
/// of the band (inclusive); `upper` is `None` for the unbounded top band.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBand {
    /// The band name used as the breakdown key, e.g. "basic".
    pub name: String,
    /// The marginal rate for this band, between 0 and 1.
    pub rate: Decimal,
    /// The published lower bound of the band.
    pub threshold: Decimal,
    /// The published upper bound, or `None` for the top band.
    #[serde(default)]
    pub upper: Option<Decimal>,
}

/// The income-tax and NI rate tables for one tax year.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxYearRates {
    /// The tax-free personal allowance.
    pub personal_allowance: Decimal,
    /// Income above which the personal allowance would taper away.
    ///
    /// Carried from the published tables but not applied; the taper is a
    /// known gap in the calculation behaviour (see DESIGN.md).
    pub taper_start: Decimal,
    /// Income at which the tapered personal allowance would reach zero.
    ///
    /// Carried but not applied, as with `taper_start`.
    pub taper_end: Decimal,
    /// Income-tax bands for England, Wales and Northern Ireland.
    pub uk_bands: Vec<TaxBand>,
    /// Income-tax bands for Scotland.
    pub scotland_bands: Vec<TaxBand>,
    /// Employee National Insurance bands.
    pub ni_bands: Vec<TaxBand>,
}

/// Statutory Sick Pay rates and eligibility thresholds for one tax year.
#[derive(Debug, Clone, Deserialize)]
pub struct SspRates {
    /// The flat weekly SSP rate.
    pub weekly_rate: Decimal,
    /// Minimum average weekly earnings to qualify.
    pub min_weekly_earnings: Decimal,
    /// Minimum consecutive sick days to qualify.
    pub min_sick_days: u32,
}

/// Statutory Paternity Pay rates and eligibility thresholds for one tax year.
#[derive(Debug, Clone, Deserialize)]
pub struct SppRates {
    /// The weekly SPP cap; the paid rate is the lower of this and 90% of
    /// average weekly earnings.
    pub weekly_cap: Decimal,
    /// Minimum average weekly earnings to qualify.
    pub min_weekly_earnings: Decimal,
    /// Minimum weeks of continuous employment by the qualifying week.
    pub min_weeks_employed: i64,
}

/// The statutory payment rates for one tax year.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryRates {
    /// Statutory Sick Pay rates.
    pub ssp: SspRates,
    /// Statutory Paternity Pay rates.
    pub spp: SppRates,
}

/// Tax-years configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct TaxYearsFile {
    /// Map of tax-year key to that year's rate tables.
    pub tax_years: HashMap<String, TaxYearRates>,
}

/// Statutory-rates configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct StatutoryFile {
    /// Map of tax-year key to that year's statutory rates.
    pub statutory: HashMap<String, StatutoryRates>,
}

/// The complete rate-table registry for the engine.
///
/// Read-only after construction; lookups for unlisted tax years fail
/// loudly with [`EngineError::TaxYearNotFound`] rather than falling back
/// to another year's rates.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Income-tax and NI tables by tax year.
    tax_years: HashMap<String, TaxYearRates>,
    /// Statutory payment rates by tax year.
    statutory: HashMap<String, StatutoryRates>,
}

impl EngineConfig {
    /// Creates a new registry from its component maps.
    pub fn new(
        tax_years: HashMap<String, TaxYearRates>,
        statutory: HashMap<String, StatutoryRates>,
    ) -> Self {
        Self {
            tax_years,
            statutory,
        }
    }

    /// Returns the income-tax and NI tables for a tax year.
    pub fn tax_year(&self, key: &str) -> EngineResult<&TaxYearRates> {
        self.tax_years
            .get(key)
            .ok_or_else(|| EngineError::TaxYearNotFound {
                tax_year: key.to_string(),
            })
    }

    /// Returns the statutory payment rates for a tax year.
    pub fn statutory(&self, key: &str) -> EngineResult<&StatutoryRates> {
        self.statutory
            .get(key)
            .ok_or_else(|| EngineError::TaxYearNotFound {
                tax_year: key.to_string(),
            })
    }

    /// Returns the tax-year keys present in the registry.
    pub fn tax_year_keys(&self) -> impl Iterator<Item = &str> {
        self.tax_years.keys().map(String::as_str)
    }
}
