//! Rate-table configuration for the statutory pay engine.
//!
//! Statutory rates, income-tax bands, and National Insurance bands are
//! versioned configuration keyed by tax-year string (e.g. "2025/26").
//! They are loaded once, either from YAML files on disk or from the
//! copies embedded in the crate, and are immutable afterwards. Adding a
//! new tax year means adding a new registry entry, never editing one.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, SppRates, SspRates, StatutoryRates, TaxBand, TaxYearRates,
};
