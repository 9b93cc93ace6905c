//! Error types for the statutory pay engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that statutory ineligibility (SSP/SPP) is not an error: it is a
//! normal result carrying `is_eligible: false` and a human-readable reason.

use thiserror::Error;

/// The main error type for the statutory pay engine.
///
/// Errors only occur at the configuration boundary: a missing or malformed
/// rate-table file, or a lookup for a tax year that has no registry entry.
/// The calculators themselves are pure and total over their documented
/// input contracts.
///
/// # Example
///
/// ```
/// use statpay_engine::error::EngineError;
///
/// let error = EngineError::TaxYearNotFound {
///     tax_year: "1999/00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Tax year not found in rate tables: 1999/00");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rate tables exist for the requested tax year.
    ///
    /// This indicates a configuration gap, not user error. The engine
    /// never falls back to another year's rates.
    #[error("Tax year not found in rate tables: {tax_year}")]
    TaxYearNotFound {
        /// The tax-year key that was requested (e.g. "2025/26").
        tax_year: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
