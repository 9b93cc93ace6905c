//! Calculation logic for the statutory pay engine.
//!
//! This module contains the pure calculation functions: pro rata salary
//! conversion, Statutory Sick Pay, Statutory Paternity Pay, pro rata
//! bonus, term-time-only salary, and UK/Scottish income tax with
//! National Insurance. Each function consumes a typed input record and
//! returns a typed result record with an ordered breakdown; none of them
//! share state or call each other.

mod bonus;
mod pro_rata;
mod rounding;
mod spp;
mod ssp;
mod tax;
mod tto;

pub use bonus::{BonusInputs, BonusResult, calculate_bonus, uk_tax_year_bounds};
pub use pro_rata::{ProRataInputs, ProRataResult, calculate_pro_rata};
pub use spp::{SppInputs, SppResult, calculate_spp};
pub use ssp::{SspInputs, SspResult, calculate_ssp};
pub use tax::{
    Region, ScottishTaxCalculation, TaxBreakdown, TaxCalculation, TaxOutcome,
    calculate_national_insurance, calculate_scottish_tax, calculate_uk_income_tax,
    calculate_uk_tax,
};
pub use tto::{TtoInputs, TtoResult, calculate_tto};
