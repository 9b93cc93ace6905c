//! UK and Scottish income tax and National Insurance calculation.
//!
//! Income tax is computed by a progressive band walk over the rate table
//! selected for the region and tax year; National Insurance uses the
//! same walk shape over its own bands. Rate tables come from the
//! versioned registry in [`crate::config`]; unknown tax years fail
//! loudly rather than falling back.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{EngineConfig, TaxBand, TaxYearRates};
use crate::error::EngineResult;

use super::rounding::to_pence;

/// Which income-tax regime applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// England, Wales and Northern Ireland.
    RestOfUk,
    /// Scotland, which sets its own income-tax bands.
    Scotland,
}

/// Per-band tax amounts, keyed by band name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Income tax due per band.
    pub income_tax: HashMap<String, Decimal>,
    /// National Insurance due per band.
    pub national_insurance: HashMap<String, Decimal>,
}

/// The result of an income tax and National Insurance calculation for
/// England, Wales and Northern Ireland.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxCalculation {
    /// The gross annual salary.
    pub gross_salary: Decimal,
    /// The tax-free personal allowance applied.
    pub personal_allowance: Decimal,
    /// Income above the personal allowance.
    pub taxable_income: Decimal,
    /// Total income tax due.
    pub income_tax: Decimal,
    /// Total employee National Insurance due.
    pub national_insurance: Decimal,
    /// Gross salary less income tax and National Insurance.
    pub take_home_pay: Decimal,
    /// Combined deductions as a percentage of gross, two decimal places.
    pub effective_tax_rate: Decimal,
    /// The tax year the calculation used.
    pub tax_year: String,
    /// Per-band amounts.
    pub breakdown: TaxBreakdown,
}

/// The result of an income tax and National Insurance calculation for
/// Scotland.
///
/// Duplicates the income-tax figure and per-band map under Scottish
/// field names alongside the generic ones, so callers written against
/// [`TaxCalculation`]'s shape keep working. Both copies are always
/// populated identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScottishTaxCalculation {
    /// The gross annual salary.
    pub gross_salary: Decimal,
    /// The tax-free personal allowance applied.
    pub personal_allowance: Decimal,
    /// Income above the personal allowance.
    pub taxable_income: Decimal,
    /// Total income tax due.
    pub income_tax: Decimal,
    /// Total Scottish income tax due; always equals `income_tax`.
    pub scottish_income_tax: Decimal,
    /// Total employee National Insurance due (NI is not devolved).
    pub national_insurance: Decimal,
    /// Gross salary less income tax and National Insurance.
    pub take_home_pay: Decimal,
    /// Combined deductions as a percentage of gross, two decimal places.
    pub effective_tax_rate: Decimal,
    /// The tax year the calculation used.
    pub tax_year: String,
    /// Per-band amounts.
    pub breakdown: TaxBreakdown,
    /// Copy of `breakdown.income_tax` under the Scottish field name.
    pub scottish_breakdown: HashMap<String, Decimal>,
}

/// A region-tagged tax calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxOutcome {
    /// Result under England/Wales/Northern Ireland bands.
    RestOfUk(TaxCalculation),
    /// Result under Scottish bands.
    Scotland(ScottishTaxCalculation),
}

impl TaxOutcome {
    /// Total income tax due.
    pub fn income_tax(&self) -> Decimal {
        match self {
            TaxOutcome::RestOfUk(calc) => calc.income_tax,
            TaxOutcome::Scotland(calc) => calc.income_tax,
        }
    }

    /// Total National Insurance due.
    pub fn national_insurance(&self) -> Decimal {
        match self {
            TaxOutcome::RestOfUk(calc) => calc.national_insurance,
            TaxOutcome::Scotland(calc) => calc.national_insurance,
        }
    }

    /// Gross salary less all deductions.
    pub fn take_home_pay(&self) -> Decimal {
        match self {
            TaxOutcome::RestOfUk(calc) => calc.take_home_pay,
            TaxOutcome::Scotland(calc) => calc.take_home_pay,
        }
    }

    /// Combined deductions as a percentage of gross.
    pub fn effective_tax_rate(&self) -> Decimal {
        match self {
            TaxOutcome::RestOfUk(calc) => calc.effective_tax_rate,
            TaxOutcome::Scotland(calc) => calc.effective_tax_rate,
        }
    }
}

/// Calculates income tax and National Insurance for a gross salary.
///
/// Selects the rate table for `(region, tax_year)` from the registry and
/// dispatches to [`calculate_uk_income_tax`] or [`calculate_scottish_tax`].
/// Unknown tax years are a configuration gap and return
/// [`crate::error::EngineError::TaxYearNotFound`].
///
/// # Examples
///
/// ```
/// use statpay_engine::calculation::{Region, calculate_uk_tax};
/// use statpay_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let outcome = calculate_uk_tax(
///     Decimal::from(60000u32),
///     Region::RestOfUk,
///     "2025/26",
///     loader.config(),
/// )
/// .unwrap();
/// assert!(outcome.income_tax() > Decimal::ZERO);
/// ```
pub fn calculate_uk_tax(
    gross_salary: Decimal,
    region: Region,
    tax_year: &str,
    config: &EngineConfig,
) -> EngineResult<TaxOutcome> {
    let rates = config.tax_year(tax_year)?;
    debug!(?region, tax_year, %gross_salary, "calculating tax");

    Ok(match region {
        Region::RestOfUk => TaxOutcome::RestOfUk(calculate_uk_income_tax(gross_salary, rates, tax_year)),
        Region::Scotland => TaxOutcome::Scotland(calculate_scottish_tax(gross_salary, rates, tax_year)),
    })
}

/// Calculates tax under England/Wales/Northern Ireland bands.
pub fn calculate_uk_income_tax(
    gross_salary: Decimal,
    rates: &TaxYearRates,
    tax_year: &str,
) -> TaxCalculation {
    let personal_allowance = rates.personal_allowance;
    let taxable_income = (gross_salary - personal_allowance).max(Decimal::ZERO);

    let (income_tax, income_breakdown) =
        income_tax_by_band(taxable_income, personal_allowance, &rates.uk_bands);
    let (national_insurance, ni_breakdown) =
        calculate_national_insurance(gross_salary, &rates.ni_bands);

    let take_home_pay = gross_salary - income_tax - national_insurance;
    let effective_tax_rate = effective_rate(income_tax + national_insurance, gross_salary);

    TaxCalculation {
        gross_salary,
        personal_allowance,
        taxable_income,
        income_tax,
        national_insurance,
        take_home_pay,
        effective_tax_rate,
        tax_year: tax_year.to_string(),
        breakdown: TaxBreakdown {
            income_tax: income_breakdown,
            national_insurance: ni_breakdown,
        },
    }
}

/// Calculates tax under Scottish bands.
///
/// National Insurance is not devolved, so the NI figure matches what the
/// same salary would attract anywhere in the UK.
pub fn calculate_scottish_tax(
    gross_salary: Decimal,
    rates: &TaxYearRates,
    tax_year: &str,
) -> ScottishTaxCalculation {
    let personal_allowance = rates.personal_allowance;
    let taxable_income = (gross_salary - personal_allowance).max(Decimal::ZERO);

    let (income_tax, income_breakdown) =
        income_tax_by_band(taxable_income, personal_allowance, &rates.scotland_bands);
    let (national_insurance, ni_breakdown) =
        calculate_national_insurance(gross_salary, &rates.ni_bands);

    let take_home_pay = gross_salary - income_tax - national_insurance;
    let effective_tax_rate = effective_rate(income_tax + national_insurance, gross_salary);

    ScottishTaxCalculation {
        gross_salary,
        personal_allowance,
        taxable_income,
        income_tax,
        scottish_income_tax: income_tax,
        national_insurance,
        take_home_pay,
        effective_tax_rate,
        tax_year: tax_year.to_string(),
        scottish_breakdown: income_breakdown.clone(),
        breakdown: TaxBreakdown {
            income_tax: income_breakdown,
            national_insurance: ni_breakdown,
        },
    }
}

/// Calculates employee National Insurance over the NI bands.
///
/// The walk operates on gross salary directly, with `threshold - 1` as
/// the effective band start. The published tables state thresholds as
/// "earn at least £X", which excludes the boundary pound; the off-by-one
/// is part of the output contract.
pub fn calculate_national_insurance(
    gross_salary: Decimal,
    bands: &[TaxBand],
) -> (Decimal, HashMap<String, Decimal>) {
    let mut total = Decimal::ZERO;
    let mut breakdown = HashMap::new();

    for band in bands {
        let band_start = band.threshold - Decimal::ONE;
        let band_end = match band.upper {
            Some(upper) => upper.min(gross_salary),
            None => gross_salary,
        };
        if band_end > band_start {
            let due = (band_end - band_start) * band.rate;
            total += due;
            breakdown.insert(band.name.clone(), due);
        }
    }

    (total, breakdown)
}

/// Walks the income-tax bands over taxable income.
///
/// Band bounds are published against gross income, so each is shifted
/// down by the personal allowance before being compared with taxable
/// income. A band contributes nothing when it lies entirely above the
/// taxable income or entirely below its own start.
fn income_tax_by_band(
    taxable_income: Decimal,
    personal_allowance: Decimal,
    bands: &[TaxBand],
) -> (Decimal, HashMap<String, Decimal>) {
    let mut total = Decimal::ZERO;
    let mut breakdown = HashMap::new();

    for band in bands {
        let band_start = (band.threshold - personal_allowance).max(Decimal::ZERO);
        let band_end = match band.upper {
            Some(upper) => (upper - personal_allowance).min(taxable_income),
            None => taxable_income,
        };
        if band_end > band_start {
            let due = (band_end - band_start) * band.rate;
            total += due;
            breakdown.insert(band.name.clone(), due);
        }
    }

    (total, breakdown)
}

/// Combined deductions as a percentage of gross, avoiding division by zero.
fn effective_rate(total_deductions: Decimal, gross_salary: Decimal) -> Decimal {
    if gross_salary.is_zero() {
        Decimal::ZERO
    } else {
        to_pence(total_deductions / gross_salary * Decimal::ONE_HUNDRED)
    }
}
