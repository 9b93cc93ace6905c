//! Pro rata salary calculation functionality.
//!
//! Converts a full-time-equivalent salary quoted at any pay frequency
//! into yearly, monthly, weekly, daily and hourly pro rata amounts for
//! someone working a fraction of full-time hours.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::{format_gbp, format_percent};
use crate::models::PayFrequency;

use super::rounding::{to_pence, to_pounds};

/// Inputs for a pro rata salary calculation.
///
/// `full_time_hours` must be greater than zero; that contract belongs to
/// the caller and is not validated here. `actual_hours` is conventionally
/// at most `full_time_hours`, but the calculator does not clamp it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProRataInputs {
    /// The full-time-equivalent salary, quoted per `frequency`.
    pub full_time_salary: Decimal,
    /// Full-time hours per week.
    pub full_time_hours: Decimal,
    /// Hours per week actually worked.
    pub actual_hours: Decimal,
    /// How often `full_time_salary` is paid.
    pub frequency: PayFrequency,
    /// Optional employment start date, carried for display only.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Optional employment end date, carried for display only.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// The result of a pro rata salary calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProRataResult {
    /// Pro rata yearly salary, whole pounds.
    pub yearly: Decimal,
    /// Pro rata monthly salary, whole pounds.
    pub monthly: Decimal,
    /// Pro rata weekly salary, whole pounds.
    pub weekly: Decimal,
    /// Pro rata daily salary (260 working days per year), whole pounds.
    pub daily: Decimal,
    /// The full-time-equivalent hourly rate, to the penny.
    pub hourly: Decimal,
    /// The share of full-time hours worked, 0 to 100, unrounded.
    pub percentage: Decimal,
    /// Human-readable summary of the calculation.
    pub explanation: String,
}

/// Calculates pro rata salary amounts from a full-time-equivalent salary.
///
/// The quoted salary is normalized to an annual figure using the period
/// count implied by its frequency (yearly ×1, monthly ×12, weekly ×52,
/// daily ×260 working days per year). The annual equivalent is scaled by
/// the hours fraction, then divided down to monthly, weekly and daily
/// amounts. The hourly rate is the full-time-equivalent rate; it does not
/// scale with the hours fraction.
///
/// # Examples
///
/// ```
/// use statpay_engine::calculation::{ProRataInputs, calculate_pro_rata};
/// use statpay_engine::models::PayFrequency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = ProRataInputs {
///     full_time_salary: Decimal::from_str("30000").unwrap(),
///     full_time_hours: Decimal::from_str("40").unwrap(),
///     actual_hours: Decimal::from_str("20").unwrap(),
///     frequency: PayFrequency::Yearly,
///     start_date: None,
///     end_date: None,
/// };
///
/// let result = calculate_pro_rata(&inputs);
/// assert_eq!(result.percentage, Decimal::from_str("50").unwrap());
/// assert_eq!(result.yearly, Decimal::from_str("15000").unwrap());
/// ```
pub fn calculate_pro_rata(inputs: &ProRataInputs) -> ProRataResult {
    let annual_equivalent = inputs.full_time_salary * inputs.frequency.periods_per_year();
    let percentage = inputs.actual_hours / inputs.full_time_hours * Decimal::ONE_HUNDRED;
    let hourly_rate = annual_equivalent / (inputs.full_time_hours * Decimal::from(52u32));

    let prorated_annual = annual_equivalent * percentage / Decimal::ONE_HUNDRED;
    let yearly = to_pounds(prorated_annual);
    let monthly = to_pounds(prorated_annual / Decimal::from(12u32));
    let weekly = to_pounds(prorated_annual / Decimal::from(52u32));
    let daily = to_pounds(prorated_annual / Decimal::from(260u32));
    let hourly = to_pence(hourly_rate);

    let explanation = format!(
        "Working {} hours of a {}-hour week is {} of full time, giving a pro rata salary of {} per year ({} per month).",
        inputs.actual_hours.normalize(),
        inputs.full_time_hours.normalize(),
        format_percent(percentage),
        format_gbp(yearly),
        format_gbp(monthly),
    );

    ProRataResult {
        yearly,
        monthly,
        weekly,
        daily,
        hourly,
        percentage,
        explanation,
    }
}
