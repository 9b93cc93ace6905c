//! Statutory Sick Pay (SSP) calculation functionality.
//!
//! SSP pays a flat weekly statutory rate, pro rated over the employee's
//! qualifying days during a period of sickness. Eligibility requires
//! average weekly earnings at or above the statutory floor and a minimum
//! run of consecutive sick days.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SspRates;
use crate::format::format_gbp;
use crate::models::{BreakdownItem, WeeklyEarnings};

use super::rounding::to_pence;

/// Inputs for a Statutory Sick Pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SspInputs {
    /// Normal working days per week, 1 to 7.
    pub working_days_per_week: u32,
    /// Consecutive calendar days of sickness, at least 1.
    pub sick_days: u32,
    /// Average weekly earnings, direct or derived from annual salary.
    pub earnings: WeeklyEarnings,
}

/// The result of a Statutory Sick Pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SspResult {
    /// Whether the employee qualifies for SSP.
    pub is_eligible: bool,
    /// Total SSP payable for the period, to the penny. Zero if ineligible.
    pub total_ssp: Decimal,
    /// SSP per qualifying day. Zero if ineligible.
    pub daily_ssp_rate: Decimal,
    /// The statutory weekly rate used. Zero if ineligible.
    pub weekly_ssp: Decimal,
    /// Number of working days that attract SSP in the period.
    pub qualifying_days: u32,
    /// The sick period expressed in whole weeks, rounded up.
    pub period_covered_weeks: u32,
    /// Human-readable summary, naming unmet thresholds if ineligible.
    pub explanation: String,
    /// Ordered line items for display. Empty if ineligible.
    pub breakdown: Vec<BreakdownItem>,
}

/// Calculates Statutory Sick Pay for a period of sickness.
///
/// Qualifying days are counted by walking the sick period in 7-day
/// windows starting on the first sick day: each window contributes
/// `min(working_days_per_week, days remaining in window)`. This assumes
/// working days are spread evenly across any 7-day window rather than
/// modelling which calendar weekdays were actually missed; the
/// approximation is part of the output contract and must not be changed
/// without a product decision.
///
/// # Examples
///
/// ```
/// use statpay_engine::calculation::{SspInputs, calculate_ssp};
/// use statpay_engine::config::ConfigLoader;
/// use statpay_engine::models::WeeklyEarnings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let rates = &loader.statutory("2025/26").unwrap().ssp;
///
/// let inputs = SspInputs {
///     working_days_per_week: 5,
///     sick_days: 7,
///     earnings: WeeklyEarnings::Weekly(Decimal::from_str("500").unwrap()),
/// };
///
/// let result = calculate_ssp(&inputs, rates);
/// assert!(result.is_eligible);
/// assert_eq!(result.total_ssp, Decimal::from_str("116.75").unwrap());
/// ```
pub fn calculate_ssp(inputs: &SspInputs, rates: &SspRates) -> SspResult {
    let weekly_pay = inputs.earnings.weekly_pay();

    let mut unmet = Vec::new();
    if weekly_pay < rates.min_weekly_earnings {
        unmet.push(format!(
            "average weekly earnings of {} are below the {} minimum",
            format_gbp(weekly_pay),
            format_gbp(rates.min_weekly_earnings),
        ));
    }
    if inputs.sick_days < rates.min_sick_days {
        unmet.push(format!(
            "{} consecutive sick days is below the minimum of {}",
            inputs.sick_days, rates.min_sick_days,
        ));
    }

    let period_covered_weeks = inputs.sick_days.div_ceil(7);

    if !unmet.is_empty() {
        return SspResult {
            is_eligible: false,
            total_ssp: Decimal::ZERO,
            daily_ssp_rate: Decimal::ZERO,
            weekly_ssp: Decimal::ZERO,
            qualifying_days: 0,
            period_covered_weeks,
            explanation: format!("Not eligible for Statutory Sick Pay: {}.", unmet.join("; ")),
            breakdown: Vec::new(),
        };
    }

    let daily_rate = rates.weekly_rate / Decimal::from(inputs.working_days_per_week);
    let qualifying_days = qualifying_days(inputs.sick_days, inputs.working_days_per_week);
    let total_ssp = to_pence(daily_rate * Decimal::from(qualifying_days));

    let breakdown = vec![
        BreakdownItem::money(
            "Weekly SSP rate",
            rates.weekly_rate,
            "The statutory weekly rate",
            "rate",
        ),
        BreakdownItem::count(
            "Working days per week",
            Decimal::from(inputs.working_days_per_week),
            "Normal working pattern used to spread the weekly rate",
            "calendar",
        ),
        BreakdownItem::money(
            "Daily SSP rate",
            to_pence(daily_rate),
            "Weekly rate divided by working days per week",
            "rate",
        ),
        BreakdownItem::count(
            "Qualifying days",
            Decimal::from(qualifying_days),
            "Working days within the sick period that attract SSP",
            "calendar",
        ),
        BreakdownItem::money(
            "Total SSP",
            total_ssp,
            "Daily rate multiplied by qualifying days",
            "total",
        ),
    ];

    let explanation = format!(
        "Eligible for Statutory Sick Pay: {} qualifying days at {} per day gives {} over {} week(s).",
        qualifying_days,
        format_gbp(daily_rate),
        format_gbp(total_ssp),
        period_covered_weeks,
    );

    SspResult {
        is_eligible: true,
        total_ssp,
        daily_ssp_rate: to_pence(daily_rate),
        weekly_ssp: rates.weekly_rate,
        qualifying_days,
        period_covered_weeks,
        explanation,
        breakdown,
    }
}

/// Counts qualifying days by walking the sick period in 7-day windows.
fn qualifying_days(sick_days: u32, working_days_per_week: u32) -> u32 {
    let mut remaining = sick_days;
    let mut qualifying = 0;
    while remaining > 0 {
        let window = remaining.min(7);
        qualifying += working_days_per_week.min(window);
        remaining -= window;
    }
    qualifying.min(sick_days)
}
