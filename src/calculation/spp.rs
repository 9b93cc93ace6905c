//! Statutory Paternity Pay (SPP) calculation functionality.
//!
//! SPP pays the lower of 90% of average weekly earnings and the statutory
//! weekly cap, for one or two whole weeks of leave. Eligibility is tested
//! at the qualifying week, which falls 15 weeks before the expected week
//! of childbirth.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SppRates;
use crate::format::format_gbp;
use crate::models::{BreakdownItem, WeeklyEarnings};

use super::rounding::to_pence;

/// Inputs for a Statutory Paternity Pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SppInputs {
    /// Average weekly earnings, direct or derived from annual salary.
    pub earnings: WeeklyEarnings,
    /// The date continuous employment began.
    pub employment_start_date: NaiveDate,
    /// The expected week of childbirth.
    pub expected_week_of_childbirth: NaiveDate,
    /// The date leave is planned to start, carried for display only.
    pub planned_leave_start_date: NaiveDate,
    /// Weeks of paternity leave taken; must be 1 or 2 to qualify.
    pub weeks_of_leave: u8,
}

/// The result of a Statutory Paternity Pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SppResult {
    /// Whether the employee qualifies for SPP.
    pub is_eligible: bool,
    /// Why the employee does or does not qualify.
    pub eligibility_reason: String,
    /// The qualifying week: 15 weeks before the expected week of childbirth.
    pub qualifying_week: NaiveDate,
    /// Whole weeks of continuous employment by the qualifying week.
    ///
    /// Negative when employment starts after the qualifying week.
    pub weeks_employed: i64,
    /// Total SPP payable, to the penny. Zero if ineligible.
    pub total_spp: Decimal,
    /// The weekly rate actually applied (the lower of cap and 90%).
    pub weekly_rate: Decimal,
    /// Ninety percent of average weekly earnings.
    pub ninety_percent_of_earnings: Decimal,
    /// The statutory weekly cap.
    pub statutory_weekly_cap: Decimal,
    /// Human-readable summary of the calculation.
    pub explanation: String,
    /// Ordered line items for display. Empty if ineligible.
    pub breakdown: Vec<BreakdownItem>,
}

/// Calculates Statutory Paternity Pay.
///
/// Eligibility conditions are checked in priority order: tenure (at least
/// 26 weeks employed by the qualifying week), then earnings (at least the
/// statutory minimum), then leave length (one or two whole weeks). The
/// `eligibility_reason` names the first failing condition.
///
/// # Examples
///
/// ```
/// use statpay_engine::calculation::{SppInputs, calculate_spp};
/// use statpay_engine::config::ConfigLoader;
/// use statpay_engine::models::WeeklyEarnings;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::builtin().unwrap();
/// let rates = &loader.statutory("2025/26").unwrap().spp;
///
/// let inputs = SppInputs {
///     earnings: WeeklyEarnings::Weekly(Decimal::from_str("300").unwrap()),
///     employment_start_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///     expected_week_of_childbirth: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     planned_leave_start_date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
///     weeks_of_leave: 2,
/// };
///
/// let result = calculate_spp(&inputs, rates);
/// assert!(result.is_eligible);
/// assert_eq!(result.total_spp, Decimal::from_str("374.36").unwrap());
/// ```
pub fn calculate_spp(inputs: &SppInputs, rates: &SppRates) -> SppResult {
    let weekly_earnings = inputs.earnings.weekly_pay();

    // The qualifying week falls 15 weeks before the expected week of
    // childbirth.
    let qualifying_week = inputs.expected_week_of_childbirth - Duration::days(15 * 7);
    let weeks_employed = (qualifying_week - inputs.employment_start_date)
        .num_days()
        .div_euclid(7);

    let ninety_percent = weekly_earnings * Decimal::new(9, 1);
    let weekly_rate = rates.weekly_cap.min(ninety_percent);

    let failure = if weeks_employed < rates.min_weeks_employed {
        Some(format!(
            "only {} weeks of continuous employment by the qualifying week; at least {} are required",
            weeks_employed, rates.min_weeks_employed,
        ))
    } else if weekly_earnings < rates.min_weekly_earnings {
        Some(format!(
            "average weekly earnings of {} are below the {} minimum",
            format_gbp(weekly_earnings),
            format_gbp(rates.min_weekly_earnings),
        ))
    } else if !(1..=2).contains(&inputs.weeks_of_leave) {
        Some("paternity leave must be one or two whole weeks".to_string())
    } else {
        None
    };

    if let Some(reason) = failure {
        let eligibility_reason = format!("Not eligible for Statutory Paternity Pay: {reason}.");
        return SppResult {
            is_eligible: false,
            explanation: eligibility_reason.clone(),
            eligibility_reason,
            qualifying_week,
            weeks_employed,
            total_spp: Decimal::ZERO,
            weekly_rate,
            ninety_percent_of_earnings: ninety_percent,
            statutory_weekly_cap: rates.weekly_cap,
            breakdown: Vec::new(),
        };
    }

    let weeks = Decimal::from(inputs.weeks_of_leave);
    let total_spp = to_pence(weekly_rate * weeks);
    let capped = ninety_percent > rates.weekly_cap;

    let breakdown = vec![
        BreakdownItem::money(
            "Average weekly earnings",
            weekly_earnings,
            "Earnings used to set the weekly rate",
            "cash",
        ),
        BreakdownItem::money(
            "90% of earnings",
            to_pence(ninety_percent),
            "Ninety percent of average weekly earnings",
            "percent",
        ),
        BreakdownItem::money(
            "Statutory weekly cap",
            rates.weekly_cap,
            "The maximum weekly SPP payable",
            "rate",
        ),
        BreakdownItem::money(
            "Weekly rate applied",
            to_pence(weekly_rate),
            if capped {
                "The cap applies because 90% of earnings exceeds it"
            } else {
                "90% of earnings, below the cap"
            },
            "rate",
        ),
        BreakdownItem::count(
            "Weeks of leave",
            weeks,
            "Whole weeks of paternity leave taken",
            "calendar",
        ),
        BreakdownItem::money(
            "Total SPP",
            total_spp,
            "Weekly rate multiplied by weeks of leave",
            "total",
        ),
    ];

    let eligibility_reason = "Eligible for Statutory Paternity Pay.".to_string();
    let explanation = format!(
        "Eligible for Statutory Paternity Pay: {} week(s) at {} per week gives {} in total.",
        inputs.weeks_of_leave,
        format_gbp(weekly_rate),
        format_gbp(total_spp),
    );

    SppResult {
        is_eligible: true,
        eligibility_reason,
        qualifying_week,
        weeks_employed,
        total_spp,
        weekly_rate: to_pence(weekly_rate),
        ninety_percent_of_earnings: to_pence(ninety_percent),
        statutory_weekly_cap: rates.weekly_cap,
        explanation,
        breakdown,
    }
}
