//! Term-time-only (TTO) salary calculation functionality.
//!
//! A term-time-only contract, common in UK schools, pays only for term
//! weeks worked plus statutory holiday weeks rather than the full
//! 52-week year. The FTE salary is reduced by an hours factor and a
//! paid-weeks factor, and the result can be spread over 12 months or
//! paid only across the months actually worked.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::{format_gbp, format_percent};
use crate::models::BreakdownItem;

use super::rounding::{to_dp, to_pence, to_pounds};

/// Inputs for a term-time-only salary calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtoInputs {
    /// The full-time-equivalent annual salary.
    pub fte_annual_salary: Decimal,
    /// Full-time hours per week.
    pub full_time_weekly_hours: Decimal,
    /// Contracted hours per week.
    pub contracted_weekly_hours: Decimal,
    /// Term weeks actually worked.
    pub term_weeks_worked: Decimal,
    /// Paid holiday weeks (statutory entitlement).
    pub paid_holiday_weeks: Decimal,
    /// Paid bank holiday weeks.
    pub bank_holiday_weeks: Decimal,
    /// Divisor for deriving daily pay from weekly pay, typically 5.
    pub daily_divisor: Decimal,
    /// Spread pay evenly over 12 months, or pay only across worked months.
    pub spread_over_12_months: bool,
}

/// The result of a term-time-only salary calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtoResult {
    /// Annual TTO salary, whole pounds.
    pub annual_tto_salary: Decimal,
    /// Pay per paid week, to the penny.
    pub weekly_pay: Decimal,
    /// Pay per month under the selected spreading policy, to the penny.
    pub monthly_pay: Decimal,
    /// Pay per working day, to the penny.
    pub daily_pay: Decimal,
    /// TTO salary as a percentage of the FTE salary, one decimal place.
    pub fte_comparison_percent: Decimal,
    /// Contracted hours over full-time hours, three decimal places.
    pub hours_factor: Decimal,
    /// Total paid weeks in the year, one decimal place.
    pub paid_weeks: Decimal,
    /// Paid weeks over 52, three decimal places.
    pub tto_pay_factor: Decimal,
    /// Ordered line items for display.
    pub breakdown: Vec<BreakdownItem>,
    /// Human-readable summary of the calculation.
    pub explanation: String,
    /// Label describing the monthly figure, e.g. "spread over 12 months".
    pub monthly_label: String,
}

/// Calculates a term-time-only salary from an FTE salary.
///
/// Factors are applied at full precision; the rounding documented on each
/// result field happens only when the field is produced.
///
/// # Examples
///
/// ```
/// use statpay_engine::calculation::{TtoInputs, calculate_tto};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = TtoInputs {
///     fte_annual_salary: Decimal::from_str("30000").unwrap(),
///     full_time_weekly_hours: Decimal::from_str("37.5").unwrap(),
///     contracted_weekly_hours: Decimal::from_str("25").unwrap(),
///     term_weeks_worked: Decimal::from_str("39").unwrap(),
///     paid_holiday_weeks: Decimal::from_str("5.6").unwrap(),
///     bank_holiday_weeks: Decimal::ZERO,
///     daily_divisor: Decimal::from_str("5").unwrap(),
///     spread_over_12_months: true,
/// };
///
/// let result = calculate_tto(&inputs);
/// assert_eq!(result.paid_weeks, Decimal::from_str("44.6").unwrap());
/// ```
pub fn calculate_tto(inputs: &TtoInputs) -> TtoResult {
    let hours_factor = inputs.contracted_weekly_hours / inputs.full_time_weekly_hours;
    let paid_weeks = inputs.term_weeks_worked + inputs.paid_holiday_weeks + inputs.bank_holiday_weeks;
    let tto_pay_factor = paid_weeks / Decimal::from(52u32);

    let annual = inputs.fte_annual_salary * hours_factor * tto_pay_factor;
    let weekly = annual / paid_weeks;
    let daily = weekly / inputs.daily_divisor;
    let fte_comparison = hours_factor * tto_pay_factor * Decimal::ONE_HUNDRED;

    // 4.333 weeks per month is the convention the published figures use.
    let weeks_per_month = Decimal::new(4333, 3);
    let (monthly, monthly_label) = if inputs.spread_over_12_months {
        (annual / Decimal::from(12u32), "spread over 12 months".to_string())
    } else {
        let months_paid = paid_weeks / weeks_per_month;
        (
            annual / months_paid,
            format!("paid over {} months", to_dp(months_paid, 0).normalize()),
        )
    };

    let annual_tto_salary = to_pounds(annual);
    let weekly_pay = to_pence(weekly);
    let monthly_pay = to_pence(monthly);
    let daily_pay = to_pence(daily);

    let breakdown = vec![
        BreakdownItem::percent(
            "Hours factor",
            to_dp(hours_factor * Decimal::ONE_HUNDRED, 1),
            format!(
                "{} contracted hours of a {}-hour full-time week",
                inputs.contracted_weekly_hours.normalize(),
                inputs.full_time_weekly_hours.normalize(),
            ),
            "hours",
        ),
        BreakdownItem::count(
            "Paid weeks",
            to_dp(paid_weeks, 1),
            "Term weeks plus paid holiday and bank holiday weeks",
            "calendar",
        ),
        BreakdownItem::percent(
            "Pay factor",
            to_dp(tto_pay_factor * Decimal::ONE_HUNDRED, 1),
            "Paid weeks as a share of the 52-week year",
            "scale",
        ),
        BreakdownItem::money(
            "Annual TTO salary",
            annual_tto_salary,
            "FTE salary reduced by the hours and pay factors",
            "cash",
        ),
        BreakdownItem::money(
            "Weekly pay",
            weekly_pay,
            "Annual TTO salary divided by paid weeks",
            "cash",
        ),
        BreakdownItem::money("Monthly pay", monthly_pay, monthly_label.clone(), "cash"),
        BreakdownItem::money(
            "Daily pay",
            daily_pay,
            format!("Weekly pay divided by {}", inputs.daily_divisor.normalize()),
            "cash",
        ),
    ];

    let explanation = format!(
        "A term-time-only contract of {} hours over {} paid weeks gives {} per year, which is {} of the full-time equivalent salary.",
        inputs.contracted_weekly_hours.normalize(),
        to_dp(paid_weeks, 1).normalize(),
        format_gbp(annual_tto_salary),
        format_percent(fte_comparison),
    );

    TtoResult {
        annual_tto_salary,
        weekly_pay,
        monthly_pay,
        daily_pay,
        fte_comparison_percent: to_dp(fte_comparison, 1),
        hours_factor: to_dp(hours_factor, 3),
        paid_weeks: to_dp(paid_weeks, 1),
        tto_pay_factor: to_dp(tto_pay_factor, 3),
        breakdown,
        explanation,
        monthly_label,
    }
}
