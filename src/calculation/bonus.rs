//! Pro rata bonus calculation functionality.
//!
//! A full bonus amount is reduced by two independent factors: a part-time
//! factor (actual weekly hours over full-time weekly hours) and a
//! partial-year factor (days employed within the bonus period over the
//! length of the period). The bonus period defaults to the UK tax year.

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::{format_gbp, format_percent};
use crate::models::BreakdownItem;

use super::rounding::to_pence;

/// Inputs for a pro rata bonus calculation.
///
/// The part-time factor is not clamped; callers must ensure
/// `actual_weekly_hours` does not exceed `full_time_weekly_hours` for a
/// sensible result. The partial-year factor only activates when at least
/// one employment date is supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusInputs {
    /// The bonus a full-time employee working the whole period receives.
    pub full_bonus_amount: Decimal,
    /// Full-time hours per week.
    pub full_time_weekly_hours: Decimal,
    /// Hours per week actually worked.
    pub actual_weekly_hours: Decimal,
    /// Employment start, if it began during the bonus period.
    #[serde(default)]
    pub employment_start_date: Option<NaiveDate>,
    /// Employment end, if it ended during the bonus period.
    #[serde(default)]
    pub employment_end_date: Option<NaiveDate>,
    /// Bonus period start; defaults to 6 April of the current year.
    #[serde(default)]
    pub bonus_period_start_date: Option<NaiveDate>,
    /// Bonus period end; defaults to 5 April of the next year.
    #[serde(default)]
    pub bonus_period_end_date: Option<NaiveDate>,
}

/// The result of a pro rata bonus calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusResult {
    /// The bonus after both factors, to the penny.
    pub final_bonus: Decimal,
    /// Share of full-time hours worked, 0 to 1 by convention.
    pub part_time_factor: Decimal,
    /// Share of the bonus period spent employed, 0 to 1.
    pub partial_year_factor: Decimal,
    /// The bonus after the part-time factor alone.
    pub part_time_bonus: Decimal,
    /// The bonus after the partial-year factor alone.
    pub partial_year_bonus: Decimal,
    /// Human-readable summary of the calculation.
    pub explanation: String,
    /// Ordered line items for display.
    pub breakdown: Vec<BreakdownItem>,
}

/// Returns the UK tax year running from 6 April of `year` to 5 April of
/// the following year.
pub fn uk_tax_year_bounds(year: i32) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(year, 4, 6).expect("6 April exists in every year");
    let end = NaiveDate::from_ymd_opt(year + 1, 4, 5).expect("5 April exists in every year");
    (start, end)
}

/// Calculates a pro rata bonus.
///
/// When no explicit bonus period is given, the period defaults to the UK
/// tax year of the current calendar year. Tests that need determinism
/// should supply explicit period dates.
///
/// The employment window is clipped to the bonus period with inclusive
/// day counts; employment that does not overlap the period at all yields
/// a partial-year factor of zero.
///
/// # Examples
///
/// ```
/// use statpay_engine::calculation::{BonusInputs, calculate_bonus};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = BonusInputs {
///     full_bonus_amount: Decimal::from_str("4000").unwrap(),
///     full_time_weekly_hours: Decimal::from_str("40").unwrap(),
///     actual_weekly_hours: Decimal::from_str("20").unwrap(),
///     employment_start_date: None,
///     employment_end_date: None,
///     bonus_period_start_date: None,
///     bonus_period_end_date: None,
/// };
///
/// let result = calculate_bonus(&inputs);
/// assert_eq!(result.final_bonus, Decimal::from_str("2000.00").unwrap());
/// ```
pub fn calculate_bonus(inputs: &BonusInputs) -> BonusResult {
    let part_time_factor = inputs.actual_weekly_hours / inputs.full_time_weekly_hours;
    let part_time_bonus = to_pence(inputs.full_bonus_amount * part_time_factor);

    let (default_start, default_end) = uk_tax_year_bounds(Utc::now().date_naive().year());
    let bonus_start = inputs.bonus_period_start_date.unwrap_or(default_start);
    let bonus_end = inputs.bonus_period_end_date.unwrap_or(default_end);
    let total_days_in_period = (bonus_end - bonus_start).num_days() + 1;

    let has_employment_dates =
        inputs.employment_start_date.is_some() || inputs.employment_end_date.is_some();

    let (partial_year_factor, employed_days) = if has_employment_dates {
        let employment_start = inputs.employment_start_date.unwrap_or(bonus_start);
        let employment_end = inputs.employment_end_date.unwrap_or(bonus_end);
        let clipped_start = employment_start.max(bonus_start);
        let clipped_end = employment_end.min(bonus_end);
        if clipped_end < clipped_start {
            (Decimal::ZERO, 0)
        } else {
            let employed_days = (clipped_end - clipped_start).num_days() + 1;
            (
                Decimal::from(employed_days) / Decimal::from(total_days_in_period),
                employed_days,
            )
        }
    } else {
        (Decimal::ONE, total_days_in_period)
    };

    let partial_year_bonus = to_pence(inputs.full_bonus_amount * partial_year_factor);
    let final_bonus = to_pence(inputs.full_bonus_amount * part_time_factor * partial_year_factor);

    let mut breakdown = vec![
        BreakdownItem::money(
            "Full bonus",
            inputs.full_bonus_amount,
            "The bonus before any pro rata adjustment",
            "cash",
        ),
        BreakdownItem::money(
            "After part-time adjustment",
            part_time_bonus,
            format!(
                "{} of {} full-time weekly hours ({})",
                inputs.actual_weekly_hours.normalize(),
                inputs.full_time_weekly_hours.normalize(),
                format_percent(part_time_factor * Decimal::ONE_HUNDRED),
            ),
            "hours",
        ),
    ];

    if partial_year_factor < Decimal::ONE {
        breakdown.push(BreakdownItem::money(
            "After partial-year adjustment",
            partial_year_bonus,
            format!(
                "Employed for {employed_days} of the {total_days_in_period} days in the bonus period",
            ),
            "calendar",
        ));
        breakdown.push(BreakdownItem::money(
            "Final pro rata bonus",
            final_bonus,
            "Full bonus reduced by both factors",
            "total",
        ));
    }

    let full_part_time = part_time_factor == Decimal::ONE;
    let full_year = partial_year_factor >= Decimal::ONE;

    let explanation = if full_part_time && full_year {
        format!(
            "You receive the full bonus of {}.",
            format_gbp(inputs.full_bonus_amount)
        )
    } else {
        let mut reductions = Vec::new();
        if !full_part_time {
            reductions.push(format!(
                "part-time hours reduce it to {} of the full amount",
                format_percent(part_time_factor * Decimal::ONE_HUNDRED),
            ));
        }
        if !full_year {
            reductions.push(format!(
                "partial-year employment reduces it to {} of the bonus period",
                format_percent(partial_year_factor * Decimal::ONE_HUNDRED),
            ));
        }
        format!(
            "Your pro rata bonus is {}: {}.",
            format_gbp(final_bonus),
            reductions.join(", and ")
        )
    };

    BonusResult {
        final_bonus,
        part_time_factor,
        partial_year_factor,
        part_time_bonus,
        partial_year_bonus,
        explanation,
        breakdown,
    }
}
