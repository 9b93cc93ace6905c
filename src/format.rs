//! Money and percentage formatting.
//!
//! These are the only two formatting entry points the engine exposes.
//! Money is displayed in whole pounds (GBP) even where the underlying
//! result field keeps two-decimal precision; percentages are displayed
//! with one decimal place. Downstream rendering treats these strings as
//! a stable format, so the rounding and grouping here must not drift.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a monetary amount as whole pounds, e.g. `£17,160`.
///
/// The amount is rounded to the nearest pound (midpoint away from zero)
/// and the integer part is grouped in thousands. Negative amounts are
/// rendered as `-£…`.
///
/// # Examples
///
/// ```
/// use statpay_engine::format::format_gbp;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_gbp(Decimal::from_str("1234.56").unwrap()), "£1,235");
/// assert_eq!(format_gbp(Decimal::from_str("-42.4").unwrap()), "-£42");
/// ```
pub fn format_gbp(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().normalize().to_string();
    let grouped = group_thousands(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-£{grouped}")
    } else {
        format!("£{grouped}")
    }
}

/// Formats a percentage value with one decimal place, e.g. `66.7%`.
///
/// # Examples
///
/// ```
/// use statpay_engine::format::format_percent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_percent(Decimal::from_str("66.666").unwrap()), "66.7%");
/// assert_eq!(format_percent(Decimal::from_str("50").unwrap()), "50.0%");
/// ```
pub fn format_percent(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    format!("{rounded}%")
}

/// Inserts comma separators into a plain digit string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let chars: Vec<char> = digits.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_pounds_no_grouping() {
        assert_eq!(format_gbp(dec("0")), "£0");
        assert_eq!(format_gbp(dec("999")), "£999");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_gbp(dec("1000")), "£1,000");
        assert_eq!(format_gbp(dec("17160")), "£17,160");
        assert_eq!(format_gbp(dec("1234567")), "£1,234,567");
    }

    #[test]
    fn test_rounds_to_nearest_pound() {
        assert_eq!(format_gbp(dec("116.75")), "£117");
        assert_eq!(format_gbp(dec("116.49")), "£116");
        assert_eq!(format_gbp(dec("116.50")), "£117");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_gbp(dec("-1234.56")), "-£1,235");
        assert_eq!(format_gbp(dec("-0.2")), "£0");
    }

    #[test]
    fn test_percent_one_decimal_place() {
        assert_eq!(format_percent(dec("66.666666")), "66.7%");
        assert_eq!(format_percent(dec("50")), "50.0%");
        assert_eq!(format_percent(dec("0")), "0.0%");
        assert_eq!(format_percent(dec("85.75")), "85.8%");
    }

    #[test]
    fn test_percent_over_one_hundred() {
        // The formatter does not clamp; callers own the 0-100 contract.
        assert_eq!(format_percent(dec("120.04")), "120.0%");
    }
}
