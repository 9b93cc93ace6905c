//! Pay frequency and earnings input types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Returns the assumed full-time working week in hours (37.5).
///
/// Used when deriving average weekly pay from an annual salary and the
/// hours actually worked per week.
pub fn assumed_full_time_week() -> Decimal {
    Decimal::new(375, 1)
}

/// How often a quoted salary figure is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// An annual figure.
    Yearly,
    /// A monthly figure (12 periods per year).
    Monthly,
    /// A weekly figure (52 periods per year).
    Weekly,
    /// A daily figure (260 working days per year).
    Daily,
}

impl PayFrequency {
    /// Returns the number of pay periods in a year for this frequency.
    pub fn periods_per_year(self) -> Decimal {
        match self {
            PayFrequency::Yearly => Decimal::ONE,
            PayFrequency::Monthly => Decimal::from(12u32),
            PayFrequency::Weekly => Decimal::from(52u32),
            PayFrequency::Daily => Decimal::from(260u32),
        }
    }
}

/// Average weekly earnings, either given directly or derived from an
/// annual salary and the hours worked per week.
///
/// The derived form assumes a 37.5-hour full-time week:
/// `weekly pay = (annual salary / 52 / 37.5) × weekly hours`.
///
/// # Example
///
/// ```
/// use statpay_engine::models::WeeklyEarnings;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let direct = WeeklyEarnings::Weekly(Decimal::from_str("500").unwrap());
/// assert_eq!(direct.weekly_pay(), Decimal::from_str("500").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeeklyEarnings {
    /// Average weekly pay given directly.
    Weekly(Decimal),
    /// Annual salary plus average hours worked per week.
    Annual {
        /// The annual salary.
        salary: Decimal,
        /// Average hours worked per week.
        weekly_hours: Decimal,
    },
}

impl WeeklyEarnings {
    /// Returns the average weekly pay, deriving it from the annual salary
    /// where necessary.
    pub fn weekly_pay(&self) -> Decimal {
        match *self {
            WeeklyEarnings::Weekly(amount) => amount,
            WeeklyEarnings::Annual {
                salary,
                weekly_hours,
            } => salary / Decimal::from(52u32) / assumed_full_time_week() * weekly_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_periods_per_year() {
        assert_eq!(PayFrequency::Yearly.periods_per_year(), dec("1"));
        assert_eq!(PayFrequency::Monthly.periods_per_year(), dec("12"));
        assert_eq!(PayFrequency::Weekly.periods_per_year(), dec("52"));
        assert_eq!(PayFrequency::Daily.periods_per_year(), dec("260"));
    }

    #[test]
    fn test_frequency_serialization() {
        assert_eq!(
            serde_json::to_string(&PayFrequency::Yearly).unwrap(),
            "\"yearly\""
        );
        assert_eq!(
            serde_json::to_string(&PayFrequency::Daily).unwrap(),
            "\"daily\""
        );
    }

    #[test]
    fn test_direct_weekly_pay() {
        let earnings = WeeklyEarnings::Weekly(dec("500"));
        assert_eq!(earnings.weekly_pay(), dec("500"));
    }

    #[test]
    fn test_derived_weekly_pay_full_time_hours() {
        // Full-time hours cancel the 37.5 divisor: 30000 / 52 = 576.92...
        let earnings = WeeklyEarnings::Annual {
            salary: dec("30000"),
            weekly_hours: dec("37.5"),
        };
        let weekly = earnings.weekly_pay();
        assert_eq!(
            weekly.round_dp(2),
            dec("576.92")
        );
    }

    #[test]
    fn test_derived_weekly_pay_part_time_hours() {
        // (30000 / 52 / 37.5) * 20 = 307.69...
        let earnings = WeeklyEarnings::Annual {
            salary: dec("30000"),
            weekly_hours: dec("20"),
        };
        assert_eq!(earnings.weekly_pay().round_dp(2), dec("307.69"));
    }

    #[test]
    fn test_earnings_deserialization() {
        let direct: WeeklyEarnings = serde_json::from_str(r#"{"weekly":"500"}"#).unwrap();
        assert_eq!(direct, WeeklyEarnings::Weekly(dec("500")));

        let derived: WeeklyEarnings =
            serde_json::from_str(r#"{"annual":{"salary":"30000","weekly_hours":"20"}}"#).unwrap();
        assert_eq!(
            derived,
            WeeklyEarnings::Annual {
                salary: dec("30000"),
                weekly_hours: dec("20"),
            }
        );
    }
}
