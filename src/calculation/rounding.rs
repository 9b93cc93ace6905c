//! Shared rounding helpers for monetary results.
//!
//! Calculators round half away from zero, matching how the published
//! figures are presented. Internal arithmetic stays at full precision;
//! these helpers are applied only when a result field is produced.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to the nearest whole pound.
pub(crate) fn to_pounds(value: Decimal) -> Decimal {
    to_dp(value, 0)
}

/// Rounds to the nearest penny (two decimal places).
pub(crate) fn to_pence(value: Decimal) -> Decimal {
    to_dp(value, 2)
}

/// Rounds to `dp` decimal places, half away from zero.
pub(crate) fn to_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
