//! The shared breakdown line-item model.
//!
//! Every calculator returns an ordered list of labeled line items that the
//! presentation layer renders verbatim into tables and copy-to-clipboard
//! text. The structure (label, raw value, formatted value, description,
//! icon key) is identical across calculators, so it lives here once.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::{format_gbp, format_percent};

/// A single labeled line item in a calculation breakdown.
///
/// The `value` field carries the raw figure at full precision; the
/// `formatted_value` field carries the display string produced by the
/// engine's formatting entry points. Item order within a breakdown is
/// part of the output contract.
///
/// # Example
///
/// ```
/// use statpay_engine::models::BreakdownItem;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let item = BreakdownItem::money(
///     "Total SSP",
///     Decimal::from_str("116.75").unwrap(),
///     "Statutory Sick Pay for the period",
///     "total",
/// );
/// assert_eq!(item.formatted_value, "£117");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
    /// Short label for the line, e.g. "Daily SSP rate".
    pub label: String,
    /// The raw value at full precision.
    pub value: Decimal,
    /// The display string for the value.
    pub formatted_value: String,
    /// A one-sentence description of where the value comes from.
    pub description: String,
    /// An icon hint for the presentation layer, e.g. "calendar".
    pub icon: String,
}

impl BreakdownItem {
    /// Creates a monetary line item formatted in whole pounds.
    pub fn money(
        label: impl Into<String>,
        value: Decimal,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            formatted_value: format_gbp(value),
            value,
            description: description.into(),
            icon: icon.into(),
        }
    }

    /// Creates a percentage line item formatted with one decimal place.
    pub fn percent(
        label: impl Into<String>,
        value: Decimal,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            formatted_value: format_percent(value),
            value,
            description: description.into(),
            icon: icon.into(),
        }
    }

    /// Creates a plain-number line item (days, weeks, hours).
    pub fn count(
        label: impl Into<String>,
        value: Decimal,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            formatted_value: value.normalize().to_string(),
            value,
            description: description.into(),
            icon: icon.into(),
        }
    }
}
