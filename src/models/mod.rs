//! Shared models for the statutory pay engine.
//!
//! This module contains the types shared between calculators: the
//! [`BreakdownItem`] line-item abstraction used by every result record,
//! the [`PayFrequency`] enum, and the [`WeeklyEarnings`] input type.

mod breakdown;
mod pay;

pub use breakdown::BreakdownItem;
pub use pay::{PayFrequency, WeeklyEarnings, assumed_full_time_week};
