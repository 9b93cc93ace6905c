//! UK Statutory Pay Calculation Engine
//!
//! This crate implements the calculation core behind a set of UK pay
//! calculators: pro rata salary, Statutory Sick Pay (SSP), Statutory
//! Paternity Pay (SPP), pro rata bonus, term-time-only salary, and
//! UK/Scottish income tax with National Insurance. Every calculator is a
//! pure function from a typed input record to a typed result record with
//! a human-readable breakdown.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
