//! Integration tests for the statutory pay engine.
//!
//! These tests exercise the calculators the way the presentation layer
//! does: load the rate registry once, build typed inputs, and check the
//! result records together with their breakdowns and explanations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use statpay_engine::calculation::{
    BonusInputs, ProRataInputs, Region, SppInputs, SspInputs, TtoInputs, calculate_bonus,
    calculate_pro_rata, calculate_spp, calculate_ssp, calculate_tto, calculate_uk_tax,
};
use statpay_engine::config::ConfigLoader;
use statpay_engine::format::{format_gbp, format_percent};
use statpay_engine::models::{PayFrequency, WeeklyEarnings};

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn loader() -> ConfigLoader {
    ConfigLoader::builtin().expect("builtin rate tables must load")
}

// =============================================================================
// Scenario: part-time school administrator
//
// A 25-hour term-time-only contract against a £28,000 FTE salary. The
// TTO salary feeds the tax calculator, and the pro rata calculator must
// agree with the TTO hours fraction.
// =============================================================================

#[test]
fn test_part_time_school_administrator() {
    let loader = loader();

    let tto = calculate_tto(&TtoInputs {
        fte_annual_salary: decimal("28000"),
        full_time_weekly_hours: decimal("37.5"),
        contracted_weekly_hours: decimal("25"),
        term_weeks_worked: decimal("39"),
        paid_holiday_weeks: decimal("5.6"),
        bank_holiday_weeks: decimal("0"),
        daily_divisor: decimal("5"),
        spread_over_12_months: true,
    });

    assert_eq!(tto.paid_weeks, decimal("44.6"));
    assert!(tto.annual_tto_salary < decimal("28000"));

    let pro_rata = calculate_pro_rata(&ProRataInputs {
        full_time_salary: decimal("28000"),
        full_time_hours: decimal("37.5"),
        actual_hours: decimal("25"),
        frequency: PayFrequency::Yearly,
        start_date: None,
        end_date: None,
    });

    // Same hours fraction in both calculators.
    assert_eq!(
        tto.hours_factor,
        (pro_rata.percentage / decimal("100")).round_dp(3)
    );

    // The TTO salary is below the personal allowance plus basic band
    // start, so tax is modest but non-zero.
    let outcome = calculate_uk_tax(
        tto.annual_tto_salary,
        Region::RestOfUk,
        "2025/26",
        loader.config(),
    )
    .unwrap();
    assert!(outcome.income_tax() > Decimal::ZERO);
    assert!(outcome.take_home_pay() < tto.annual_tto_salary);
}

// =============================================================================
// Scenario: new parent on the statutory journey
//
// Checks SPP against SSP for the same person: eligible for SPP on
// tenure and earnings, and separately eligible for SSP for a week of
// sickness.
// =============================================================================

#[test]
fn test_new_parent_statutory_payments() {
    let loader = loader();
    let statutory = loader.statutory("2025/26").unwrap();

    let earnings = WeeklyEarnings::Weekly(decimal("480"));

    let spp = calculate_spp(
        &SppInputs {
            earnings,
            employment_start_date: date(2023, 9, 4),
            expected_week_of_childbirth: date(2026, 1, 5),
            planned_leave_start_date: date(2026, 1, 12),
            weeks_of_leave: 2,
        },
        &statutory.spp,
    );

    assert!(spp.is_eligible);
    // 90% of 480 = 432, capped at 187.18
    assert_eq!(spp.weekly_rate, decimal("187.18"));
    assert_eq!(spp.total_spp, decimal("374.36"));
    assert_eq!(spp.qualifying_week, date(2026, 1, 5) - chrono::Duration::days(105));

    let ssp = calculate_ssp(
        &SspInputs {
            working_days_per_week: 5,
            sick_days: 7,
            earnings,
        },
        &statutory.ssp,
    );

    assert!(ssp.is_eligible);
    assert_eq!(ssp.total_ssp, decimal("116.75"));
}

// =============================================================================
// Scenario: mid-year joiner's bonus, pinned to an explicit period
// =============================================================================

#[test]
fn test_mid_year_joiner_bonus_is_deterministic() {
    let inputs = BonusInputs {
        full_bonus_amount: decimal("6000"),
        full_time_weekly_hours: decimal("37.5"),
        actual_weekly_hours: decimal("30"),
        employment_start_date: Some(date(2025, 7, 1)),
        employment_end_date: None,
        bonus_period_start_date: Some(date(2025, 4, 6)),
        bonus_period_end_date: Some(date(2026, 4, 5)),
    };

    let first = calculate_bonus(&inputs);
    let second = calculate_bonus(&inputs);
    assert_eq!(first, second);

    assert_eq!(first.part_time_factor, decimal("0.8"));
    assert!(first.partial_year_factor < Decimal::ONE);
    assert!(first.final_bonus < first.part_time_bonus);

    // Factors compose multiplicatively.
    let expected = (decimal("6000") * first.part_time_factor * first.partial_year_factor)
        .round_dp(2);
    assert_eq!(first.final_bonus, expected);
}

// =============================================================================
// Cross-region tax comparison
// =============================================================================

#[test]
fn test_scotland_pays_more_at_60k() {
    let loader = loader();

    let uk = calculate_uk_tax(decimal("60000"), Region::RestOfUk, "2025/26", loader.config())
        .unwrap();
    let scotland = calculate_uk_tax(decimal("60000"), Region::Scotland, "2025/26", loader.config())
        .unwrap();

    assert!(scotland.income_tax() > uk.income_tax());
    assert_eq!(scotland.national_insurance(), uk.national_insurance());
    assert!(scotland.take_home_pay() < uk.take_home_pay());
}

#[test]
fn test_unknown_tax_year_fails_before_producing_output() {
    let loader = loader();

    let result = calculate_uk_tax(decimal("60000"), Region::RestOfUk, "2010/11", loader.config());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("2010/11"));
}

// =============================================================================
// Breakdown and explanation contract
// =============================================================================

#[test]
fn test_breakdowns_carry_formatted_values() {
    let registry = loader();
    let rates = registry.statutory("2025/26").unwrap();

    let ssp = calculate_ssp(
        &SspInputs {
            working_days_per_week: 5,
            sick_days: 7,
            earnings: WeeklyEarnings::Weekly(decimal("500")),
        },
        &rates.ssp,
    );

    for item in &ssp.breakdown {
        assert!(!item.label.is_empty());
        assert!(!item.formatted_value.is_empty());
        assert!(!item.description.is_empty());
        assert!(!item.icon.is_empty());
    }

    // Money items use the shared whole-pound formatter verbatim.
    let total = ssp.breakdown.last().unwrap();
    assert_eq!(total.formatted_value, format_gbp(total.value));
}

#[test]
fn test_idempotence_across_all_calculators() {
    let registry = loader();
    let statutory = registry.statutory("2025/26").unwrap();

    let pro_rata_inputs = ProRataInputs {
        full_time_salary: decimal("41000"),
        full_time_hours: decimal("40"),
        actual_hours: decimal("32"),
        frequency: PayFrequency::Yearly,
        start_date: None,
        end_date: None,
    };
    assert_eq!(
        calculate_pro_rata(&pro_rata_inputs),
        calculate_pro_rata(&pro_rata_inputs)
    );

    let ssp_inputs = SspInputs {
        working_days_per_week: 4,
        sick_days: 11,
        earnings: WeeklyEarnings::Weekly(decimal("350")),
    };
    assert_eq!(
        calculate_ssp(&ssp_inputs, &statutory.ssp),
        calculate_ssp(&ssp_inputs, &statutory.ssp)
    );

    let spp_inputs = SppInputs {
        earnings: WeeklyEarnings::Weekly(decimal("350")),
        employment_start_date: date(2024, 2, 5),
        expected_week_of_childbirth: date(2026, 6, 1),
        planned_leave_start_date: date(2026, 6, 8),
        weeks_of_leave: 1,
    };
    assert_eq!(
        calculate_spp(&spp_inputs, &statutory.spp),
        calculate_spp(&spp_inputs, &statutory.spp)
    );
}

#[test]
fn test_formatters_are_stable_entry_points() {
    assert_eq!(format_gbp(decimal("17160.4")), "£17,160");
    assert_eq!(format_percent(decimal("57.18")), "57.2%");
}

// =============================================================================
// Serialization of result records (consumed verbatim by the UI layer)
// =============================================================================

#[test]
fn test_results_serialize_with_stable_field_names() {
    let registry = loader();
    let statutory = registry.statutory("2025/26").unwrap();

    let ssp = calculate_ssp(
        &SspInputs {
            working_days_per_week: 5,
            sick_days: 7,
            earnings: WeeklyEarnings::Weekly(decimal("500")),
        },
        &statutory.ssp,
    );
    let json = serde_json::to_string(&ssp).unwrap();
    assert!(json.contains("\"is_eligible\":true"));
    assert!(json.contains("\"total_ssp\":\"116.75\""));
    assert!(json.contains("\"breakdown\":["));

    let outcome = calculate_uk_tax(
        decimal("60000"),
        Region::Scotland,
        "2025/26",
        registry.config(),
    )
    .unwrap();
    let json = serde_json::to_string(&outcome).unwrap();
    assert!(json.contains("\"scotland\""));
    assert!(json.contains("\"scottish_income_tax\""));
    assert!(json.contains("\"tax_year\":\"2025/26\""));
}
