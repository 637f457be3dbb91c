//! Tests for yearly projection and the lifetime driver
//!
//! These tests verify that:
//! - The documented baseline scenario produces exact whole-unit values
//! - The chain invariant holds across every consecutive pair of years
//! - The horizon covers start through maturity, or start + 50 years
//!   capped at the last representable calendar year
//! - Dividends use the pre-growth start value as their yield basis
//! - Reinvestment is additive and excluded when disabled
//! - Malformed inputs fail fast without a partial sequence

use jiff::civil::date;

use crate::error::ValidationError;
use crate::model::{
    CompoundingFrequency, DEFAULT_HORIZON_YEARS, IncomeGainModel, PaymentFrequency, ReturnModel,
};
use crate::projection::{project_lifetime, project_year};

fn with_income(
    annual_rate: f64,
    dividend_yield: f64,
    frequency: PaymentFrequency,
    reinvest: bool,
) -> ReturnModel {
    let mut model = ReturnModel::capital_only(annual_rate, CompoundingFrequency::Yearly);
    model.income_gain = Some(IncomeGainModel {
        dividend_yield,
        payment_frequency: frequency,
        reinvest_dividends: reinvest,
    });
    model
}

/// Baseline scenario: 100k at 5% yearly, no income gain
#[test]
fn test_first_year_baseline_scenario() {
    let returns = ReturnModel::capital_only(0.05, CompoundingFrequency::Yearly);
    let sequence =
        project_lifetime(100_000.0, date(2024, 1, 1), None, &returns).unwrap();

    let first = &sequence[0];
    assert_eq!(first.year, 2024);
    assert_eq!(first.start_value, 100_000.0);
    assert_eq!(first.capital_gains, 5_000.0);
    assert_eq!(first.end_value, 105_000.0);
    assert_eq!(first.total_dividends, 0.0);
    assert!(first.dividends.is_empty());
}

#[test]
fn test_chain_invariant_across_horizon() {
    let returns = with_income(0.06, 0.02, PaymentFrequency::Quarterly, false);
    let sequence =
        project_lifetime(250_000.0, date(2024, 6, 1), None, &returns).unwrap();

    for pair in sequence.windows(2) {
        assert_eq!(
            pair[1].start_value, pair[0].end_value,
            "chain broken between {} and {}",
            pair[0].year, pair[1].year
        );
    }
    assert_eq!(sequence[0].start_value, 250_000.0);
}

#[test]
fn test_default_horizon_without_maturity() {
    let returns = ReturnModel::capital_only(0.04, CompoundingFrequency::Monthly);
    let sequence = project_lifetime(1_000.0, date(2024, 1, 1), None, &returns).unwrap();

    assert_eq!(sequence.len(), DEFAULT_HORIZON_YEARS as usize + 1);
    assert_eq!(sequence.first().unwrap().year, 2024);
    assert_eq!(sequence.last().unwrap().year, 2024 + DEFAULT_HORIZON_YEARS);
}

/// A start date within 50 years of the calendar maximum must cap the
/// default horizon instead of scheduling dividends in unrepresentable
/// years
#[test]
fn test_far_future_start_caps_horizon_at_max_year() {
    let returns = with_income(0.05, 0.02, PaymentFrequency::Quarterly, false);
    let sequence = project_lifetime(10_000.0, date(9990, 1, 1), None, &returns).unwrap();

    assert_eq!(sequence.first().unwrap().year, 9990);
    assert_eq!(sequence.last().unwrap().year, 9999);
    assert_eq!(sequence.len(), 10);
    assert_eq!(
        sequence.last().unwrap().dividends.last().unwrap().date,
        date(9999, 10, 1)
    );
}

#[test]
fn test_horizon_ends_at_maturity_year() {
    let returns = ReturnModel::capital_only(0.04, CompoundingFrequency::Yearly);
    let sequence = project_lifetime(
        1_000.0,
        date(2024, 3, 15),
        Some(date(2030, 9, 1)),
        &returns,
    )
    .unwrap();

    let years: Vec<i16> = sequence.iter().map(|p| p.year).collect();
    assert_eq!(years, vec![2024, 2025, 2026, 2027, 2028, 2029, 2030]);
}

/// The yield basis is the pre-growth start value, not the post-growth
/// evaluation amount
#[test]
fn test_dividend_basis_is_pre_growth_value() {
    let returns = with_income(0.10, 0.04, PaymentFrequency::Yearly, false);
    let record = project_year(2025, 100_000.0, &returns);

    // 100_000 * 0.04 = 4000, not 110_000 * 0.04 = 4400
    assert_eq!(record.total_dividends, 4_000.0);
}

#[test]
fn test_reinvestment_is_additive() {
    let reinvested = with_income(0.05, 0.02, PaymentFrequency::Quarterly, true);
    let paid_out = with_income(0.05, 0.02, PaymentFrequency::Quarterly, false);

    let with_reinvest = project_year(2024, 100_000.0, &reinvested);
    let without = project_year(2024, 100_000.0, &paid_out);

    // 100_000 * 0.02 / 4 = 500 per quarter
    assert_eq!(with_reinvest.total_dividends, 2_000.0);
    assert_eq!(without.total_dividends, 2_000.0);

    // Reinvested dividends land in the ending value; paid-out ones don't
    assert_eq!(with_reinvest.end_value, 107_000.0);
    assert_eq!(without.end_value, 105_000.0);
    assert_eq!(
        with_reinvest.end_value,
        without.end_value + with_reinvest.total_dividends
    );
}

#[test]
fn test_reinvested_dividends_compound_in_later_years() {
    let returns = with_income(0.05, 0.02, PaymentFrequency::Yearly, true);
    let sequence =
        project_lifetime(100_000.0, date(2024, 1, 1), Some(date(2026, 1, 2)), &returns).unwrap();

    // Year two starts from 107_000 (105_000 growth + 2_000 dividends)
    assert_eq!(sequence[1].start_value, 107_000.0);
    // and its dividends use that larger basis: 107_000 * 0.02 = 2140
    assert_eq!(sequence[1].total_dividends, 2_140.0);
}

#[test]
fn test_deterministic_repeat_runs() {
    let returns = with_income(0.07, 0.015, PaymentFrequency::Monthly, true);
    let a = project_lifetime(42_000.0, date(2025, 2, 1), None, &returns).unwrap();
    let b = project_lifetime(42_000.0, date(2025, 2, 1), None, &returns).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_zero_principal_projects_zeros() {
    let returns = with_income(0.05, 0.02, PaymentFrequency::Quarterly, true);
    let sequence =
        project_lifetime(0.0, date(2024, 1, 1), Some(date(2027, 1, 1)), &returns).unwrap();

    for record in &sequence {
        assert_eq!(record.start_value, 0.0);
        assert_eq!(record.end_value, 0.0);
        assert_eq!(record.capital_gains, 0.0);
        assert_eq!(record.total_dividends, 0.0);
    }
}

#[test]
fn test_non_finite_principal_rejected() {
    let returns = ReturnModel::capital_only(0.05, CompoundingFrequency::Yearly);
    let err = project_lifetime(f64::NAN, date(2024, 1, 1), None, &returns).unwrap_err();

    assert!(matches!(
        err,
        ValidationError::NonFiniteInput {
            field: "initial_amount",
            ..
        }
    ));
}

#[test]
fn test_non_finite_rate_rejected() {
    let returns = ReturnModel::capital_only(f64::INFINITY, CompoundingFrequency::Daily);
    let err = project_lifetime(1_000.0, date(2024, 1, 1), None, &returns).unwrap_err();

    assert!(matches!(
        err,
        ValidationError::NonFiniteInput {
            field: "annual_rate",
            ..
        }
    ));
}

#[test]
fn test_maturity_not_after_start_rejected() {
    let returns = ReturnModel::capital_only(0.05, CompoundingFrequency::Yearly);

    let err = project_lifetime(
        1_000.0,
        date(2024, 6, 1),
        Some(date(2024, 6, 1)),
        &returns,
    )
    .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidDateRange { .. }));

    let err = project_lifetime(
        1_000.0,
        date(2024, 6, 1),
        Some(date(2020, 1, 1)),
        &returns,
    )
    .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidDateRange { .. }));
}

/// Maturity later in the start year still yields a one-record sequence
#[test]
fn test_same_year_maturity_single_record() {
    let returns = ReturnModel::capital_only(0.05, CompoundingFrequency::Yearly);
    let sequence = project_lifetime(
        10_000.0,
        date(2024, 1, 1),
        Some(date(2024, 12, 31)),
        &returns,
    )
    .unwrap();

    assert_eq!(sequence.len(), 1);
    assert_eq!(sequence[0].year, 2024);
}

#[test]
fn test_negative_rate_declines() {
    let returns = ReturnModel::capital_only(-0.10, CompoundingFrequency::Yearly);
    let sequence = project_lifetime(
        10_000.0,
        date(2024, 1, 1),
        Some(date(2026, 1, 2)),
        &returns,
    )
    .unwrap();

    assert_eq!(sequence[0].end_value, 9_000.0);
    assert_eq!(sequence[0].capital_gains, -1_000.0);
    assert_eq!(sequence[1].end_value, 8_100.0);
}
