//! Period-compounded capital gain over one calendar year
//!
//! The standard compound-interest formula is applied uniformly whatever
//! the frequency: `start * (1 + rate/n)^n` with n = 1, 12, or 365. A
//! fixed 365-day year is assumed; actual days-in-year and leap-year
//! variation are intentionally ignored. No rounding happens here —
//! rounding is deferred to the caller.

use crate::model::CompoundingFrequency;

/// Result of compounding a value over exactly one year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundGrowth {
    /// Value after one year of compounding, unrounded.
    pub evaluation_amount: f64,
    /// `evaluation_amount - start_value`, unrounded.
    pub capital_gain: f64,
}

/// Compound `start_value` at `annual_rate` over one year.
///
/// Pure and infallible; a malformed frequency has already degraded to
/// yearly at the model boundary.
#[must_use]
pub fn compound_annual_growth(
    start_value: f64,
    annual_rate: f64,
    frequency: CompoundingFrequency,
) -> CompoundGrowth {
    let periods = frequency.periods_per_year();
    let period_rate = annual_rate / f64::from(periods);
    let evaluation_amount = start_value * (1.0 + period_rate).powi(periods as i32);

    CompoundGrowth {
        evaluation_amount,
        capital_gain: evaluation_amount - start_value,
    }
}
