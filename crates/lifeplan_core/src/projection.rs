//! Deterministic lifetime projection
//!
//! `project_year` combines the compounding calculator and the dividend
//! scheduler into one year's performance record; `project_lifetime`
//! iterates it across an asset's full date range, seeding each year from
//! the prior year's stored ending value so the chain invariant holds
//! exactly. Identical inputs always produce an identical sequence — no
//! randomness, no external reads.

use jiff::civil::Date;

use crate::dividends::schedule_dividends;
use crate::error::ValidationError;
use crate::growth::compound_annual_growth;
use crate::model::{DEFAULT_HORIZON_YEARS, MAX_CALENDAR_YEAR, ReturnModel, YearlyPerformance};

/// Project a single calendar year from a starting value.
///
/// The dividend yield basis is the pre-growth `start_value`, not the
/// post-growth evaluation amount. When reinvestment is enabled the
/// year's dividends are added to the ending value without further
/// compounding within the year. Values are rounded to whole units for
/// storage; each dividend payment was already rounded by the scheduler.
#[must_use]
pub fn project_year(year: i16, start_value: f64, returns: &ReturnModel) -> YearlyPerformance {
    let growth = compound_annual_growth(
        start_value,
        returns.capital_gain.annual_rate,
        returns.capital_gain.compounding,
    );

    let (dividends, total_dividends, reinvest) = match &returns.income_gain {
        Some(income) => {
            let dividends = schedule_dividends(
                start_value,
                income.dividend_yield,
                income.payment_frequency,
                year,
            );
            let total: f64 = dividends.iter().map(|p| p.amount).sum();
            (dividends, total, income.reinvest_dividends)
        }
        None => (Vec::new(), 0.0, false),
    };

    let end_value = if reinvest {
        growth.evaluation_amount + total_dividends
    } else {
        growth.evaluation_amount
    };

    YearlyPerformance {
        year,
        start_value: start_value.round(),
        end_value: end_value.round(),
        capital_gains: growth.capital_gain.round(),
        dividends,
        total_dividends: total_dividends.round(),
        actual: None,
    }
}

/// Project an asset's full ordered yearly sequence.
///
/// Covers `start_date`'s year through `maturity_date`'s year inclusive,
/// or through start + 50 years (capped at the calendar maximum) when no
/// maturity is set. Fails fast on
/// non-finite numeric inputs or a maturity not strictly after the start;
/// a partially built sequence is never returned.
pub fn project_lifetime(
    initial_amount: f64,
    start_date: Date,
    maturity_date: Option<Date>,
    returns: &ReturnModel,
) -> Result<Vec<YearlyPerformance>, ValidationError> {
    validate_inputs(initial_amount, start_date, maturity_date, returns)?;

    let start_year = start_date.year();
    // The default horizon is capped at the calendar maximum so dividend
    // dates near the end of the representable range stay constructible
    let end_year = maturity_date.map_or(
        (start_year + DEFAULT_HORIZON_YEARS).min(MAX_CALENDAR_YEAR),
        |d| d.year(),
    );

    let mut sequence = Vec::with_capacity((end_year - start_year + 1) as usize);
    let mut running_value = initial_amount;

    for year in start_year..=end_year {
        let record = project_year(year, running_value, returns);
        // Carry the stored (rounded) end value so start[N+1] == end[N] exactly
        running_value = record.end_value;
        sequence.push(record);
    }

    Ok(sequence)
}

/// Validate the numeric and date inputs of a projection request.
///
/// The form layer normally rejects these before the engine runs; this
/// re-check keeps the engine from producing garbage when it hasn't.
pub fn validate_inputs(
    initial_amount: f64,
    start_date: Date,
    maturity_date: Option<Date>,
    returns: &ReturnModel,
) -> Result<(), ValidationError> {
    if !initial_amount.is_finite() {
        return Err(ValidationError::NonFiniteInput {
            field: "initial_amount",
            value: initial_amount,
        });
    }
    if !returns.capital_gain.annual_rate.is_finite() {
        return Err(ValidationError::NonFiniteInput {
            field: "annual_rate",
            value: returns.capital_gain.annual_rate,
        });
    }
    if let Some(income) = &returns.income_gain
        && !income.dividend_yield.is_finite()
    {
        return Err(ValidationError::NonFiniteInput {
            field: "dividend_yield",
            value: income.dividend_yield,
        });
    }
    if let Some(maturity) = maturity_date
        && maturity <= start_date
    {
        return Err(ValidationError::InvalidDateRange {
            start: start_date,
            maturity,
        });
    }
    Ok(())
}
