//! Yearly performance records
//!
//! One `YearlyPerformance` record exists per calendar year of an asset's
//! projection horizon. Projected values are written by the projector;
//! the optional actual-result overlay is written only through
//! reconciliation. Consumers must prefer the actual overlay over the
//! projected value whenever it is present.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A single dividend payment, dated the 1st of its payment month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividendPayment {
    pub date: Date,
    /// Whole-unit rounded amount, non-negative.
    pub amount: f64,
}

/// User-entered actual results for one year
///
/// Doubles as the reconciliation payload and the stored overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualPerformance {
    pub end_value: f64,
    pub capital_gains: f64,
    pub dividends: Vec<DividendPayment>,
    pub total_dividends: f64,
}

/// Projected performance for one calendar year
///
/// Identity is `year`, unique and contiguous within an asset's sequence.
/// Chain invariant: `start_value` of year N equals `end_value` of year
/// N-1; the first year's `start_value` equals the asset's principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyPerformance {
    pub year: i16,
    /// Whole-unit rounded value at the start of the year.
    pub start_value: f64,
    /// Whole-unit rounded value at the end of the year.
    pub end_value: f64,
    /// Whole-unit rounded capital gain for the year.
    pub capital_gains: f64,
    pub dividends: Vec<DividendPayment>,
    /// Rounded sum of `dividends[].amount`.
    pub total_dividends: f64,
    /// Actual results, set only via reconciliation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<ActualPerformance>,
}

impl YearlyPerformance {
    /// End value, preferring the actual result when present.
    #[must_use]
    pub fn effective_end_value(&self) -> f64 {
        self.actual.as_ref().map_or(self.end_value, |a| a.end_value)
    }

    /// Capital gains, preferring the actual result when present.
    #[must_use]
    pub fn effective_capital_gains(&self) -> f64 {
        self.actual
            .as_ref()
            .map_or(self.capital_gains, |a| a.capital_gains)
    }

    /// Total dividends, preferring the actual result when present.
    #[must_use]
    pub fn effective_total_dividends(&self) -> f64 {
        self.actual
            .as_ref()
            .map_or(self.total_dividends, |a| a.total_dividends)
    }

    /// Dividend payments, preferring the actual result when present.
    #[must_use]
    pub fn effective_dividends(&self) -> &[DividendPayment] {
        self.actual
            .as_ref()
            .map_or(&self.dividends, |a| &a.dividends)
    }

    /// Whether this year has been reconciled against actual results.
    #[must_use]
    pub fn is_reconciled(&self) -> bool {
        self.actual.is_some()
    }
}
