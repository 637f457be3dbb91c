//! Asset records
//!
//! An asset is a plain serializable record: identity, principal, date
//! range, return model, and the ordered projection sequence. Mutation
//! happens only through the store's documented operations; a rehydrated
//! asset keeps its previously computed sequence as-is.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::AssetId;
use super::performance::YearlyPerformance;
use super::returns::ReturnModel;

/// Bounded projection horizon when no maturity date is set.
pub const DEFAULT_HORIZON_YEARS: i16 = 50;

/// Last calendar year `jiff::civil::Date` can represent. The default
/// horizon is capped here so far-future start dates stay schedulable.
pub const MAX_CALENDAR_YEAR: i16 = 9999;

/// A user-owned asset with its full projected lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub asset_id: AssetId,
    pub name: String,
    /// Free-form category label, registered elsewhere.
    pub category: String,
    /// Principal, >= 0.
    pub initial_amount: f64,
    pub start_date: Date,
    /// Must be strictly after `start_date` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<Date>,
    pub returns: ReturnModel,
    /// One record per calendar year, ascending and contiguous.
    pub yearly_performance: Vec<YearlyPerformance>,
}

impl Asset {
    /// Last projected calendar year: the maturity year, or the start
    /// year plus the bounded default horizon (capped at the calendar
    /// maximum).
    #[must_use]
    pub fn projection_end_year(&self) -> i16 {
        self.maturity_date.map_or(
            (self.start_date.year() + DEFAULT_HORIZON_YEARS).min(MAX_CALENDAR_YEAR),
            |d| d.year(),
        )
    }

    /// Look up the performance record for a calendar year.
    #[must_use]
    pub fn performance_for_year(&self, year: i16) -> Option<&YearlyPerformance> {
        self.yearly_performance.iter().find(|p| p.year == year)
    }

    /// Projected (or reconciled) value at the end of the horizon.
    #[must_use]
    pub fn final_value(&self) -> f64 {
        self.yearly_performance
            .last()
            .map_or(self.initial_amount, YearlyPerformance::effective_end_value)
    }

    /// Sum of dividends across the whole horizon, preferring actual
    /// results where reconciled.
    #[must_use]
    pub fn total_dividends(&self) -> f64 {
        self.yearly_performance
            .iter()
            .map(YearlyPerformance::effective_total_dividends)
            .sum()
    }

    /// Total return over the horizon relative to the principal.
    ///
    /// Reinvested dividends are already part of the ending values, so
    /// they are not counted a second time here.
    #[must_use]
    pub fn total_return(&self) -> f64 {
        let reinvested = self
            .returns
            .income_gain
            .is_some_and(|g| g.reinvest_dividends);
        if reinvested {
            self.final_value() - self.initial_amount
        } else {
            self.final_value() + self.total_dividends() - self.initial_amount
        }
    }
}
