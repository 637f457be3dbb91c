//! Actual-performance reconciliation
//!
//! Merges user-entered actual results into one year's projected record.
//! This is a pass-through merge, not a validated transaction: a year
//! with no record is silently ignored, and every other record — and the
//! matched record's projected fields — stays untouched. After a merge,
//! aggregate reads prefer the actual overlay via the `effective_*`
//! accessors on `YearlyPerformance`.

use crate::model::{ActualPerformance, Asset};

/// Merge actual results into the record for `year`.
///
/// Returns `true` when a record matched and was patched, `false` for
/// the silent no-op case.
pub fn reconcile_actuals(asset: &mut Asset, year: i16, actuals: ActualPerformance) -> bool {
    match asset
        .yearly_performance
        .iter_mut()
        .find(|p| p.year == year)
    {
        Some(record) => {
            record.actual = Some(actuals);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompoundingFrequency, ReturnModel};
    use crate::projection::project_lifetime;

    fn sample_asset() -> Asset {
        let returns = ReturnModel::capital_only(0.05, CompoundingFrequency::Yearly);
        let start = jiff::civil::date(2024, 3, 15);
        let maturity = jiff::civil::date(2028, 3, 15);
        Asset {
            asset_id: crate::model::AssetId(1),
            name: "Index fund".into(),
            category: "Investments".into(),
            initial_amount: 10_000.0,
            start_date: start,
            maturity_date: Some(maturity),
            returns,
            yearly_performance: project_lifetime(10_000.0, start, Some(maturity), &returns)
                .unwrap(),
        }
    }

    #[test]
    fn test_reconcile_sets_overlay() {
        let mut asset = sample_asset();
        let actuals = ActualPerformance {
            end_value: 10_800.0,
            capital_gains: 800.0,
            dividends: vec![],
            total_dividends: 0.0,
        };

        assert!(reconcile_actuals(&mut asset, 2025, actuals.clone()));

        let record = asset.performance_for_year(2025).unwrap();
        assert_eq!(record.actual.as_ref(), Some(&actuals));
        assert_eq!(record.effective_end_value(), 10_800.0);
        // Projected fields stay as projected
        assert_eq!(record.end_value, 11_025.0);
    }

    #[test]
    fn test_reconcile_missing_year_is_noop() {
        let mut asset = sample_asset();
        let before = asset.clone();
        let actuals = ActualPerformance {
            end_value: 1.0,
            capital_gains: 1.0,
            dividends: vec![],
            total_dividends: 0.0,
        };

        assert!(!reconcile_actuals(&mut asset, 1999, actuals));
        assert_eq!(asset, before);
    }
}
