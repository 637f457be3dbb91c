//! Dividend payment scheduling for one calendar year
//!
//! Payments are evenly spaced across the year: payment i (0-based) lands
//! on the 1st of month `floor(12 / payments_per_year * i)`. Each payment
//! is rounded to the nearest whole unit independently rather than
//! splitting a rounded total, so rounding error can accumulate across a
//! year's payments; this is accepted, not corrected.

use crate::model::{DividendPayment, PaymentFrequency};

/// Schedule one year of dividend payments.
///
/// `amount` is the yield basis for the year (the pre-growth start value,
/// per the projector's contract). Pure and infallible.
#[must_use]
pub fn schedule_dividends(
    amount: f64,
    dividend_yield: f64,
    frequency: PaymentFrequency,
    year: i16,
) -> Vec<DividendPayment> {
    let payments_per_year = frequency.payments_per_year();
    let per_payment = (amount * dividend_yield / f64::from(payments_per_year)).round();
    // Negative rates can erode the basis below zero; payments never go negative
    let per_payment = per_payment.max(0.0);

    (0..payments_per_year)
        .map(|i| {
            let month = (12 / payments_per_year * i) as i8 + 1;
            DividendPayment {
                date: jiff::civil::date(year, month, 1),
                amount: per_payment,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_quarterly_payment_dates() {
        let payments = schedule_dividends(100_000.0, 0.04, PaymentFrequency::Quarterly, 2025);

        assert_eq!(payments.len(), 4);
        assert_eq!(payments[0].date, date(2025, 1, 1));
        assert_eq!(payments[1].date, date(2025, 4, 1));
        assert_eq!(payments[2].date, date(2025, 7, 1));
        assert_eq!(payments[3].date, date(2025, 10, 1));
    }

    #[test]
    fn test_quarterly_per_payment_amount() {
        // 100_000 * 0.04 / 4 = 1000 per payment
        let payments = schedule_dividends(100_000.0, 0.04, PaymentFrequency::Quarterly, 2025);
        for p in &payments {
            assert_eq!(p.amount, 1000.0);
        }
    }

    #[test]
    fn test_monthly_payment_dates() {
        let payments = schedule_dividends(50_000.0, 0.03, PaymentFrequency::Monthly, 2024);

        assert_eq!(payments.len(), 12);
        for (i, p) in payments.iter().enumerate() {
            assert_eq!(p.date, date(2024, i as i8 + 1, 1));
        }
    }

    #[test]
    fn test_yearly_single_payment() {
        let payments = schedule_dividends(10_000.0, 0.05, PaymentFrequency::Yearly, 2030);

        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].date, date(2030, 1, 1));
        assert_eq!(payments[0].amount, 500.0);
    }

    #[test]
    fn test_per_payment_rounding_independent() {
        // 1000 * 0.01 / 4 = 2.5, rounds to 3 per payment; 4 * 3 = 12
        // rather than round(10) split — accumulation is accepted
        let payments = schedule_dividends(1000.0, 0.01, PaymentFrequency::Quarterly, 2025);
        let total: f64 = payments.iter().map(|p| p.amount).sum();
        assert_eq!(payments[0].amount, 3.0);
        assert_eq!(total, 12.0);
    }

    #[test]
    fn test_zero_yield() {
        let payments = schedule_dividends(100_000.0, 0.0, PaymentFrequency::Monthly, 2025);
        assert_eq!(payments.len(), 12);
        assert!(payments.iter().all(|p| p.amount == 0.0));
    }

    #[test]
    fn test_negative_basis_clamps_to_zero() {
        let payments = schedule_dividends(-5_000.0, 0.04, PaymentFrequency::Yearly, 2025);
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].amount, 0.0);
    }
}
