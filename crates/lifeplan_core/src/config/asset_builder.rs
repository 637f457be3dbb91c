//! Asset Builder DSL
//!
//! Provides a fluent API for defining assets before handing them to the
//! store.
//!
//! # Examples
//!
//! ```ignore
//! use lifeplan_core::config::AssetBuilder;
//!
//! let fund = AssetBuilder::new("Index fund")
//!     .category("Investments")
//!     .amount(100_000.0)
//!     .start(2024, 1, 1)
//!     .capital_gain(0.05, CompoundingFrequency::Yearly)
//!     .income_gain(0.02, PaymentFrequency::Quarterly, true)
//!     .build();
//!
//! let id = store.create(fund)?;
//! ```

use jiff::civil::Date;

use crate::model::{
    CapitalGainModel, CompoundingFrequency, IncomeGainModel, PaymentFrequency, ReturnModel,
};

/// Builder for an asset creation/update payload
#[derive(Debug, Clone)]
pub struct AssetBuilder {
    name: String,
    category: Option<String>,
    initial_amount: f64,
    start_date: Date,
    maturity_date: Option<Date>,
    capital_gain: CapitalGainModel,
    income_gain: Option<IncomeGainModel>,
}

/// A fully defined asset payload ready for the store
#[derive(Debug, Clone, PartialEq)]
pub struct AssetDefinition {
    pub name: String,
    pub category: String,
    pub initial_amount: f64,
    pub start_date: Date,
    pub maturity_date: Option<Date>,
    pub returns: ReturnModel,
}

impl AssetBuilder {
    /// Create a new builder with the given display name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            initial_amount: 0.0,
            start_date: jiff::civil::date(2024, 1, 1),
            maturity_date: None,
            capital_gain: CapitalGainModel::new(0.0, CompoundingFrequency::Yearly),
            income_gain: None,
        }
    }

    // =========================================================================
    // Common Asset Presets
    // =========================================================================

    /// A broad stock index fund (~5% expected return)
    #[must_use]
    pub fn index_fund(name: impl Into<String>) -> Self {
        Self::new(name)
            .category("Investments")
            .capital_gain(0.05, CompoundingFrequency::Yearly)
    }

    /// A high-yield savings account with daily compounding
    #[must_use]
    pub fn savings_account(name: impl Into<String>) -> Self {
        Self::new(name)
            .category("Savings")
            .capital_gain(0.02, CompoundingFrequency::Daily)
    }

    /// A dividend-paying stock with quarterly payouts, reinvested
    #[must_use]
    pub fn dividend_stock(name: impl Into<String>) -> Self {
        Self::new(name)
            .category("Investments")
            .capital_gain(0.03, CompoundingFrequency::Yearly)
            .income_gain(0.03, PaymentFrequency::Quarterly, true)
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Set the category label
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the principal
    #[must_use]
    pub fn amount(mut self, initial_amount: f64) -> Self {
        self.initial_amount = initial_amount;
        self
    }

    /// Set the start date
    #[must_use]
    pub fn start(mut self, year: i16, month: i8, day: i8) -> Self {
        self.start_date = jiff::civil::date(year, month, day);
        self
    }

    /// Set the maturity date (must be strictly after the start date;
    /// validated by the store, not here)
    #[must_use]
    pub fn maturity(mut self, year: i16, month: i8, day: i8) -> Self {
        self.maturity_date = Some(jiff::civil::date(year, month, day));
        self
    }

    /// Set the compounding capital-gain component
    #[must_use]
    pub fn capital_gain(mut self, annual_rate: f64, compounding: CompoundingFrequency) -> Self {
        self.capital_gain = CapitalGainModel::new(annual_rate, compounding);
        self
    }

    /// Set the periodic dividend component
    #[must_use]
    pub fn income_gain(
        mut self,
        dividend_yield: f64,
        payment_frequency: PaymentFrequency,
        reinvest_dividends: bool,
    ) -> Self {
        self.income_gain = Some(IncomeGainModel {
            dividend_yield,
            payment_frequency,
            reinvest_dividends,
        });
        self
    }

    /// Build the asset definition
    #[must_use]
    pub fn build(self) -> AssetDefinition {
        AssetDefinition {
            name: self.name,
            category: self.category.unwrap_or_else(|| "Uncategorized".to_string()),
            initial_amount: self.initial_amount,
            start_date: self.start_date,
            maturity_date: self.maturity_date,
            returns: ReturnModel {
                capital_gain: self.capital_gain,
                income_gain: self.income_gain,
            },
        }
    }
}
