//! Return model configuration
//!
//! A `ReturnModel` describes an asset's expected behavior: a compounding
//! capital-gain component plus an optional periodic dividend component.
//! It is configuration owned by exactly one asset, not a standalone entity.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Flat capital-gains withholding rate, carried for reference only.
///
/// Withholding itself is computed outside the engine; nothing in this
/// crate applies the rate.
pub const FLAT_CAPITAL_GAINS_TAX_RATE: f64 = 0.20315;

/// How often capital gains compound within a year.
///
/// Unrecognized values deserialize to [`CompoundingFrequency::Yearly`] —
/// the documented fallback, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    #[default]
    Yearly,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    /// Number of compounding periods in one year.
    ///
    /// A fixed 365-day year is assumed; leap years are intentionally ignored.
    #[must_use]
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Yearly => 1,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }

    /// Parse a frequency label, falling back to `Yearly` for anything
    /// unrecognized.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "monthly" => CompoundingFrequency::Monthly,
            "daily" => CompoundingFrequency::Daily,
            _ => CompoundingFrequency::Yearly,
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundingFrequency::Yearly => write!(f, "yearly"),
            CompoundingFrequency::Monthly => write!(f, "monthly"),
            CompoundingFrequency::Daily => write!(f, "daily"),
        }
    }
}

impl<'de> Deserialize<'de> for CompoundingFrequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CompoundingFrequency::parse(&s))
    }
}

/// How often dividends pay out within a year.
///
/// Unrecognized values deserialize to [`PaymentFrequency::Yearly`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFrequency {
    #[default]
    Yearly,
    Quarterly,
    Monthly,
}

impl PaymentFrequency {
    /// Number of dividend payments in one year.
    #[must_use]
    pub fn payments_per_year(self) -> u32 {
        match self {
            PaymentFrequency::Yearly => 1,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::Monthly => 12,
        }
    }

    /// Parse a frequency label, falling back to `Yearly` for anything
    /// unrecognized.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "quarterly" => PaymentFrequency::Quarterly,
            "monthly" => PaymentFrequency::Monthly,
            _ => PaymentFrequency::Yearly,
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentFrequency::Yearly => write!(f, "yearly"),
            PaymentFrequency::Quarterly => write!(f, "quarterly"),
            PaymentFrequency::Monthly => write!(f, "monthly"),
        }
    }
}

impl<'de> Deserialize<'de> for PaymentFrequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(PaymentFrequency::parse(&s))
    }
}

/// Compounding capital-gain component of a return model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapitalGainModel {
    /// Annual rate as a decimal fraction (0.05 = 5%). Any sign allowed.
    pub annual_rate: f64,
    pub compounding: CompoundingFrequency,
}

impl CapitalGainModel {
    #[must_use]
    pub fn new(annual_rate: f64, compounding: CompoundingFrequency) -> Self {
        Self {
            annual_rate,
            compounding,
        }
    }
}

/// Periodic dividend component of a return model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeGainModel {
    /// Dividend yield as a decimal fraction, >= 0.
    pub dividend_yield: f64,
    pub payment_frequency: PaymentFrequency,
    /// When true, the year's dividends are added to that year's ending
    /// value (not compounded further within the year).
    pub reinvest_dividends: bool,
}

/// Expected return behavior for one asset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnModel {
    pub capital_gain: CapitalGainModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_gain: Option<IncomeGainModel>,
}

impl ReturnModel {
    /// Capital gains only, no dividend component.
    #[must_use]
    pub fn capital_only(annual_rate: f64, compounding: CompoundingFrequency) -> Self {
        Self {
            capital_gain: CapitalGainModel::new(annual_rate, compounding),
            income_gain: None,
        }
    }
}
