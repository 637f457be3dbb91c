use std::fmt;

use jiff::civil::Date;

use crate::model::AssetId;

/// Errors raised when asset inputs fail fast-path validation
///
/// The engine favors silent degradation (unrecognized frequencies fall
/// back to yearly, reconciling a missing year is a no-op); only the
/// conditions below surface as explicit failures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// A numeric input was NaN or infinite
    NonFiniteInput { field: &'static str, value: f64 },
    /// `maturity_date` was not strictly after `start_date`
    InvalidDateRange { start: Date, maturity: Date },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonFiniteInput { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
            ValidationError::InvalidDateRange { start, maturity } => {
                write!(
                    f,
                    "maturity date {maturity} must be strictly after start date {start}"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised by the Monte Carlo simulator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationError {
    /// A count parameter was non-positive
    InvalidParameter { name: &'static str, value: i64 },
    /// A numeric input was NaN or infinite
    NonFiniteInput { name: &'static str, value: f64 },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidParameter { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            SimulationError::NonFiniteInput { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Errors raised by asset store operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreError {
    AssetNotFound(AssetId),
    Validation(ValidationError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::AssetNotFound(id) => write!(f, "asset {id:?} not found"),
            StoreError::Validation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Validation(e) => Some(e),
            StoreError::AssetNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(e: ValidationError) -> Self {
        StoreError::Validation(e)
    }
}
