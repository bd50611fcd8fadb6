//! Forecast error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Forecast parameter errors, detected at the boundary before the engine runs.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A percentage rate is outside [0, 100].
    #[error("{field} must be between 0 and 100, got {value}")]
    InvalidRate {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: Decimal,
    },

    /// Churn rate is outside [0, 1].
    #[error("Churn rate must be between 0 and 1, got {0}")]
    InvalidChurnRate(Decimal),

    /// Price per period is negative.
    #[error("Price per period cannot be negative, got {0}")]
    InvalidPrice(Decimal),
}
