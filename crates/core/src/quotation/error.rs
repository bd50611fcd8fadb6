//! Quotation error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Quotation-related errors.
#[derive(Debug, Error)]
pub enum QuotationError {
    /// Client name is empty.
    #[error("Client name cannot be empty")]
    EmptyClientName,

    /// Contact email is not a plausible address.
    #[error("Invalid contact email: {0}")]
    InvalidContactEmail(String),

    /// Project duration must be at least one day.
    #[error("Project days must be at least 1")]
    ZeroProjectDays,

    /// Daily rate must be positive.
    #[error("Daily rate must be positive, got {0}")]
    NonPositiveDailyRate(Decimal),

    /// Support cost cannot be negative.
    #[error("Support cost cannot be negative, got {0}")]
    NegativeSupportCost(Decimal),
}
