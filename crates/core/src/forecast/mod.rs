//! Deterministic subscriber/revenue projections.

pub mod engine;
pub mod error;
pub mod types;


#[cfg(test)]
mod props;

pub use engine::ForecastEngine;
pub use error::ForecastError;
pub use types::{
    BillingFrequency, ForecastParameters, ForecastResult, ForecastRow, ForecastSummary,
    SaturationPolicy,
};
