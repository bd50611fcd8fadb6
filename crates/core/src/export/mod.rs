//! Tabular document rendering.
//!
//! Forecast results and quotations both convert to a [`TabularDocument`],
//! which renders to CSV, XLSX, JSON, or aligned plain text as an in-memory
//! byte stream. Byte-for-byte fidelity with any particular office suite is
//! a non-goal; only the ordered content matters.

pub mod error;
pub mod render;
pub mod tables;

#[cfg(test)]
mod tests;

pub use error::ExportError;
pub use render::{render, ExportFormat, TabularDocument};
pub use tables::{forecast_table, format_money, format_users, quotation_table};
