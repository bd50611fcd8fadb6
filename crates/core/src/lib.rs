//! Core business logic for Presage.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `forecast` - Deterministic 12-month subscriber/revenue projections
//! - `quotation` - Itemized project quotations
//! - `export` - Tabular document rendering (CSV, XLSX, JSON, text)

pub mod export;
pub mod forecast;
pub mod quotation;
