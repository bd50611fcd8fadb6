//! Itemized project quotations.

pub mod builder;
pub mod error;
pub mod types;


pub use builder::QuotationBuilder;
pub use error::QuotationError;
pub use types::{Quotation, QuotationLine, QuotationRequest};
