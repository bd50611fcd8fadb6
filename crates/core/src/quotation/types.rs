//! Quotation data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use presage_shared::types::{Currency, Money};

/// Input for building a quotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationRequest {
    /// Client (company) name.
    pub client_name: String,
    /// Point-of-contact name.
    pub poc_name: String,
    /// Point-of-contact email address.
    pub poc_email: String,
    /// Estimated development and deployment days.
    pub project_days: u32,
    /// Daily rate in the quoted currency.
    pub daily_rate: Decimal,
    /// Annual support and maintenance cost.
    pub annual_support_cost: Decimal,
    /// Currency the quotation is issued in.
    pub currency: Currency,
}

/// One line of the itemized cost breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationLine {
    /// Line description.
    pub description: String,
    /// Quantity (days for development, 1 for support).
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Line amount (`quantity * unit_price`).
    pub amount: Decimal,
}

/// A complete quotation document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    /// Reference number, `Q-{YYYYMMDD}-{suffix}`.
    pub reference: String,
    /// Client (company) name.
    pub client_name: String,
    /// Point-of-contact name.
    pub poc_name: String,
    /// Point-of-contact email address.
    pub poc_email: String,
    /// Date the quotation was issued.
    pub issued_on: NaiveDate,
    /// Itemized cost lines, in presentation order.
    pub lines: Vec<QuotationLine>,
    /// Grand total.
    pub total: Money,
}

impl Quotation {
    /// Renders the quotation as a plain-text document.
    ///
    /// This is the body used for email delivery and text export.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Quotation for {}\n", self.client_name));
        out.push_str(&format!("Reference: {}\n", self.reference));
        out.push_str(&format!("Date: {}\n\n", self.issued_on));
        out.push_str(&format!(
            "Point of Contact: {} ({})\n\n",
            self.poc_name, self.poc_email
        ));
        out.push_str("Itemized Cost:\n");
        for line in &self.lines {
            if line.quantity == Decimal::ONE {
                out.push_str(&format!(
                    "- {}: {} {:.2}\n",
                    line.description, self.total.currency, line.amount
                ));
            } else {
                out.push_str(&format!(
                    "- {}: {} days @ {} {:.2}/day = {} {:.2}\n",
                    line.description,
                    line.quantity,
                    self.total.currency,
                    line.unit_price,
                    self.total.currency,
                    line.amount
                ));
            }
        }
        out.push_str(&format!("\nTotal Quotation: {}\n", self.total));
        out
    }
}
