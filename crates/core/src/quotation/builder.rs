//! Quotation builder: validation and cost breakdown.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use presage_shared::types::Money;

use super::error::QuotationError;
use super::types::{Quotation, QuotationLine, QuotationRequest};

/// Builds quotations from validated requests.
pub struct QuotationBuilder;

impl QuotationBuilder {
    /// Builds a quotation for the given issue date.
    ///
    /// # Errors
    ///
    /// Returns `QuotationError` if the request fails validation.
    pub fn build(
        request: &QuotationRequest,
        issued_on: NaiveDate,
    ) -> Result<Quotation, QuotationError> {
        Self::validate(request)?;

        let days = Decimal::from(request.project_days);
        let development = days * request.daily_rate;
        let total = development + request.annual_support_cost;

        let lines = vec![
            QuotationLine {
                description: "Development and deployment".to_string(),
                quantity: days,
                unit_price: request.daily_rate,
                amount: development,
            },
            QuotationLine {
                description: "Annual support and maintenance".to_string(),
                quantity: Decimal::ONE,
                unit_price: request.annual_support_cost,
                amount: request.annual_support_cost,
            },
        ];

        Ok(Quotation {
            reference: Self::reference(issued_on),
            client_name: request.client_name.clone(),
            poc_name: request.poc_name.clone(),
            poc_email: request.poc_email.clone(),
            issued_on,
            lines,
            total: Money::new(total, request.currency),
        })
    }

    fn validate(request: &QuotationRequest) -> Result<(), QuotationError> {
        if request.client_name.trim().is_empty() {
            return Err(QuotationError::EmptyClientName);
        }
        if !is_plausible_email(&request.poc_email) {
            return Err(QuotationError::InvalidContactEmail(
                request.poc_email.clone(),
            ));
        }
        if request.project_days == 0 {
            return Err(QuotationError::ZeroProjectDays);
        }
        if request.daily_rate <= Decimal::ZERO {
            return Err(QuotationError::NonPositiveDailyRate(request.daily_rate));
        }
        if request.annual_support_cost < Decimal::ZERO {
            return Err(QuotationError::NegativeSupportCost(
                request.annual_support_cost,
            ));
        }
        Ok(())
    }

    /// Reference number: issue date plus a short random suffix.
    fn reference(issued_on: NaiveDate) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!("Q-{}-{}", issued_on.format("%Y%m%d"), &suffix[..8])
    }
}

/// Minimal shape check; full address validation happens in the mail layer.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}
