//! Quotation routes.

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use tracing::{error, info};

use crate::AppState;
use crate::routes::error_response;
use presage_core::export::{format_money, quotation_table, render, ExportFormat};
use presage_core::quotation::{Quotation, QuotationBuilder, QuotationRequest};
use presage_shared::types::Currency;
use presage_shared::{AppError, EmailAttachment};

/// Creates the quotation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quotation", post(create_quotation))
        .route("/quotation/export", post(export_quotation))
        .route("/quotation/send", post(send_quotation))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for generating a quotation.
#[derive(Debug, Clone, Deserialize)]
pub struct QuotationCreateRequest {
    /// Client (company) name.
    pub client_name: String,
    /// Point-of-contact name.
    pub poc_name: String,
    /// Point-of-contact email address.
    pub poc_email: String,
    /// Estimated development and deployment days.
    pub project_days: u32,
    /// Daily rate in the quoted currency.
    pub daily_rate: String,
    /// Annual support and maintenance cost.
    pub annual_support_cost: String,
    /// ISO 4217 currency code; defaults to USD.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Request body for exporting a quotation.
#[derive(Debug, Deserialize)]
pub struct QuotationExportRequest {
    /// Quotation inputs.
    #[serde(flatten)]
    pub quotation: QuotationCreateRequest,
    /// Target format: csv, xlsx, json, or text.
    pub format: String,
}

/// Response for a generated quotation.
#[derive(Debug, Serialize)]
pub struct QuotationResponse {
    /// Reference number.
    pub reference: String,
    /// Client name.
    pub client_name: String,
    /// Point-of-contact name.
    pub poc_name: String,
    /// Point-of-contact email.
    pub poc_email: String,
    /// Issue date (ISO 8601).
    pub issued_on: String,
    /// Itemized cost lines.
    pub lines: Vec<QuotationLineResponse>,
    /// Grand total.
    pub total: String,
    /// Quotation currency.
    pub currency: String,
    /// Plain-text rendering of the document.
    pub text: String,
}

/// One itemized line.
#[derive(Debug, Serialize)]
pub struct QuotationLineResponse {
    /// Line description.
    pub description: String,
    /// Quantity.
    pub quantity: String,
    /// Price per unit.
    pub unit_price: String,
    /// Line amount.
    pub amount: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

impl QuotationCreateRequest {
    /// Parses and builds the quotation, dated today.
    fn build(self) -> Result<Quotation, Response> {
        let parse = |field: &str, value: &str| -> Result<Decimal, Response> {
            Decimal::from_str(value).map_err(|_| {
                error_response(&AppError::Validation(format!(
                    "{field} is not a valid number: {value}"
                )))
            })
        };

        let currency = Currency::from_str(&self.currency)
            .map_err(|e| error_response(&AppError::Validation(e)))?;

        let request = QuotationRequest {
            client_name: self.client_name,
            poc_name: self.poc_name,
            poc_email: self.poc_email,
            project_days: self.project_days,
            daily_rate: parse("daily_rate", &self.daily_rate)?,
            annual_support_cost: parse("annual_support_cost", &self.annual_support_cost)?,
            currency,
        };

        QuotationBuilder::build(&request, Utc::now().date_naive())
            .map_err(|e| error_response(&AppError::Validation(e.to_string())))
    }
}

fn to_response(quotation: &Quotation) -> QuotationResponse {
    QuotationResponse {
        reference: quotation.reference.clone(),
        client_name: quotation.client_name.clone(),
        poc_name: quotation.poc_name.clone(),
        poc_email: quotation.poc_email.clone(),
        issued_on: quotation.issued_on.to_string(),
        lines: quotation
            .lines
            .iter()
            .map(|line| QuotationLineResponse {
                description: line.description.clone(),
                quantity: line.quantity.to_string(),
                unit_price: format_money(line.unit_price),
                amount: format_money(line.amount),
            })
            .collect(),
        total: format_money(quotation.total.amount),
        currency: quotation.total.currency.to_string(),
        text: quotation.to_text(),
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /quotation
async fn create_quotation(Json(request): Json<QuotationCreateRequest>) -> Response {
    match request.build() {
        Ok(quotation) => Json(to_response(&quotation)).into_response(),
        Err(response) => response,
    }
}

/// POST /quotation/export
async fn export_quotation(Json(request): Json<QuotationExportRequest>) -> Response {
    let format = match ExportFormat::from_str(&request.format) {
        Ok(format) => format,
        Err(_) => {
            return error_response(&AppError::UnsupportedFormat(request.format));
        }
    };

    let quotation = match request.quotation.build() {
        Ok(quotation) => quotation,
        Err(response) => return response,
    };

    let table = quotation_table(&quotation);
    match render(&table, format) {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, format.content_type().to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"quotation.{}\"", format.extension()),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render quotation export");
            error_response(&AppError::Internal("Failed to render export".to_string()))
        }
    }
}

/// POST /quotation/send
///
/// Builds the quotation, then emails the plain-text document to the
/// point of contact with a CSV attachment.
async fn send_quotation(
    State(state): State<AppState>,
    Json(request): Json<QuotationCreateRequest>,
) -> Response {
    let quotation = match request.build() {
        Ok(quotation) => quotation,
        Err(response) => return response,
    };

    let csv_bytes = match render(&quotation_table(&quotation), ExportFormat::Csv) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(error = %e, "Failed to render quotation attachment");
            return error_response(&AppError::Internal(
                "Failed to render attachment".to_string(),
            ));
        }
    };

    let subject = format!("Quotation {} - {}", quotation.reference, quotation.client_name);
    let attachment = EmailAttachment {
        filename: format!("{}.csv", quotation.reference),
        content_type: ExportFormat::Csv.content_type().to_string(),
        bytes: csv_bytes,
    };

    match state
        .email_service
        .send_with_attachments(
            &quotation.poc_email,
            &subject,
            &quotation.to_text(),
            &[attachment],
        )
        .await
    {
        Ok(()) => {
            info!(
                recipient = %quotation.poc_email,
                reference = %quotation.reference,
                "Quotation emailed"
            );
            Json(json!({
                "status": "sent",
                "recipient": quotation.poc_email,
                "reference": quotation.reference,
            }))
            .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to send quotation email");
            error_response(&AppError::ExternalService(e.to_string()))
        }
    }
}
