//! Forecast routes.

use axum::{
    Json, Router,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::error;

use crate::AppState;
use crate::routes::error_response;
use presage_core::export::{forecast_table, format_money, format_users, render, ExportFormat};
use presage_core::forecast::{
    BillingFrequency, ForecastEngine, ForecastParameters, ForecastResult, SaturationPolicy,
};
use presage_shared::AppError;

/// Creates the forecast routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/forecast/run", post(run_forecast))
        .route("/forecast/export", post(export_forecast))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for running a forecast.
///
/// Rates and prices travel as strings and are parsed to `Decimal` at the
/// boundary, never as floats.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastRequest {
    /// Total addressable subscribers (0 when no ceiling figure is known).
    pub subscriber_base: u64,
    /// Maximum daily reach of promotional messaging.
    pub daily_promotional_bandwidth: u64,
    /// Opt-in percentage, "0" to "100".
    pub opt_in_rate: String,
    /// Charging success percentage, "0" to "100".
    pub charging_success_rate: String,
    /// Price per billing period.
    pub price_per_period: String,
    /// Monthly churn rate, "0" to "1".
    pub churn_rate: String,
    /// Months a new cohort is immune to churn.
    pub retention_window_months: u32,
    /// Billing frequency.
    pub billing_frequency: BillingFrequency,
    /// Policy for a zero subscriber base.
    #[serde(default)]
    pub saturation_policy: SaturationPolicy,
}

/// Request body for exporting a forecast.
#[derive(Debug, Deserialize)]
pub struct ForecastExportRequest {
    /// Forecast parameters.
    #[serde(flatten)]
    pub parameters: ForecastRequest,
    /// Target format: csv, xlsx, json, or text.
    pub format: String,
}

/// Response for a forecast run.
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    /// Monthly rows, months 1 through 12.
    pub rows: Vec<ForecastRowResponse>,
    /// Aggregate totals.
    pub summary: ForecastSummaryResponse,
}

/// One month of the projection, rounded for presentation.
#[derive(Debug, Serialize)]
pub struct ForecastRowResponse {
    /// Month index.
    pub month: u32,
    /// Users acquired this month.
    pub new_users: String,
    /// Users churned this month.
    pub churned_users: String,
    /// Active subscribers at month end.
    pub active_users: String,
    /// Monthly revenue.
    pub revenue: String,
}

/// Aggregate totals, rounded for presentation.
#[derive(Debug, Serialize)]
pub struct ForecastSummaryResponse {
    /// Total acquisitions over 12 months.
    pub total_new_users: String,
    /// Total churn over 12 months.
    pub total_churned_users: String,
    /// Active subscribers at the end of month 12.
    pub ending_active_users: String,
    /// Total revenue over 12 months.
    pub total_revenue: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parses a decimal request field, naming the field in the error.
fn parse_field(field: &str, value: &str) -> Result<Decimal, Response> {
    Decimal::from_str(value).map_err(|_| {
        error_response(&AppError::Validation(format!(
            "{field} is not a valid number: {value}"
        )))
    })
}

impl ForecastRequest {
    /// Parses and validates the request into engine parameters.
    fn into_params(self) -> Result<ForecastParameters, Response> {
        let params = ForecastParameters {
            subscriber_base: self.subscriber_base,
            daily_promotional_bandwidth: self.daily_promotional_bandwidth,
            opt_in_rate: parse_field("opt_in_rate", &self.opt_in_rate)?,
            charging_success_rate: parse_field(
                "charging_success_rate",
                &self.charging_success_rate,
            )?,
            price_per_period: parse_field("price_per_period", &self.price_per_period)?,
            churn_rate: parse_field("churn_rate", &self.churn_rate)?,
            retention_window_months: self.retention_window_months,
            billing_frequency: self.billing_frequency,
            saturation_policy: self.saturation_policy,
        };

        params
            .validate()
            .map_err(|e| error_response(&AppError::Validation(e.to_string())))?;

        Ok(params)
    }
}

fn to_response(result: &ForecastResult) -> ForecastResponse {
    ForecastResponse {
        rows: result
            .rows
            .iter()
            .map(|row| ForecastRowResponse {
                month: row.month,
                new_users: format_users(row.new_users),
                churned_users: format_users(row.churned_users),
                active_users: format_users(row.active_users),
                revenue: format_money(row.revenue),
            })
            .collect(),
        summary: ForecastSummaryResponse {
            total_new_users: format_users(result.summary.total_new_users),
            total_churned_users: format_users(result.summary.total_churned_users),
            ending_active_users: format_users(result.summary.ending_active_users),
            total_revenue: format_money(result.summary.total_revenue),
        },
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /forecast/run
async fn run_forecast(Json(request): Json<ForecastRequest>) -> Response {
    let params = match request.into_params() {
        Ok(params) => params,
        Err(response) => return response,
    };

    let result = ForecastEngine::run(&params);
    Json(to_response(&result)).into_response()
}

/// POST /forecast/export
async fn export_forecast(Json(request): Json<ForecastExportRequest>) -> Response {
    let format = match ExportFormat::from_str(&request.format) {
        Ok(format) => format,
        Err(_) => {
            return error_response(&AppError::UnsupportedFormat(request.format));
        }
    };

    let params = match request.parameters.into_params() {
        Ok(params) => params,
        Err(response) => return response,
    };

    let result = ForecastEngine::run(&params);
    let table = forecast_table(&result);

    match render(&table, format) {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, format.content_type().to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"forecast.{}\"", format.extension()),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render forecast export");
            error_response(&AppError::Internal("Failed to render export".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn base_request() -> ForecastRequest {
        ForecastRequest {
            subscriber_base: 0,
            daily_promotional_bandwidth: 1_000_000,
            opt_in_rate: "2".to_string(),
            charging_success_rate: "100".to_string(),
            price_per_period: "3".to_string(),
            churn_rate: "0.1".to_string(),
            retention_window_months: 3,
            billing_frequency: BillingFrequency::Daily,
            saturation_policy: SaturationPolicy::Uncapped,
        }
    }

    #[test]
    fn test_into_params_parses_decimals() {
        let params = base_request().into_params().unwrap();
        assert_eq!(params.opt_in_rate, dec!(2));
        assert_eq!(params.churn_rate, dec!(0.1));
        assert_eq!(params.billing_frequency, BillingFrequency::Daily);
    }

    #[rstest]
    #[case::not_a_number("two")]
    #[case::out_of_range("120")]
    #[case::negative("-1")]
    fn test_into_params_rejects_bad_opt_in_rate(#[case] rate: &str) {
        let request = ForecastRequest {
            opt_in_rate: rate.to_string(),
            ..base_request()
        };
        assert!(request.into_params().is_err());
    }

    #[rstest]
    #[case::not_a_number("lots")]
    #[case::above_one("1.5")]
    fn test_into_params_rejects_bad_churn_rate(#[case] rate: &str) {
        let request = ForecastRequest {
            churn_rate: rate.to_string(),
            ..base_request()
        };
        assert!(request.into_params().is_err());
    }

    #[test]
    fn test_response_mapping_rounds_rows() {
        let params = base_request().into_params().unwrap();
        let result = ForecastEngine::run(&params);
        let response = to_response(&result);

        assert_eq!(response.rows.len(), 12);
        assert_eq!(response.rows[0].new_users, "600000");
        assert_eq!(response.rows[0].revenue, "54000000.00");
        assert_eq!(response.rows[3].churned_users, "60000");
    }
}
