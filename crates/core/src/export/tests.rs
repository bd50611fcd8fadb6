//! Unit tests for tabular export.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use presage_shared::types::Currency;

use crate::forecast::{BillingFrequency, ForecastEngine, ForecastParameters, SaturationPolicy};
use crate::quotation::{QuotationBuilder, QuotationRequest};

use super::render::{render, ExportFormat, TabularDocument};
use super::tables::{forecast_table, format_money, format_users, quotation_table};

fn sample_document() -> TabularDocument {
    TabularDocument {
        title: "Sample".to_string(),
        columns: vec!["Month".to_string(), "Revenue".to_string()],
        rows: vec![
            vec!["1".to_string(), "100.00".to_string()],
            vec!["2".to_string(), "250.50".to_string()],
        ],
    }
}

#[test]
fn test_csv_render() {
    let bytes = render(&sample_document(), ExportFormat::Csv).unwrap();
    let output = String::from_utf8(bytes).unwrap();

    assert!(output.starts_with("Month,Revenue\n"));
    assert!(output.contains("1,100.00\n"));
    assert!(output.contains("2,250.50\n"));
}

#[test]
fn test_csv_quotes_embedded_commas() {
    let mut document = sample_document();
    document.rows[0][1] = "1,000.00".to_string();
    let bytes = render(&document, ExportFormat::Csv).unwrap();
    let output = String::from_utf8(bytes).unwrap();
    assert!(output.contains("\"1,000.00\""));
}

#[test]
fn test_json_render() {
    let bytes = render(&sample_document(), ExportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["title"], "Sample");
    assert_eq!(value["columns"][1], "Revenue");
    assert_eq!(value["rows"][1][1], "250.50");
}

#[test]
fn test_xlsx_render_produces_zip() {
    let bytes = render(&sample_document(), ExportFormat::Xlsx).unwrap();
    // XLSX is a ZIP container.
    assert_eq!(bytes[..2], *b"PK");
    assert!(bytes.len() > 100);
}

#[test]
fn test_text_render_aligns_columns() {
    let bytes = render(&sample_document(), ExportFormat::Text).unwrap();
    let output = String::from_utf8(bytes).unwrap();

    assert!(output.starts_with("Sample\n\n"));
    assert!(output.contains("Month  Revenue"));
    assert!(output.contains("1      100.00"));
}

#[test]
fn test_format_from_str() {
    assert_eq!(ExportFormat::from_str("csv").unwrap(), ExportFormat::Csv);
    assert_eq!(ExportFormat::from_str("XLSX").unwrap(), ExportFormat::Xlsx);
    assert_eq!(ExportFormat::from_str("txt").unwrap(), ExportFormat::Text);
    assert!(ExportFormat::from_str("pdf").is_err());
}

#[test]
fn test_format_metadata() {
    assert_eq!(ExportFormat::Csv.content_type(), "text/csv");
    assert_eq!(ExportFormat::Csv.extension(), "csv");
    assert_eq!(ExportFormat::Xlsx.extension(), "xlsx");
}

#[test]
fn test_format_users_rounds_half_away_from_zero() {
    assert_eq!(format_users(dec!(10.5)), "11");
    assert_eq!(format_users(dec!(10.4)), "10");
    assert_eq!(format_users(dec!(0)), "0");
}

#[test]
fn test_format_money_two_places() {
    assert_eq!(format_money(dec!(1234.5)), "1234.50");
    assert_eq!(format_money(dec!(0)), "0.00");
}

#[test]
fn test_forecast_table_shape() {
    let params = ForecastParameters {
        subscriber_base: 0,
        daily_promotional_bandwidth: 1_000_000,
        opt_in_rate: dec!(2),
        charging_success_rate: dec!(100),
        price_per_period: dec!(3),
        churn_rate: dec!(0.1),
        retention_window_months: 3,
        billing_frequency: BillingFrequency::Daily,
        saturation_policy: SaturationPolicy::Uncapped,
    };
    let result = ForecastEngine::run(&params);
    let table = forecast_table(&result);

    assert_eq!(table.columns.len(), 5);
    // 12 months plus the totals row.
    assert_eq!(table.rows.len(), 13);
    assert_eq!(table.rows[0][0], "1");
    assert_eq!(table.rows[0][1], "600000");
    assert_eq!(table.rows[0][4], "54000000.00");
    assert_eq!(table.rows[12][0], "Total");
}

#[test]
fn test_quotation_table_shape() {
    let request = QuotationRequest {
        client_name: "Acme Telecom".to_string(),
        poc_name: "Jordan Vale".to_string(),
        poc_email: "jordan@acme.example".to_string(),
        project_days: 30,
        daily_rate: dec!(450),
        annual_support_cost: dec!(2500),
        currency: Currency::Usd,
    };
    let quotation =
        QuotationBuilder::build(&request, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()).unwrap();
    let table = quotation_table(&quotation);

    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.rows[0][0], "Development and deployment");
    assert_eq!(table.rows[0][3], "13500.00");
    assert_eq!(table.rows[2][0], "Total");
    assert_eq!(table.rows[2][3], "16000.00");
    assert!(table.title.contains("Acme Telecom"));
    assert_eq!(table.columns[2], "Unit Price (USD)");
}
