//! Conversions from domain results to tabular documents.
//!
//! Presentation rounding happens here: user counts become whole numbers,
//! money is shown to two decimal places. The engine's fractional values are
//! never rounded internally.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::forecast::ForecastResult;
use crate::quotation::Quotation;

use super::render::TabularDocument;

/// Formats a user count for display: whole users, half away from zero.
///
/// The single rounding policy for every presentation surface (tables and
/// API responses); the engine's fractional values are never rounded.
#[must_use]
pub fn format_users(value: Decimal) -> String {
    format!(
        "{:.0}",
        value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Formats a monetary amount for display, to two decimal places.
#[must_use]
pub fn format_money(value: Decimal) -> String {
    format!("{value:.2}")
}

/// Builds the 12-month forecast table with a trailing totals row.
#[must_use]
pub fn forecast_table(result: &ForecastResult) -> TabularDocument {
    let mut rows: Vec<Vec<String>> = result
        .rows
        .iter()
        .map(|row| {
            vec![
                row.month.to_string(),
                format_users(row.new_users),
                format_users(row.churned_users),
                format_users(row.active_users),
                format_money(row.revenue),
            ]
        })
        .collect();

    rows.push(vec![
        "Total".to_string(),
        format_users(result.summary.total_new_users),
        format_users(result.summary.total_churned_users),
        format_users(result.summary.ending_active_users),
        format_money(result.summary.total_revenue),
    ]);

    TabularDocument {
        title: "12-Month Subscriber and Revenue Forecast".to_string(),
        columns: vec![
            "Month".to_string(),
            "New Users".to_string(),
            "Churned Users".to_string(),
            "Active Users".to_string(),
            "Revenue".to_string(),
        ],
        rows,
    }
}

/// Builds the itemized quotation table with a trailing total row.
#[must_use]
pub fn quotation_table(quotation: &Quotation) -> TabularDocument {
    let mut rows: Vec<Vec<String>> = quotation
        .lines
        .iter()
        .map(|line| {
            vec![
                line.description.clone(),
                line.quantity.to_string(),
                format_money(line.unit_price),
                format_money(line.amount),
            ]
        })
        .collect();

    rows.push(vec![
        "Total".to_string(),
        String::new(),
        String::new(),
        format_money(quotation.total.amount),
    ]);

    TabularDocument {
        title: format!("Quotation {} for {}", quotation.reference, quotation.client_name),
        columns: vec![
            "Description".to_string(),
            "Quantity".to_string(),
            format!("Unit Price ({})", quotation.total.currency),
            format!("Amount ({})", quotation.total.currency),
        ],
        rows,
    }
}
