//! Forecast data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ForecastError;

/// Billing frequency for the subscription price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingFrequency {
    /// Charged once per day (30 billing periods per month).
    Daily,
    /// Charged once per week (~4.345 billing periods per month).
    Weekly,
    /// Charged once per month.
    Monthly,
}

impl BillingFrequency {
    /// Average number of billing periods in one month.
    #[must_use]
    pub fn periods_per_month(self) -> Decimal {
        match self {
            Self::Daily => Decimal::from(30),
            // 365.25 / 12 / 7
            Self::Weekly => Decimal::new(4345, 3),
            Self::Monthly => Decimal::ONE,
        }
    }
}

/// Acquisition policy when the subscriber base is reported as zero.
///
/// A zero base is ambiguous in the field data: it usually means "no ceiling
/// figure available" rather than "no eligible users", so the policy is
/// explicit instead of hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaturationPolicy {
    /// No ceiling: acquisition is unbounded by saturation.
    #[default]
    Uncapped,
    /// Zero eligible users: no acquisition at all.
    NoEligibleUsers,
}

/// Parameters for one forecast run. Immutable for the duration of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastParameters {
    /// Total addressable subscribers for the operator/segment (0 if unknown).
    pub subscriber_base: u64,
    /// Maximum daily reach of promotional messaging.
    pub daily_promotional_bandwidth: u64,
    /// Percentage of reached users who subscribe, in [0, 100].
    pub opt_in_rate: Decimal,
    /// Percentage of billing attempts that succeed, in [0, 100].
    pub charging_success_rate: Decimal,
    /// Price charged per billing period.
    pub price_per_period: Decimal,
    /// Monthly attrition rate applied to a cohort after the retention window, in [0, 1].
    pub churn_rate: Decimal,
    /// Months during which a newly acquired cohort is immune to churn.
    pub retention_window_months: u32,
    /// Billing frequency for revenue derivation.
    pub billing_frequency: BillingFrequency,
    /// Policy for a zero subscriber base.
    #[serde(default)]
    pub saturation_policy: SaturationPolicy,
}

impl ForecastParameters {
    /// Validates the parameters at the boundary.
    ///
    /// The engine itself performs no validation; callers must reject invalid
    /// input before invoking it.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError` for rates outside their ranges or a negative
    /// price. Counts are unsigned, so negatives are unrepresentable.
    pub fn validate(&self) -> Result<(), ForecastError> {
        for (field, value) in [
            ("Opt-in rate", self.opt_in_rate),
            ("Charging success rate", self.charging_success_rate),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                return Err(ForecastError::InvalidRate { field, value });
            }
        }
        if self.churn_rate < Decimal::ZERO || self.churn_rate > Decimal::ONE {
            return Err(ForecastError::InvalidChurnRate(self.churn_rate));
        }
        if self.price_per_period < Decimal::ZERO {
            return Err(ForecastError::InvalidPrice(self.price_per_period));
        }
        Ok(())
    }
}

/// One month of the projection.
///
/// User counts stay fractional internally; rounding to whole users is a
/// presentation concern, applied only when the row is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRow {
    /// Month index, 1 through 12.
    pub month: u32,
    /// Users acquired this month.
    pub new_users: Decimal,
    /// Users attributed to churn this month.
    pub churned_users: Decimal,
    /// Cumulative active subscribers after acquisition and churn.
    pub active_users: Decimal,
    /// Revenue derived from active users, price, and charging success.
    pub revenue: Decimal,
}

/// Aggregate totals over the 12-month projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// Sum of monthly acquisitions.
    pub total_new_users: Decimal,
    /// Sum of monthly churn.
    pub total_churned_users: Decimal,
    /// Active subscribers at the end of month 12.
    pub ending_active_users: Decimal,
    /// Sum of monthly revenue.
    pub total_revenue: Decimal,
}

/// Result of one forecast run: exactly 12 rows in month order plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Monthly rows, months 1 through 12 in order.
    pub rows: Vec<ForecastRow>,
    /// Aggregate totals.
    pub summary: ForecastSummary,
}

impl ForecastResult {
    /// Builds a result from ordered rows, computing the summary.
    #[must_use]
    pub fn from_rows(rows: Vec<ForecastRow>) -> Self {
        let summary = ForecastSummary {
            total_new_users: rows.iter().map(|r| r.new_users).sum(),
            total_churned_users: rows.iter().map(|r| r.churned_users).sum(),
            ending_active_users: rows.last().map_or(Decimal::ZERO, |r| r.active_users),
            total_revenue: rows.iter().map(|r| r.revenue).sum(),
        };
        Self { rows, summary }
    }
}
