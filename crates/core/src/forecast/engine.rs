//! Forecast engine: bounded-growth acquisition with delayed-cohort churn.

use rust_decimal::Decimal;

use super::types::{ForecastParameters, ForecastResult, ForecastRow, SaturationPolicy};

/// Days of promotional reach counted per month.
const PROMO_DAYS_PER_MONTH: u32 = 30;

/// Engine for running subscriber/revenue projections.
///
/// Pure and synchronous: no I/O, no shared state, no failure modes once the
/// parameters have passed boundary validation. Invocations are fully
/// independent and may run concurrently.
pub struct ForecastEngine;

impl ForecastEngine {
    /// Number of months projected per run.
    pub const MONTHS: u32 = 12;

    /// Runs the projection, returning exactly 12 rows in month order.
    ///
    /// Acquisition each month is `floor(bandwidth * opt_in / 100) * 30`,
    /// capped by the remaining headroom under `subscriber_base` when the
    /// base is positive. Churn in month `m` draws only on the cohort
    /// acquired in month `m - retention_window_months`. Intermediate values
    /// stay fractional to avoid compounding rounding error across months.
    #[must_use]
    pub fn run(params: &ForecastParameters) -> ForecastResult {
        let daily_new_users = (Decimal::from(params.daily_promotional_bandwidth)
            * params.opt_in_rate
            / Decimal::ONE_HUNDRED)
            .floor();
        let monthly_reach = daily_new_users * Decimal::from(PROMO_DAYS_PER_MONTH);

        let subscriber_base = Decimal::from(params.subscriber_base);
        let periods_per_month = params.billing_frequency.periods_per_month();

        let mut active = Decimal::ZERO;
        // Acquisition ledger: cohorts[i] is the cohort acquired in month i+1,
        // consulted once it leaves the retention window.
        let mut cohorts: Vec<Decimal> = Vec::with_capacity(Self::MONTHS as usize);
        let mut rows: Vec<ForecastRow> = Vec::with_capacity(Self::MONTHS as usize);

        for month in 1..=Self::MONTHS {
            let acquired = if params.subscriber_base > 0 {
                let headroom = (subscriber_base - active).max(Decimal::ZERO);
                monthly_reach.min(headroom)
            } else {
                match params.saturation_policy {
                    SaturationPolicy::Uncapped => monthly_reach,
                    SaturationPolicy::NoEligibleUsers => Decimal::ZERO,
                }
            };

            cohorts.push(acquired);

            let churned = if month > params.retention_window_months {
                let cohort_index = (month - params.retention_window_months - 1) as usize;
                cohorts[cohort_index] * params.churn_rate
            } else {
                Decimal::ZERO
            };

            active = (active + acquired - churned).max(Decimal::ZERO);

            let revenue = active * params.price_per_period * periods_per_month
                * params.charging_success_rate
                / Decimal::ONE_HUNDRED;

            rows.push(ForecastRow {
                month,
                new_users: acquired,
                churned_users: churned,
                active_users: active,
                revenue,
            });
        }

        ForecastResult::from_rows(rows)
    }
}
