//! Property-based tests for the forecast engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::engine::ForecastEngine;
use super::types::{BillingFrequency, ForecastParameters, SaturationPolicy};

prop_compose! {
    /// Any valid parameter set: rates in range, counts bounded for speed.
    fn arb_params()(
        subscriber_base in 0u64..2_000_000,
        daily_promotional_bandwidth in 0u64..2_000_000,
        opt_in_bps in 0u32..=10_000,
        charging_bps in 0u32..=10_000,
        price_cents in 0i64..100_000,
        churn_bps in 0u32..=10_000,
        retention_window_months in 0u32..=15,
        frequency in prop_oneof![
            Just(BillingFrequency::Daily),
            Just(BillingFrequency::Weekly),
            Just(BillingFrequency::Monthly),
        ],
        policy in prop_oneof![
            Just(SaturationPolicy::Uncapped),
            Just(SaturationPolicy::NoEligibleUsers),
        ],
    ) -> ForecastParameters {
        ForecastParameters {
            subscriber_base,
            daily_promotional_bandwidth,
            opt_in_rate: Decimal::new(i64::from(opt_in_bps), 2),
            charging_success_rate: Decimal::new(i64::from(charging_bps), 2),
            price_per_period: Decimal::new(price_cents, 2),
            churn_rate: Decimal::new(i64::from(churn_bps), 4),
            retention_window_months,
            billing_frequency: frequency,
            saturation_policy: policy,
        }
    }
}

proptest! {
    /// Exactly 12 rows with months 1..=12 in strictly increasing order.
    #[test]
    fn prop_twelve_ordered_rows(params in arb_params()) {
        prop_assert!(params.validate().is_ok());
        let result = ForecastEngine::run(&params);

        prop_assert_eq!(result.rows.len(), 12);
        for (i, row) in result.rows.iter().enumerate() {
            prop_assert_eq!(row.month, u32::try_from(i).unwrap() + 1);
        }
    }

    /// Active users never go negative, and never exceed a positive base.
    #[test]
    fn prop_active_users_bounded(params in arb_params()) {
        let result = ForecastEngine::run(&params);

        for row in &result.rows {
            prop_assert!(row.active_users >= Decimal::ZERO);
            if params.subscriber_base > 0 {
                prop_assert!(
                    row.active_users <= Decimal::from(params.subscriber_base),
                    "month {} active {} exceeds base {}",
                    row.month, row.active_users, params.subscriber_base
                );
            }
        }
    }

    /// No churn inside the retention window.
    #[test]
    fn prop_no_churn_inside_window(params in arb_params()) {
        let result = ForecastEngine::run(&params);

        for row in &result.rows {
            if row.month <= params.retention_window_months {
                prop_assert_eq!(row.churned_users, Decimal::ZERO);
            }
        }
    }

    /// Pure function: identical parameters give identical row sequences.
    #[test]
    fn prop_idempotent(params in arb_params()) {
        prop_assert_eq!(ForecastEngine::run(&params), ForecastEngine::run(&params));
    }

    /// Zero charging success means zero revenue in every month.
    #[test]
    fn prop_zero_charging_zero_revenue(params in arb_params()) {
        let params = ForecastParameters {
            charging_success_rate: Decimal::ZERO,
            ..params
        };
        let result = ForecastEngine::run(&params);
        for row in &result.rows {
            prop_assert_eq!(row.revenue, Decimal::ZERO);
        }
    }
}
