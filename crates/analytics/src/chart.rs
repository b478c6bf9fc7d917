//! Stacked fee-chart series.

use crate::schedule::fraction_at;
use lp_analytics_domain::{FeeAmount, FeeConfig, FeeReceiver};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of the stacked fee chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp_ns: u64,
    /// Sum of every included entry's effective fee, as a percentage.
    pub fee_percent: Decimal,
}

/// Builds the time series backing the stacked fee chart.
///
/// Sample instants are the union of all included scheduled entries'
/// start and end timestamps, deduplicated and sorted ascending. At each
/// instant the value is the summed effective percentage of every included
/// entry; fixed and dynamic entries contribute their constant value at
/// every point. With nothing scheduled there is nothing to animate and
/// the series is empty.
pub fn stacked_chart_points(
    config: &FeeConfig,
    filter: Option<&dyn Fn(&FeeReceiver) -> bool>,
) -> Vec<ChartPoint> {
    let included: Vec<_> = config
        .iter()
        .filter(|entry| filter.is_none_or(|keep| keep(&entry.receiver)))
        .collect();

    let mut timestamps: Vec<u64> = included
        .iter()
        .filter_map(|entry| match &entry.amount {
            FeeAmount::Scheduled(schedule) => {
                Some([schedule.start().timestamp_ns, schedule.end().timestamp_ns])
            }
            _ => None,
        })
        .flatten()
        .collect();
    if timestamps.is_empty() {
        return Vec::new();
    }
    timestamps.sort_unstable();
    timestamps.dedup();

    timestamps
        .into_iter()
        .map(|timestamp_ns| {
            let total: Decimal = included
                .iter()
                .map(|entry| fraction_at(&entry.amount, timestamp_ns))
                .sum();
            ChartPoint {
                timestamp_ns,
                fee_percent: total / Decimal::ONE_HUNDRED,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_analytics_domain::{FeeFraction, FeeSchedule, SchedulePoint};
    use rust_decimal_macros::dec;

    fn scheduled(start_ns: u64, start: u32, end_ns: u64, end: u32) -> FeeAmount {
        FeeAmount::Scheduled(
            FeeSchedule::new(
                SchedulePoint {
                    timestamp_ns: start_ns,
                    fraction: FeeFraction(start),
                },
                SchedulePoint {
                    timestamp_ns: end_ns,
                    fraction: FeeFraction(end),
                },
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_overlapping_schedules_union_timestamps() {
        let mut config = FeeConfig::default();
        config.push(FeeReceiver::Pool, scheduled(100, 400, 200, 200));
        config.push(
            FeeReceiver::Account("treasury".to_string()),
            scheduled(150, 300, 250, 100),
        );

        let points = stacked_chart_points(&config, None);
        let stamps: Vec<u64> = points.iter().map(|p| p.timestamp_ns).collect();
        assert_eq!(stamps, vec![100, 150, 200, 250]);

        // Each value is the sum of both entries evaluated at that instant.
        assert_eq!(points[0].fee_percent, dec!(7)); // 400 + clamped 300
        assert_eq!(points[1].fee_percent, dec!(6)); // midpoint 300 + 300
        assert_eq!(points[2].fee_percent, dec!(4)); // 200 + midpoint 200
        assert_eq!(points[3].fee_percent, dec!(3)); // clamped 200 + 100
    }

    #[test]
    fn test_fixed_entries_contribute_everywhere() {
        let mut config = FeeConfig::default();
        config.push(FeeReceiver::Pool, scheduled(100, 400, 200, 200));
        config.push(
            FeeReceiver::Account("treasury".to_string()),
            FeeAmount::Fixed(FeeFraction(100)),
        );

        let points = stacked_chart_points(&config, None);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].fee_percent, dec!(5));
        assert_eq!(points[1].fee_percent, dec!(3));
    }

    #[test]
    fn test_no_schedules_means_empty_series() {
        let mut config = FeeConfig::default();
        config.push(FeeReceiver::Pool, FeeAmount::Fixed(FeeFraction(30)));

        assert!(stacked_chart_points(&config, None).is_empty());
    }

    #[test]
    fn test_receiver_filter() {
        let mut config = FeeConfig::default();
        config.push(FeeReceiver::Pool, scheduled(100, 400, 200, 200));
        config.push(
            FeeReceiver::Account("treasury".to_string()),
            scheduled(150, 300, 250, 100),
        );

        let pool_only = |receiver: &FeeReceiver| *receiver == FeeReceiver::Pool;
        let points = stacked_chart_points(&config, Some(&pool_only));

        let stamps: Vec<u64> = points.iter().map(|p| p.timestamp_ns).collect();
        assert_eq!(stamps, vec![100, 200]);
        assert_eq!(points[0].fee_percent, dec!(4));
        assert_eq!(points[1].fee_percent, dec!(2));
    }
}
