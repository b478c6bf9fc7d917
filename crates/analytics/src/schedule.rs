//! Fee-schedule evaluation.
//!
//! Evaluates a pool's fee configuration at a point in time. Fractions are
//! on the 10,000 = 100% scale but come back as `Decimal` because a
//! schedule interpolates between integer points.

use lp_analytics_domain::{FeeAmount, FeeConfig, FeeReceiver, FeeSchedule};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which amount-spec variant produced an evaluated entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeKind {
    Fixed,
    Scheduled,
    Dynamic,
}

/// One receiver's effective fee at the evaluation instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedFee {
    pub receiver: FeeReceiver,
    pub kind: FeeKind,
    /// Effective fraction on the 10,000 scale.
    pub fraction: Decimal,
    /// Effective fee as a human percentage.
    pub percent: Decimal,
    /// `(start_ns, end_ns)` for scheduled entries.
    pub schedule_bounds: Option<(u64, u64)>,
}

fn schedule_fraction_at(schedule: &FeeSchedule, timestamp_ns: u64) -> Decimal {
    let start = schedule.start();
    let end = schedule.end();

    // Zero or negative duration: the schedule has fully played out.
    if end.timestamp_ns <= start.timestamp_ns {
        return Decimal::from(end.fraction.0);
    }
    if timestamp_ns <= start.timestamp_ns {
        return Decimal::from(start.fraction.0);
    }
    if timestamp_ns >= end.timestamp_ns {
        return Decimal::from(end.fraction.0);
    }

    let from = Decimal::from(start.fraction.0);
    let to = Decimal::from(end.fraction.0);
    let elapsed = Decimal::from(timestamp_ns - start.timestamp_ns);
    let span = Decimal::from(end.timestamp_ns - start.timestamp_ns);
    from + (to - from) * elapsed / span
}

/// Effective fraction of a single fee entry at `timestamp_ns`.
///
/// A dynamic fee depends on live pool state this layer cannot see; it is
/// deliberately approximated by its upper bound.
pub fn fraction_at(amount: &FeeAmount, timestamp_ns: u64) -> Decimal {
    match amount {
        FeeAmount::Fixed(fraction) => Decimal::from(fraction.0),
        FeeAmount::Dynamic { max, .. } => Decimal::from(max.0),
        FeeAmount::Scheduled(schedule) => schedule_fraction_at(schedule, timestamp_ns),
    }
}

/// Evaluates every entry of a fee configuration at `timestamp_ns`.
pub fn evaluate_at(config: &FeeConfig, timestamp_ns: u64) -> Vec<EvaluatedFee> {
    config
        .iter()
        .map(|entry| {
            let (kind, schedule_bounds) = match &entry.amount {
                FeeAmount::Fixed(_) => (FeeKind::Fixed, None),
                FeeAmount::Dynamic { .. } => (FeeKind::Dynamic, None),
                FeeAmount::Scheduled(schedule) => (
                    FeeKind::Scheduled,
                    Some((schedule.start().timestamp_ns, schedule.end().timestamp_ns)),
                ),
            };
            let fraction = fraction_at(&entry.amount, timestamp_ns);
            EvaluatedFee {
                receiver: entry.receiver.clone(),
                kind,
                fraction,
                percent: fraction / Decimal::ONE_HUNDRED,
                schedule_bounds,
            }
        })
        .collect()
}

/// Total effective fee percentage across all entries at `timestamp_ns`.
///
/// The editor compares this against
/// [`lp_analytics_domain::MAX_TOTAL_FEE_PERCENT`] before submission; the
/// evaluator itself never rejects a configuration.
pub fn total_fee_percent_at(config: &FeeConfig, timestamp_ns: u64) -> Decimal {
    config
        .iter()
        .map(|entry| fraction_at(&entry.amount, timestamp_ns))
        .sum::<Decimal>()
        / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_analytics_domain::{FeeFraction, SchedulePoint};
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
    fn test_schedule_boundaries_and_midpoint() {
        let amount = scheduled(1000, 500, 2000, 100);

        assert_eq!(fraction_at(&amount, 1000), dec!(500));
        assert_eq!(fraction_at(&amount, 2000), dec!(100));
        assert_eq!(fraction_at(&amount, 1500), dec!(300));
    }

    #[test]
    fn test_schedule_clamps_outside_bounds() {
        let amount = scheduled(1000, 500, 2000, 100);

        assert_eq!(fraction_at(&amount, 500), dec!(500));
        assert_eq!(fraction_at(&amount, 2500), dec!(100));
    }

    #[test]
    fn test_fixed_and_dynamic() {
        assert_eq!(fraction_at(&FeeAmount::Fixed(FeeFraction(30)), 0), dec!(30));

        // Dynamic evaluates conservatively to its upper bound.
        let dynamic = FeeAmount::Dynamic {
            min: FeeFraction(10),
            max: FeeFraction(80),
        };
        assert_eq!(fraction_at(&dynamic, 0), dec!(80));
    }

    #[test]
    fn test_evaluate_at_reports_kind_and_bounds() {
        let mut config = FeeConfig::default();
        config.push(FeeReceiver::Pool, scheduled(1000, 500, 2000, 100));
        config.push(
            FeeReceiver::Account("treasury".to_string()),
            FeeAmount::Fixed(FeeFraction(30)),
        );

        let evaluated = evaluate_at(&config, 1500);
        assert_eq!(evaluated.len(), 2);

        assert_eq!(evaluated[0].kind, FeeKind::Scheduled);
        assert_eq!(evaluated[0].fraction, dec!(300));
        assert_eq!(evaluated[0].percent, dec!(3));
        assert_eq!(evaluated[0].schedule_bounds, Some((1000, 2000)));

        assert_eq!(evaluated[1].kind, FeeKind::Fixed);
        assert_eq!(evaluated[1].percent, dec!(0.3));
        assert_eq!(evaluated[1].schedule_bounds, None);
    }

    #[test]
    fn test_total_fee_percent_against_policy() {
        use lp_analytics_domain::MAX_TOTAL_FEE_PERCENT;

        let mut config = FeeConfig::default();
        config.push(FeeReceiver::Pool, FeeAmount::Fixed(FeeFraction(300)));
        config.push(
            FeeReceiver::Account("treasury".to_string()),
            FeeAmount::Fixed(FeeFraction(100)),
        );

        let total = total_fee_percent_at(&config, 0);
        assert_eq!(total, dec!(4));
        assert!(total < Decimal::from(MAX_TOTAL_FEE_PERCENT));
    }
}
