//! Conversion of fee-editor drafts into the schema payload.
//!
//! The editor works in human terms: percentage strings, a duration in
//! hours and minutes, a "start now" toggle. The on-chain call payload
//! wants [`FeeAmount`] values on the fixed-point scale with nanosecond
//! timestamps.

use chrono::{DateTime, Duration};
use lp_analytics_domain::{FeeAmount, FeeFraction, FeeSchedule, SchedulePoint, ValidationError};
use tracing::debug;

/// When a drafted schedule takes effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleStart {
    /// At submission time.
    Now,
    /// At an RFC 3339 instant.
    At(String),
}

/// A fee entry as drafted in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeeDraft {
    Fixed {
        percentage: String,
    },
    Scheduled {
        start_percentage: String,
        end_percentage: String,
        duration_hours: u32,
        duration_minutes: u32,
        start: ScheduleStart,
    },
}

fn start_timestamp_ns(start: &ScheduleStart, now_ns: u64) -> Result<u64, ValidationError> {
    match start {
        ScheduleStart::Now => Ok(now_ns),
        ScheduleStart::At(input) => {
            let parsed = DateTime::parse_from_rfc3339(input)
                .map_err(|_| ValidationError::UnparseableStart(input.clone()))?;
            let nanos = parsed
                .timestamp_nanos_opt()
                .ok_or_else(|| ValidationError::UnparseableStart(input.clone()))?;
            u64::try_from(nanos).map_err(|_| ValidationError::UnparseableStart(input.clone()))
        }
    }
}

/// Converts a draft into its schema form.
///
/// A fixed draft whose computed fraction is zero (including negative
/// input, which parses to zero) yields `Ok(None)`: the entry is omitted
/// from the serialized receiver list rather than stored as a no-op. A
/// scheduled draft is rejected unless the fee strictly decreases over a
/// positive duration starting at a parseable instant.
pub fn draft_to_schema(draft: &FeeDraft, now_ns: u64) -> Result<Option<FeeAmount>, ValidationError> {
    match draft {
        FeeDraft::Fixed { percentage } => {
            let fraction = FeeFraction::parse_percentage(percentage)?;
            if fraction.is_zero() {
                debug!(%percentage, "omitting zero fixed fee entry");
                return Ok(None);
            }
            Ok(Some(FeeAmount::Fixed(fraction)))
        }
        FeeDraft::Scheduled {
            start_percentage,
            end_percentage,
            duration_hours,
            duration_minutes,
            start,
        } => {
            let start_fraction = FeeFraction::parse_percentage(start_percentage)?;
            let end_fraction = FeeFraction::parse_percentage(end_percentage)?;
            if end_fraction >= start_fraction {
                return Err(ValidationError::ScheduleNotDecreasing {
                    start: start_fraction.0,
                    end: end_fraction.0,
                });
            }

            let duration = Duration::hours(i64::from(*duration_hours))
                + Duration::minutes(i64::from(*duration_minutes));
            if duration <= Duration::zero() {
                return Err(ValidationError::NonPositiveDuration);
            }
            // Durations past the representable nanosecond range are junk
            // input and rejected the same way.
            let duration_ns = duration
                .num_nanoseconds()
                .ok_or(ValidationError::NonPositiveDuration)?;

            let start_ns = start_timestamp_ns(start, now_ns)?;
            let end_ns = start_ns.saturating_add(duration_ns as u64);

            let schedule = FeeSchedule::new(
                SchedulePoint {
                    timestamp_ns: start_ns,
                    fraction: start_fraction,
                },
                SchedulePoint {
                    timestamp_ns: end_ns,
                    fraction: end_fraction,
                },
            )?;
            Ok(Some(FeeAmount::Scheduled(schedule)))
        }
    }
}
