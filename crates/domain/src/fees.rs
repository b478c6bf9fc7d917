use crate::errors::ValidationError;
use crate::fraction::FeeFraction;
use serde::{Deserialize, Serialize};

/// Editor policy: total configured fee percentage must stay below this.
///
/// This is a UX guardrail checked before submission, not an invariant the
/// evaluator enforces.
pub const MAX_TOTAL_FEE_PERCENT: u32 = 50;

/// Where a fee entry's revenue is directed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeReceiver {
    Pool,
    Account(String),
}

/// One point of a linear fee schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePoint {
    pub timestamp_ns: u64,
    pub fraction: FeeFraction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleCurve {
    Linear,
}

/// A fee that moves from `start` to `end` over time.
///
/// Immutable once constructed; schedules are drafted in the editor,
/// serialized into the on-chain call payload and never stored elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    start: SchedulePoint,
    end: SchedulePoint,
    curve: ScheduleCurve,
}

impl FeeSchedule {
    /// Builds a linear schedule.
    ///
    /// The end point must not precede the start point, and the fee must
    /// strictly decrease over the schedule.
    pub fn new(start: SchedulePoint, end: SchedulePoint) -> Result<Self, ValidationError> {
        if end.timestamp_ns < start.timestamp_ns {
            return Err(ValidationError::NonPositiveDuration);
        }
        if end.fraction >= start.fraction {
            return Err(ValidationError::ScheduleNotDecreasing {
                start: start.fraction.0,
                end: end.fraction.0,
            });
        }
        Ok(Self {
            start,
            end,
            curve: ScheduleCurve::Linear,
        })
    }

    pub fn start(&self) -> SchedulePoint {
        self.start
    }

    pub fn end(&self) -> SchedulePoint {
        self.end
    }

    pub fn curve(&self) -> ScheduleCurve {
        self.curve
    }
}

/// Amount specification of a fee entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeAmount {
    /// Constant fee fraction.
    Fixed(FeeFraction),
    /// Fee interpolating linearly between two points in time.
    Scheduled(FeeSchedule),
    /// Fee bounded by pool state not visible to this layer.
    Dynamic { min: FeeFraction, max: FeeFraction },
}

/// One receiver's fee entry in a pool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfigEntry {
    pub receiver: FeeReceiver,
    pub amount: FeeAmount,
}

/// Ordered fee configuration of a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    pub entries: Vec<FeeConfigEntry>,
}

impl FeeConfig {
    #[must_use]
    pub fn new(entries: Vec<FeeConfigEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, receiver: FeeReceiver, amount: FeeAmount) {
        self.entries.push(FeeConfigEntry { receiver, amount });
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeeConfigEntry> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
