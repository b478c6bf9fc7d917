use thiserror::Error;

/// Errors raised while validating fee drafts and schedules.
///
/// These are surfaced to the caller (the fee editor), which is expected to
/// present them to the user and block submission. Degenerate numeric inputs
/// elsewhere in the crate fall back silently instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A percentage string could not be parsed as a decimal number.
    #[error("invalid percentage: {0:?}")]
    InvalidPercentage(String),

    /// A scheduled fee must strictly decrease from start to end.
    #[error("schedule must decrease: start fraction {start} <= end fraction {end}")]
    ScheduleNotDecreasing { start: u32, end: u32 },

    /// A scheduled fee must run for a positive duration.
    #[error("schedule duration must be positive")]
    NonPositiveDuration,

    /// The schedule start time could not be parsed.
    #[error("unparseable schedule start time: {0:?}")]
    UnparseableStart(String),
}
