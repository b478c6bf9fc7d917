//! Domain model for DEX liquidity-pool analytics.
//!
//! Pure data types shared by the analytics layer:
//! - position snapshots (amounts and USD prices at open and at close/now)
//! - fee configuration (fixed, scheduled and dynamic fee entries per receiver)
//! - the fee-fraction value object on the 10,000 = 100% scale
//! - validation errors raised at the editor/schema boundary

pub mod errors;
pub mod fees;
pub mod fraction;
pub mod position;

pub use errors::ValidationError;
pub use fees::{
    FeeAmount, FeeConfig, FeeConfigEntry, FeeReceiver, FeeSchedule, MAX_TOTAL_FEE_PERCENT,
    ScheduleCurve, SchedulePoint,
};
pub use fraction::FeeFraction;
pub use position::PositionSnapshot;
