//! Pure computation layer for the liquidity-pool dashboard.
//!
//! Two components, both side-effect-free and recomputed on demand from
//! caller-supplied data:
//!
//! - position PnL breakdown: decomposes total USD PnL into impermanent
//!   loss, fee revenue and price gain against the constant-product
//!   no-fee counterfactual ([`breakdown`]);
//! - fee-schedule evaluation: effective fee of fixed, scheduled and
//!   dynamic entries at a given instant, chart-ready stacked series, and
//!   conversion of editor drafts into the schema payload ([`schedule`],
//!   [`chart`], [`draft`]).

pub mod breakdown;
pub mod chart;
pub mod draft;
pub mod schedule;

pub use breakdown::{PositionBreakdown, compute_breakdown, fees_apy_percent};
pub use chart::{ChartPoint, stacked_chart_points};
pub use draft::{FeeDraft, ScheduleStart, draft_to_schema};
pub use schedule::{EvaluatedFee, FeeKind, evaluate_at, fraction_at, total_fee_percent_at};
