//! Position PnL decomposition.
//!
//! Splits a position's total USD PnL into impermanent loss, fee revenue
//! and price gain. The reference point is the constant-product no-fee
//! counterfactual: the holdings the AMM invariant implies at the new
//! price ratio if no fees had accrued.

use lp_analytics_domain::PositionSnapshot;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Nanoseconds in a 365.25-day year.
const NANOS_PER_YEAR: u64 = 31_557_600_000_000_000;

/// USD decomposition of a position's profit and loss.
///
/// In the non-degenerate case the three components sum exactly to
/// `total_pnl_usd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PositionBreakdown {
    /// Deposit value at open time.
    pub open_usd: Decimal,
    /// Value of the original deposit at current prices, had it been held.
    pub value_if_held_now_usd: Decimal,
    /// Value lost to the AMM's rebalancing as prices diverged.
    pub impermanent_loss_usd: Decimal,
    /// Residual between actual holdings and the no-fee counterfactual.
    pub fees_revenue_usd: Decimal,
    /// Remainder attributable to price appreciation of the held basket.
    pub price_gain_usd: Decimal,
    /// Current (or final) value minus open value.
    pub total_pnl_usd: Decimal,
}

impl PositionBreakdown {
    /// Component-wise sum, for totals rows over many positions.
    pub fn sum<'a>(items: impl IntoIterator<Item = &'a PositionBreakdown>) -> PositionBreakdown {
        items
            .into_iter()
            .fold(PositionBreakdown::default(), |acc, b| PositionBreakdown {
                open_usd: acc.open_usd + b.open_usd,
                value_if_held_now_usd: acc.value_if_held_now_usd + b.value_if_held_now_usd,
                impermanent_loss_usd: acc.impermanent_loss_usd + b.impermanent_loss_usd,
                fees_revenue_usd: acc.fees_revenue_usd + b.fees_revenue_usd,
                price_gain_usd: acc.price_gain_usd + b.price_gain_usd,
                total_pnl_usd: acc.total_pnl_usd + b.total_pnl_usd,
            })
    }
}

/// Computes the PnL breakdown of a position snapshot.
///
/// When the entry or exit amount ratio is degenerate (a zero amount, or a
/// non-positive ratio) the decomposition is not defined; the whole PnL is
/// then attributed to price movement and both impermanent loss and fee
/// revenue are reported as zero.
pub fn compute_breakdown(snapshot: &PositionSnapshot) -> PositionBreakdown {
    let open_usd = snapshot.open_value_usd();
    let value_if_held_now_usd = snapshot.value_if_held_usd();
    let total_pnl_usd = snapshot.close_value_usd() - open_usd;

    let undecomposed = || {
        debug!("degenerate amount ratio, attributing full PnL to price movement");
        PositionBreakdown {
            open_usd,
            value_if_held_now_usd,
            impermanent_loss_usd: Decimal::ZERO,
            fees_revenue_usd: Decimal::ZERO,
            price_gain_usd: total_pnl_usd,
            total_pnl_usd,
        }
    };

    // checked_div is None on both a zero denominator and Decimal overflow;
    // either way the ratio is unusable.
    let Some(entry_ratio) = snapshot.amount0_open.checked_div(snapshot.amount1_open) else {
        return undecomposed();
    };
    let Some(exit_ratio) = snapshot.amount0_close.checked_div(snapshot.amount1_close) else {
        return undecomposed();
    };
    if entry_ratio <= Decimal::ZERO || exit_ratio <= Decimal::ZERO {
        return undecomposed();
    }

    // k = sqrt(exit_ratio / entry_ratio). sqrt goes through f64, so the
    // round trip is validated before use.
    let Some(ratio) = exit_ratio.checked_div(entry_ratio) else {
        return undecomposed();
    };
    let Some(ratio_f64) = ratio.to_f64() else {
        return undecomposed();
    };
    if !ratio_f64.is_finite() || ratio_f64 <= 0.0 {
        return undecomposed();
    }
    let Some(k) = Decimal::from_f64(ratio_f64.sqrt()) else {
        return undecomposed();
    };
    if k <= Decimal::ZERO {
        return undecomposed();
    }

    // Holdings the constant-product invariant implies at the new price
    // ratio with zero fees collected.
    let Some(amount0_no_fee) = snapshot.amount0_open.checked_mul(k) else {
        return undecomposed();
    };
    let Some(amount1_no_fee) = snapshot.amount1_open.checked_div(k) else {
        return undecomposed();
    };

    let impermanent_loss_usd = (amount0_no_fee - snapshot.amount0_open) * snapshot.price0_now
        + (amount1_no_fee - snapshot.amount1_open) * snapshot.price1_now;
    let fees_revenue_usd = (snapshot.amount0_close - amount0_no_fee) * snapshot.price0_now
        + (snapshot.amount1_close - amount1_no_fee) * snapshot.price1_now;
    let price_gain_usd = total_pnl_usd - impermanent_loss_usd - fees_revenue_usd;

    PositionBreakdown {
        open_usd,
        value_if_held_now_usd,
        impermanent_loss_usd,
        fees_revenue_usd,
        price_gain_usd,
        total_pnl_usd,
    }
}

/// Annualized fee revenue as a percentage of the deposit.
///
/// Elapsed time runs from the open timestamp to the close timestamp, or to
/// `now_ns` for a still-open position. Returns `None` whenever the figure
/// is not displayable: missing timestamps, non-positive duration,
/// non-positive deposit, or a result outside `Decimal` range.
pub fn fees_apy_percent(
    snapshot: &PositionSnapshot,
    breakdown: &PositionBreakdown,
    now_ns: u64,
) -> Option<Decimal> {
    let opened_at_ns = snapshot.opened_at_ns?;
    let end_ns = snapshot.closed_at_ns.unwrap_or(now_ns);
    if end_ns <= opened_at_ns || breakdown.open_usd <= Decimal::ZERO {
        return None;
    }

    let years = Decimal::from(end_ns - opened_at_ns) / Decimal::from(NANOS_PER_YEAR);
    if years <= Decimal::ZERO {
        return None;
    }

    breakdown
        .fees_revenue_usd
        .checked_div(breakdown.open_usd)?
        .checked_div(years)?
        .checked_mul(Decimal::ONE_HUNDRED)
}
