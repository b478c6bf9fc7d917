use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Amounts and USD prices of a liquidity position at open and at
/// close (or "now" for a still-open position).
///
/// Pure data supplied by the positions source on every evaluation; the
/// analytics layer owns no position identity or lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PositionSnapshot {
    pub amount0_open: Decimal,
    pub amount1_open: Decimal,
    pub amount0_close: Decimal,
    pub amount1_close: Decimal,

    pub price0_open: Decimal,
    pub price1_open: Decimal,
    pub price0_now: Decimal,
    pub price1_now: Decimal,

    /// When the position was opened, in nanoseconds. Needed for APY only.
    pub opened_at_ns: Option<u64>,
    /// When the position was closed, in nanoseconds. `None` while open.
    pub closed_at_ns: Option<u64>,
}

impl PositionSnapshot {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        amount0_open: Decimal,
        amount1_open: Decimal,
        amount0_close: Decimal,
        amount1_close: Decimal,
        price0_open: Decimal,
        price1_open: Decimal,
        price0_now: Decimal,
        price1_now: Decimal,
    ) -> Self {
        Self {
            amount0_open,
            amount1_open,
            amount0_close,
            amount1_close,
            price0_open,
            price1_open,
            price0_now,
            price1_now,
            opened_at_ns: None,
            closed_at_ns: None,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self, opened_at_ns: u64, closed_at_ns: Option<u64>) -> Self {
        self.opened_at_ns = Some(opened_at_ns);
        self.closed_at_ns = closed_at_ns;
        self
    }

    /// USD value of the deposit at open time.
    pub fn open_value_usd(&self) -> Decimal {
        self.amount0_open * self.price0_open + self.amount1_open * self.price1_open
    }

    /// USD value of the current (or final) holdings at current prices.
    pub fn close_value_usd(&self) -> Decimal {
        self.amount0_close * self.price0_now + self.amount1_close * self.price1_now
    }

    /// USD value the original deposit would have at current prices had it
    /// simply been held instead of provided as liquidity.
    pub fn value_if_held_usd(&self) -> Decimal {
        self.amount0_open * self.price0_now + self.amount1_open * self.price1_now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_usd_values() {
        let snapshot = PositionSnapshot::new(
            dec!(10),
            dec!(1000),
            dec!(9),
            dec!(1210),
            dec!(100),
            dec!(1),
            dec!(120),
            dec!(1),
        );

        assert_eq!(snapshot.open_value_usd(), dec!(2000));
        assert_eq!(snapshot.close_value_usd(), dec!(2290));
        assert_eq!(snapshot.value_if_held_usd(), dec!(2200));
    }
}
