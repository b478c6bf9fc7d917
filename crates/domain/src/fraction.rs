use crate::errors::ValidationError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Effective trading-fee rate stored as an integer on a 10,000 = 100% scale.
///
/// 1% is stored as 100; the smallest representable step is 0.01 percentage
/// points. This is the fixed-point representation used at the schema
/// boundary (the on-chain call payload).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct FeeFraction(pub u32);

impl FeeFraction {
    pub const ZERO: Self = Self(0);

    /// 10,000 stored units = 100%.
    pub const SCALE: u32 = 10_000;

    /// Converts a human percentage to the stored fixed-point form,
    /// rounding to the nearest representable step. Negative input maps
    /// to zero; input past the representable range saturates to the
    /// largest stored unit.
    pub fn from_percentage(percent: Decimal) -> Self {
        if percent <= Decimal::ZERO {
            return Self::ZERO;
        }
        let stored = match percent.checked_mul(Decimal::ONE_HUNDRED) {
            Some(value) => value.round().to_u32().unwrap_or(u32::MAX),
            None => u32::MAX,
        };
        Self(stored)
    }

    /// Parses a percentage string as entered in the fee editor.
    pub fn parse_percentage(input: &str) -> Result<Self, ValidationError> {
        let percent = Decimal::from_str(input.trim())
            .map_err(|_| ValidationError::InvalidPercentage(input.to_string()))?;
        Ok(Self::from_percentage(percent))
    }

    /// The human percentage this fraction represents.
    pub fn to_percentage(&self) -> Decimal {
        Decimal::from(self.0) / Decimal::ONE_HUNDRED
    }

    /// The rate as a plain fraction (1.0 = 100%).
    pub fn as_fraction(&self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(Self::SCALE)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}
