//! Rebates

use rust_decimal::Decimal;

use crate::incentives::IncentiveType;

/// A rebate, as loaded from the rebate store.
///
/// Treated as an immutable snapshot for the duration of one calculation.
/// `amount` and `percentage` are interpreted by whichever incentive rule the
/// rebate's incentive type selects; a rule reads the field it needs and
/// ignores the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rebate {
    /// Unique identifier the rebate store keys on.
    pub identifier: String,

    /// The calculation mode for this rebate.
    pub incentive: IncentiveType,

    /// Cash amount, either flat or per unit of measure.
    pub amount: Decimal,

    /// Rate applied as a raw multiplier, never divided by 100.
    pub percentage: Decimal,
}
