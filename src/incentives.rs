//! Incentive Types
//!
//! The closed set of rebate calculation modes, and the per-product set of
//! incentive types a product accepts.

use std::{fmt, str::FromStr};

use smallvec::SmallVec;
use thiserror::Error;

/// A rebate's calculation mode. Each rebate carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IncentiveType {
    /// A fixed cash amount, independent of price and volume.
    FixedCashAmount,

    /// A rate applied to the product price for the requested volume.
    FixedRateRebate,

    /// A fixed amount per unit of measure of the requested volume.
    AmountPerUom,
}

impl IncentiveType {
    /// Every incentive type, in declaration order.
    pub const ALL: [IncentiveType; 3] = [
        IncentiveType::FixedCashAmount,
        IncentiveType::FixedRateRebate,
        IncentiveType::AmountPerUom,
    ];

    /// The snake_case token used in fixtures and on the command line.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            IncentiveType::FixedCashAmount => "fixed_cash_amount",
            IncentiveType::FixedRateRebate => "fixed_rate_rebate",
            IncentiveType::AmountPerUom => "amount_per_uom",
        }
    }
}

impl fmt::Display for IncentiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when parsing an incentive type from an unknown token.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown incentive type: {0}")]
pub struct UnknownIncentiveError(pub String);

impl FromStr for IncentiveType {
    type Err = UnknownIncentiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IncentiveType::ALL
            .into_iter()
            .find(|incentive| incentive.token() == s)
            .ok_or_else(|| UnknownIncentiveError(s.to_string()))
    }
}

/// The set of incentive types a product accepts.
///
/// A product may support zero, one, or several incentive types at once;
/// membership of one type is independent of any other types present. Kept
/// sorted and deduplicated so membership is a binary search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupportedIncentives {
    incentives: SmallVec<[IncentiveType; 3]>,
}

impl SupportedIncentives {
    /// Create a set from the given incentive types.
    #[must_use]
    pub fn new(incentives: SmallVec<[IncentiveType; 3]>) -> Self {
        let mut set = Self { incentives };

        set.incentives.sort();
        set.incentives.dedup();

        set
    }

    /// Create a set from a slice of incentive types.
    #[must_use]
    pub fn from_slice(incentives: &[IncentiveType]) -> Self {
        Self::new(incentives.iter().copied().collect())
    }

    /// Create an empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            incentives: SmallVec::new(),
        }
    }

    /// Whether the set contains the given incentive type.
    #[must_use]
    pub fn contains(&self, incentive: IncentiveType) -> bool {
        self.incentives.binary_search(&incentive).is_ok()
    }

    /// Add an incentive type to the set.
    pub fn insert(&mut self, incentive: IncentiveType) {
        if let Err(pos) = self.incentives.binary_search(&incentive) {
            self.incentives.insert(pos, incentive);
        }
    }

    /// Remove an incentive type from the set.
    pub fn remove(&mut self, incentive: IncentiveType) {
        if let Ok(pos) = self.incentives.binary_search(&incentive) {
            self.incentives.remove(pos);
        }
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incentives.is_empty()
    }

    /// Number of incentive types in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.incentives.len()
    }

    /// Iterate over the incentive types in the set, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = IncentiveType> + '_ {
        self.incentives.iter().copied()
    }
}
