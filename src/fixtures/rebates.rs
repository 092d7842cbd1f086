//! Rebate Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{fixtures::FixtureError, incentives::IncentiveType, rebates::Rebate};

/// Wrapper for rebates in YAML
#[derive(Debug, Deserialize)]
pub struct RebatesFixture {
    /// Map of rebate identifier -> rebate fixture
    pub rebates: FxHashMap<String, RebateFixture>,
}

/// Rebate fixture from YAML
#[derive(Debug, Deserialize)]
pub struct RebateFixture {
    /// Incentive type token
    pub incentive: String,

    /// Cash amount, flat or per unit depending on the incentive
    #[serde(default)]
    pub amount: Decimal,

    /// Rate, applied as a raw multiplier
    #[serde(default)]
    pub percentage: Decimal,
}

impl RebateFixture {
    /// Convert to a [`Rebate`] keyed by `identifier`.
    ///
    /// # Errors
    ///
    /// Returns an error if the incentive token is unknown.
    pub fn try_into_rebate(self, identifier: String) -> Result<Rebate, FixtureError> {
        Ok(Rebate {
            identifier,
            incentive: self.incentive.parse::<IncentiveType>()?,
            amount: self.amount,
            percentage: self.percentage,
        })
    }
}
