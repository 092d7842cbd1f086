//! Accrual prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    engine::{CalculateRebateRequest, CalculateRebateResult, RebateEngine},
    fixtures::{Fixture, FixtureError},
    incentives::{IncentiveType, SupportedIncentives, UnknownIncentiveError},
    products::Product,
    rebates::Rebate,
    registry::RuleRegistry,
    rules::{
        Evaluation, IncentiveRule, amount_per_uom::AmountPerUomRule,
        fixed_cash_amount::FixedCashAmountRule, fixed_rate_rebate::FixedRateRebateRule,
    },
    stores::{
        ProductStore, RebateStore, StoreError,
        memory::{MemoryProductStore, MemoryRebateStore, StoredCalculation},
    },
};
