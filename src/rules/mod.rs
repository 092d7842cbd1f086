//! Incentive Rules
//!
//! One calculation rule per incentive type. Each rule validates that the
//! product accepts the incentive and that the fields it prices with are
//! non-zero, then computes the rebate amount with its own arithmetic. All
//! validations are conjunctive: any failing condition rejects the
//! evaluation outright, with nothing to book.

use rust_decimal::Decimal;

use crate::{
    engine::CalculateRebateRequest,
    incentives::IncentiveType,
    products::Product,
    rebates::Rebate,
    rules::{
        amount_per_uom::AmountPerUomRule, fixed_cash_amount::FixedCashAmountRule,
        fixed_rate_rebate::FixedRateRebateRule,
    },
};

pub mod amount_per_uom;
pub mod fixed_cash_amount;
pub mod fixed_rate_rebate;

/// The outcome of evaluating an incentive rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Rebate amount to book. Zero whenever `success` is false.
    pub amount: Decimal,

    /// Whether the rebate qualified under the rule.
    pub success: bool,
}

impl Evaluation {
    /// A rejected evaluation: nothing to book.
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            amount: Decimal::ZERO,
            success: false,
        }
    }

    /// A successful evaluation booking the given amount.
    #[must_use]
    pub const fn succeeded(amount: Decimal) -> Self {
        Self {
            amount,
            success: true,
        }
    }
}

/// Incentive rule enum
#[derive(Debug, Clone, Copy)]
pub enum IncentiveRule {
    /// Flat cash amount rule
    FixedCashAmount(FixedCashAmountRule),

    /// Rate-times-price-times-volume rule
    FixedRateRebate(FixedRateRebateRule),

    /// Amount-per-unit-of-measure rule
    AmountPerUom(AmountPerUomRule),
}

impl IncentiveRule {
    /// Return the incentive type this rule handles.
    #[must_use]
    pub fn incentive(&self) -> IncentiveType {
        match self {
            IncentiveRule::FixedCashAmount(_) => IncentiveType::FixedCashAmount,
            IncentiveRule::FixedRateRebate(_) => IncentiveType::FixedRateRebate,
            IncentiveRule::AmountPerUom(_) => IncentiveType::AmountPerUom,
        }
    }

    /// Evaluate the rule for a rebate, product and calculation request.
    #[must_use]
    pub fn evaluate(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> Evaluation {
        match self {
            IncentiveRule::FixedCashAmount(rule) => rule.evaluate(rebate, product, request),
            IncentiveRule::FixedRateRebate(rule) => rule.evaluate(rebate, product, request),
            IncentiveRule::AmountPerUom(rule) => rule.evaluate(rebate, product, request),
        }
    }
}
