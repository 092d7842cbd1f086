//! Fixed Cash Amount
//!
//! A flat cash rebate: the booked amount is the rebate amount itself,
//! regardless of product price or requested volume.

use num_traits::Zero;

use crate::{
    engine::CalculateRebateRequest, incentives::IncentiveType, products::Product, rebates::Rebate,
    rules::Evaluation,
};

/// Flat cash amount rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCashAmountRule;

impl FixedCashAmountRule {
    /// Evaluate the rebate as a flat cash amount.
    ///
    /// Qualifies when the product supports `FixedCashAmount` and the rebate
    /// amount is non-zero. Price and volume play no part.
    #[must_use]
    pub fn evaluate(
        &self,
        rebate: &Rebate,
        product: &Product,
        _request: &CalculateRebateRequest,
    ) -> Evaluation {
        if !product
            .supported_incentives
            .contains(IncentiveType::FixedCashAmount)
            || rebate.amount.is_zero()
        {
            return Evaluation::failed();
        }

        Evaluation::succeeded(rebate.amount)
    }
}
