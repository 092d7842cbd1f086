//! Amount Per UOM
//!
//! A per-unit rebate: the booked amount is the rebate amount for every unit
//! of measure in the requested volume.

use num_traits::Zero;

use crate::{
    engine::CalculateRebateRequest, incentives::IncentiveType, products::Product, rebates::Rebate,
    rules::Evaluation,
};

/// Amount-per-unit-of-measure rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountPerUomRule;

impl AmountPerUomRule {
    /// Evaluate the rebate as an amount per unit of the requested volume.
    ///
    /// Qualifies when the product supports `AmountPerUom` and both the
    /// rebate amount and the requested volume are non-zero. The product
    /// price is not consulted.
    #[must_use]
    pub fn evaluate(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> Evaluation {
        if !product
            .supported_incentives
            .contains(IncentiveType::AmountPerUom)
            || rebate.amount.is_zero()
            || request.volume.is_zero()
        {
            return Evaluation::failed();
        }

        Evaluation::succeeded(rebate.amount * request.volume)
    }
}
