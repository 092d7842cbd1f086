//! Fixed Rate Rebate
//!
//! A rate rebate: the booked amount is price x rate x volume. The rebate's
//! percentage field is applied as a raw multiplier, never divided by 100.

use num_traits::Zero;

use crate::{
    engine::CalculateRebateRequest, incentives::IncentiveType, products::Product, rebates::Rebate,
    rules::Evaluation,
};

/// Rate-times-price-times-volume rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRateRebateRule;

impl FixedRateRebateRule {
    /// Evaluate the rebate as a rate on the product price over the volume.
    ///
    /// Qualifies when the product supports `FixedRateRebate` and the rebate
    /// percentage, product price and requested volume are all non-zero.
    #[must_use]
    pub fn evaluate(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculateRebateRequest,
    ) -> Evaluation {
        if !product
            .supported_incentives
            .contains(IncentiveType::FixedRateRebate)
            || rebate.percentage.is_zero()
            || product.price.is_zero()
            || request.volume.is_zero()
        {
            return Evaluation::failed();
        }

        Evaluation::succeeded(product.price * rebate.percentage * request.volume)
    }
}
