//! Rebate Engine
//!
//! Orchestrates one rebate calculation: look up the rebate and the product,
//! dispatch to the rule registered for the rebate's incentive type, and book
//! the computed amount back to the rebate store when and only when the
//! evaluation succeeds.

use rust_decimal::Decimal;

use crate::{
    registry::RuleRegistry,
    rules::Evaluation,
    stores::{ProductStore, RebateStore, StoreError},
};

/// One rebate calculation request, immutable for the duration of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculateRebateRequest {
    /// Identifier of the rebate to price.
    pub rebate_identifier: String,

    /// Identifier of the product the rebate is requested against.
    pub product_identifier: String,

    /// Requested volume, in the product's unit of measure.
    pub volume: Decimal,
}

impl CalculateRebateRequest {
    /// Create a calculation request.
    pub fn new(
        rebate_identifier: impl Into<String>,
        product_identifier: impl Into<String>,
        volume: Decimal,
    ) -> Self {
        Self {
            rebate_identifier: rebate_identifier.into(),
            product_identifier: product_identifier.into(),
            volume,
        }
    }
}

/// The caller-visible outcome of one calculation.
///
/// Carries only the success flag. The computed amount flows to the rebate
/// store's persistence call and is not reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculateRebateResult {
    /// Whether the rebate qualified and its amount was booked.
    pub success: bool,
}

impl CalculateRebateResult {
    /// A failed calculation.
    #[must_use]
    pub const fn failure() -> Self {
        Self { success: false }
    }
}

/// The rebate calculation engine.
///
/// Stateless across calls: the only construction-time state is the read-only
/// rule registry, so concurrent calculations need no coordination from the
/// engine. Thread safety of the store backends is the backends' concern.
#[derive(Debug)]
pub struct RebateEngine<R, P> {
    registry: RuleRegistry,
    rebate_store: R,
    product_store: P,
}

impl<R: RebateStore, P: ProductStore> RebateEngine<R, P> {
    /// Create an engine over the given stores, with the built-in rule table.
    pub fn new(rebate_store: R, product_store: P) -> Self {
        Self::with_registry(RuleRegistry::builtin(), rebate_store, product_store)
    }

    /// Create an engine with a custom rule registry.
    pub fn with_registry(registry: RuleRegistry, rebate_store: R, product_store: P) -> Self {
        Self {
            registry,
            rebate_store,
            product_store,
        }
    }

    /// The engine's rebate store.
    pub fn rebate_store(&self) -> &R {
        &self.rebate_store
    }

    /// The engine's product store.
    pub fn product_store(&self) -> &P {
        &self.product_store
    }

    /// Calculate the rebate amount for a request and book it on success.
    ///
    /// A missing rebate or product, an incentive type with no registered
    /// rule, and every rule-level rejection all yield a failed result; none
    /// of them is an error. The booking happens exactly once per call, and
    /// only when the evaluation succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when a store backend fails, for either
    /// lookup or for the booking itself.
    pub fn calculate(
        &self,
        request: &CalculateRebateRequest,
    ) -> Result<CalculateRebateResult, StoreError> {
        let Some(rebate) = self.rebate_store.find_rebate(&request.rebate_identifier)? else {
            return Ok(CalculateRebateResult::failure());
        };

        let Some(product) = self.product_store.find_product(&request.product_identifier)? else {
            return Ok(CalculateRebateResult::failure());
        };

        let evaluation = match self.registry.resolve(rebate.incentive) {
            Some(rule) => rule.evaluate(&rebate, &product, request),
            None => Evaluation::failed(),
        };

        if evaluation.success {
            self.rebate_store
                .store_calculation_result(&rebate, evaluation.amount)?;
        }

        Ok(CalculateRebateResult {
            success: evaluation.success,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        incentives::{IncentiveType, SupportedIncentives},
        products::Product,
        rebates::Rebate,
        stores::memory::{MemoryProductStore, MemoryRebateStore},
    };

    use super::*;

    fn seeded_stores() -> (MemoryRebateStore, MemoryProductStore) {
        let rebates = MemoryRebateStore::with_rebates([Rebate {
            identifier: "reb-1".to_string(),
            incentive: IncentiveType::FixedCashAmount,
            amount: Decimal::from(100),
            percentage: Decimal::ZERO,
        }]);

        let products = MemoryProductStore::with_products([Product {
            identifier: "prod-1".to_string(),
            price: Decimal::from(100),
            uom: "each".to_string(),
            supported_incentives: SupportedIncentives::from_slice(&[
                IncentiveType::FixedCashAmount,
            ]),
        }]);

        (rebates, products)
    }

    #[test]
    fn unregistered_incentive_fails_without_booking() -> TestResult {
        let (rebates, products) = seeded_stores();
        let engine = RebateEngine::with_registry(RuleRegistry::new([]), rebates, products);

        let result = engine.calculate(&CalculateRebateRequest::new(
            "reb-1",
            "prod-1",
            Decimal::from(100),
        ))?;

        assert!(!result.success);
        assert!(engine.rebate_store().stored().is_empty());

        Ok(())
    }

    #[test]
    fn lent_stores_remain_inspectable_after_construction() -> TestResult {
        let (rebates, products) = seeded_stores();
        let engine = RebateEngine::new(&rebates, &products);

        let result = engine.calculate(&CalculateRebateRequest::new(
            "reb-1",
            "prod-1",
            Decimal::from(100),
        ))?;

        assert!(result.success);
        assert_eq!(rebates.stored().len(), 1);

        Ok(())
    }
}
