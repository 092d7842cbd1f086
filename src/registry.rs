//! Rule Registry

use rustc_hash::FxHashMap;

use crate::{
    incentives::IncentiveType,
    rules::{
        IncentiveRule, amount_per_uom::AmountPerUomRule, fixed_cash_amount::FixedCashAmountRule,
        fixed_rate_rebate::FixedRateRebateRule,
    },
};

/// An immutable mapping from incentive type to the rule that handles it.
///
/// Built once at engine construction and never mutated afterwards. An
/// incentive type with no registered rule resolves to `None`; callers treat
/// that the same as a failed evaluation rather than an error, since the
/// incentive enum is closed over the built-in rules.
#[derive(Debug)]
pub struct RuleRegistry {
    rules: FxHashMap<IncentiveType, IncentiveRule>,
}

impl RuleRegistry {
    /// Build a registry from the given rules, each keyed by its incentive type.
    #[must_use]
    pub fn new(rules: impl IntoIterator<Item = IncentiveRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|rule| (rule.incentive(), rule))
                .collect(),
        }
    }

    /// The fixed table of the three built-in rules.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new([
            IncentiveRule::FixedCashAmount(FixedCashAmountRule),
            IncentiveRule::FixedRateRebate(FixedRateRebateRule),
            IncentiveRule::AmountPerUom(AmountPerUomRule),
        ])
    }

    /// Look up the rule registered for an incentive type.
    #[must_use]
    pub fn resolve(&self, incentive: IncentiveType) -> Option<&IncentiveRule> {
        self.rules.get(&incentive)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry has no rules at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
