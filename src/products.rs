//! Products

use rust_decimal::Decimal;

use crate::incentives::SupportedIncentives;

/// A product, as loaded from the product store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier the product store keys on.
    pub identifier: String,

    /// Unit price of the product.
    pub price: Decimal,

    /// Unit-of-measure label, descriptive only.
    pub uom: String,

    /// Incentive types this product accepts.
    pub supported_incentives: SupportedIncentives,
}
