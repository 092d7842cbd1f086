//! Product Fixtures

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    incentives::{IncentiveType, SupportedIncentives},
    products::Product,
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product identifier -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Unit price
    pub price: Decimal,

    /// Unit-of-measure label
    #[serde(default)]
    pub uom: String,

    /// Incentive type tokens the product accepts
    #[serde(default)]
    pub supported_incentives: Vec<String>,
}

impl ProductFixture {
    /// Convert to a [`Product`] keyed by `identifier`.
    ///
    /// # Errors
    ///
    /// Returns an error if a supported-incentive token is unknown.
    pub fn try_into_product(self, identifier: String) -> Result<Product, FixtureError> {
        let mut supported = SupportedIncentives::empty();

        for token in &self.supported_incentives {
            supported.insert(token.parse::<IncentiveType>()?);
        }

        Ok(Product {
            identifier,
            price: self.price,
            uom: self.uom,
            supported_incentives: supported,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_a_product_entry() -> TestResult {
        let yaml = r#"
products:
  feed-25kg:
    price: "104.50"
    uom: 25kg bag
    supported_incentives:
      - fixed_cash_amount
      - amount_per_uom
"#;

        let mut fixture: ProductsFixture = serde_norway::from_str(yaml)?;

        let Some(entry) = fixture.products.remove("feed-25kg") else {
            panic!("missing product entry");
        };

        let product = entry.try_into_product("feed-25kg".to_string())?;

        assert_eq!(product.price, Decimal::new(10_450, 2));
        assert_eq!(product.uom, "25kg bag");
        assert!(
            product
                .supported_incentives
                .contains(IncentiveType::FixedCashAmount)
        );
        assert!(
            product
                .supported_incentives
                .contains(IncentiveType::AmountPerUom)
        );
        assert!(
            !product
                .supported_incentives
                .contains(IncentiveType::FixedRateRebate)
        );

        Ok(())
    }

    #[test]
    fn defaults_apply_to_omitted_fields() -> TestResult {
        let yaml = r#"
products:
  bare:
    price: "1"
"#;

        let mut fixture: ProductsFixture = serde_norway::from_str(yaml)?;

        let Some(entry) = fixture.products.remove("bare") else {
            panic!("missing product entry");
        };

        let product = entry.try_into_product("bare".to_string())?;

        assert!(product.uom.is_empty());
        assert!(product.supported_incentives.is_empty());

        Ok(())
    }

    #[test]
    fn unknown_incentive_token_is_rejected() {
        let fixture = ProductFixture {
            price: Decimal::from(1),
            uom: String::new(),
            supported_incentives: vec!["loyalty_points".to_string()],
        };

        let result = fixture.try_into_product("prod-1".to_string());

        assert!(matches!(result, Err(FixtureError::UnknownIncentive(_))));
    }
}
