//! Fixtures
//!
//! Named YAML fixture sets that seed the in-memory stores. A set `name`
//! consists of `products/<name>.yml` and `rebates/<name>.yml` under the
//! fixture base path.

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::{
    engine::RebateEngine,
    incentives::UnknownIncentiveError,
    products::Product,
    rebates::Rebate,
    stores::{
        ProductStore, RebateStore, StoreError,
        memory::{MemoryProductStore, MemoryRebateStore},
    },
};

pub mod products;
pub mod rebates;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown incentive type token
    #[error(transparent)]
    UnknownIncentive(#[from] UnknownIncentiveError),

    /// Rebate not found in the loaded set
    #[error("rebate not found: {0}")]
    RebateNotFound(String),

    /// Product not found in the loaded set
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Store fault surfaced while reading through the fixture
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A loaded fixture set: seeded stores plus the path they came from.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Rebate store seeded from the set
    rebates: MemoryRebateStore,

    /// Product store seeded from the set
    products: MemoryProductStore,
}

impl Fixture {
    /// Create a new empty fixture with the default `fixtures` base path.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("fixtures")
    }

    /// Create a new empty fixture with a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            rebates: MemoryRebateStore::new(),
            products: MemoryProductStore::new(),
        }
    }

    /// Load products from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// product lists an unknown incentive token.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: products::ProductsFixture = serde_norway::from_str(&contents)?;

        for (key, product_fixture) in fixture.products {
            self.products.insert(product_fixture.try_into_product(key)?);
        }

        Ok(self)
    }

    /// Load rebates from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// rebate names an unknown incentive token.
    pub fn load_rebates(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("rebates").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: rebates::RebatesFixture = serde_norway::from_str(&contents)?;

        for (key, rebate_fixture) in fixture.rebates {
            self.rebates.insert(rebate_fixture.try_into_rebate(key)?);
        }

        Ok(self)
    }

    /// Load a complete fixture set (products and rebates with the same name).
    ///
    /// # Errors
    ///
    /// Returns an error if either fixture file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_rebates(name)?;

        Ok(fixture)
    }

    /// Get a rebate from the loaded set by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the rebate is not in the set.
    pub fn rebate(&self, identifier: &str) -> Result<Rebate, FixtureError> {
        self.rebates
            .find_rebate(identifier)?
            .ok_or_else(|| FixtureError::RebateNotFound(identifier.to_string()))
    }

    /// Get a product from the loaded set by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not in the set.
    pub fn product(&self, identifier: &str) -> Result<Product, FixtureError> {
        self.products
            .find_product(identifier)?
            .ok_or_else(|| FixtureError::ProductNotFound(identifier.to_string()))
    }

    /// The seeded rebate store.
    #[must_use]
    pub fn rebate_store(&self) -> &MemoryRebateStore {
        &self.rebates
    }

    /// The seeded product store.
    #[must_use]
    pub fn product_store(&self) -> &MemoryProductStore {
        &self.products
    }

    /// Build an engine borrowing both seeded stores.
    #[must_use]
    pub fn engine(&self) -> RebateEngine<&MemoryRebateStore, &MemoryProductStore> {
        RebateEngine::new(&self.rebates, &self.products)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::incentives::IncentiveType;

    use super::*;

    fn write_set(dir: &std::path::Path) -> TestResult {
        fs::create_dir_all(dir.join("products"))?;
        fs::create_dir_all(dir.join("rebates"))?;

        let mut products = fs::File::create(dir.join("products").join("basic.yml"))?;
        writeln!(
            products,
            "products:\n  feed-25kg:\n    price: \"104.50\"\n    uom: 25kg bag\n    supported_incentives:\n      - fixed_cash_amount"
        )?;

        let mut rebates = fs::File::create(dir.join("rebates").join("basic.yml"))?;
        writeln!(
            rebates,
            "rebates:\n  spring-cashback:\n    incentive: fixed_cash_amount\n    amount: \"120\""
        )?;

        Ok(())
    }

    #[test]
    fn from_set_layout_seeds_both_stores() -> TestResult {
        let dir = tempfile::tempdir()?;
        write_set(dir.path())?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_products("basic")?.load_rebates("basic")?;

        let product = fixture.product("feed-25kg")?;

        assert_eq!(product.price, Decimal::new(10_450, 2));
        assert_eq!(product.uom, "25kg bag");
        assert!(
            product
                .supported_incentives
                .contains(IncentiveType::FixedCashAmount)
        );

        let rebate = fixture.rebate("spring-cashback")?;

        assert_eq!(rebate.incentive, IncentiveType::FixedCashAmount);
        assert_eq!(rebate.amount, Decimal::from(120));

        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut fixture = Fixture::with_base_path("no-such-dir");

        let result = fixture.load_products("basic");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn unknown_entry_is_not_found() -> TestResult {
        let dir = tempfile::tempdir()?;
        write_set(dir.path())?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_products("basic")?.load_rebates("basic")?;

        assert!(matches!(
            fixture.rebate("no-such-rebate"),
            Err(FixtureError::RebateNotFound(_))
        ));
        assert!(matches!(
            fixture.product("no-such-product"),
            Err(FixtureError::ProductNotFound(_))
        ));

        Ok(())
    }
}
