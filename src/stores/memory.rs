//! In-memory Stores
//!
//! Hash-map-backed store implementations for demos and tests. The rebate
//! store records every booked calculation, so callers can inspect exactly
//! what was persisted and how many times.

use std::cell::RefCell;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::{
    products::Product,
    rebates::Rebate,
    stores::{ProductStore, RebateStore, StoreError},
};

/// A calculation booked against a rebate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCalculation {
    /// The rebate the amount was booked against.
    pub rebate: Rebate,

    /// The booked amount.
    pub amount: Decimal,
}

/// In-memory rebate store, recording every booked calculation.
#[derive(Debug, Default)]
pub struct MemoryRebateStore {
    rebates: FxHashMap<String, Rebate>,
    stored: RefCell<Vec<StoredCalculation>>,
}

impl MemoryRebateStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given rebates.
    #[must_use]
    pub fn with_rebates(rebates: impl IntoIterator<Item = Rebate>) -> Self {
        let mut store = Self::new();

        for rebate in rebates {
            store.insert(rebate);
        }

        store
    }

    /// Seed a rebate, replacing any existing rebate with the same identifier.
    pub fn insert(&mut self, rebate: Rebate) {
        self.rebates.insert(rebate.identifier.clone(), rebate);
    }

    /// The calculations booked so far, in booking order.
    #[must_use]
    pub fn stored(&self) -> Vec<StoredCalculation> {
        self.stored.borrow().clone()
    }
}

impl RebateStore for MemoryRebateStore {
    fn find_rebate(&self, identifier: &str) -> Result<Option<Rebate>, StoreError> {
        Ok(self.rebates.get(identifier).cloned())
    }

    fn store_calculation_result(&self, rebate: &Rebate, amount: Decimal) -> Result<(), StoreError> {
        self.stored.borrow_mut().push(StoredCalculation {
            rebate: rebate.clone(),
            amount,
        });

        Ok(())
    }
}

/// In-memory product store.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    products: FxHashMap<String, Product>,
}

impl MemoryProductStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given products.
    #[must_use]
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut store = Self::new();

        for product in products {
            store.insert(product);
        }

        store
    }

    /// Seed a product, replacing any existing product with the same identifier.
    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.identifier.clone(), product);
    }
}

impl ProductStore for MemoryProductStore {
    fn find_product(&self, identifier: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.products.get(identifier).cloned())
    }
}
