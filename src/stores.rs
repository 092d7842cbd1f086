//! Stores
//!
//! Trait seams for the external collaborators the engine calls into: rebate
//! lookup, product lookup, and result persistence. A lookup miss is
//! `Ok(None)`; `Err` is reserved for backend faults, which the engine
//! propagates to its caller untouched.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{products::Product, rebates::Rebate};

pub mod memory;

/// Error raised by a store collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store failed to serve the call.
    #[error("store backend failure: {0}")]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Rebate lookup and result persistence.
///
/// Persistence sits alongside the rebate lookup: a booked calculation is a
/// fact about the rebate, and the same backend owns both.
pub trait RebateStore {
    /// Look up a rebate by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails; a missing rebate is
    /// `Ok(None)`, not an error.
    fn find_rebate(&self, identifier: &str) -> Result<Option<Rebate>, StoreError>;

    /// Persist a computed rebate amount against a rebate.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails.
    fn store_calculation_result(&self, rebate: &Rebate, amount: Decimal) -> Result<(), StoreError>;
}

/// Product lookup.
pub trait ProductStore {
    /// Look up a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails; a missing product is
    /// `Ok(None)`, not an error.
    fn find_product(&self, identifier: &str) -> Result<Option<Product>, StoreError>;
}

impl<S: RebateStore + ?Sized> RebateStore for &S {
    fn find_rebate(&self, identifier: &str) -> Result<Option<Rebate>, StoreError> {
        (**self).find_rebate(identifier)
    }

    fn store_calculation_result(&self, rebate: &Rebate, amount: Decimal) -> Result<(), StoreError> {
        (**self).store_calculation_result(rebate, amount)
    }
}

impl<S: ProductStore + ?Sized> ProductStore for &S {
    fn find_product(&self, identifier: &str) -> Result<Option<Product>, StoreError> {
        (**self).find_product(identifier)
    }
}
