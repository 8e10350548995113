//! Error types for the storefront domain.
//!
//! Every failure carries the offending identifier where one exists so the
//! HTTP layer can report a structured (kind, message, id) tuple.

use crate::types::{OrderId, ProductId};
use thiserror::Error;

/// Errors produced by the order workflow and cart operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// A requested product does not exist in the catalog
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// A requested quantity exceeds the available stock
    #[error("not enough stock for product {product_id}: {available} available, {requested} requested")]
    InsufficientStock {
        /// Product that could not be reserved
        product_id: ProductId,
        /// Units available at validation time
        available: u32,
        /// Units requested
        requested: u32,
    },

    /// The order does not exist
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    /// The requester neither owns the order nor is an admin
    #[error("not authorized")]
    NotAuthorized,

    /// Malformed input shape (empty item list, zero quantity, overflowing totals)
    #[error("validation error: {0}")]
    Validation(String),

    /// A stock reservation lost a race against a concurrent order
    #[error("stock reservation for product {0} lost a concurrent update race")]
    ConcurrencyConflict(ProductId),

    /// The referenced product is not in the user's cart
    #[error("item not found in cart: {0}")]
    CartItemNotFound(ProductId),

    /// A storage collaborator failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors surfaced by storage collaborators
///
/// The in-memory stores never fail, but the traits are written against real
/// backends, so every operation is fallible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store rejected or could not complete the operation
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
