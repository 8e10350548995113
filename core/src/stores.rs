//! Store traits for the storefront's external collaborators.
//!
//! The workflow engine talks to storage exclusively through these traits.
//! Implementations decide where the data lives; the contract they must keep
//! is narrow: `try_decrement_stock` is the single atomic
//! check-and-decrement primitive the whole concurrency story rests on.

use crate::error::StoreError;
use crate::types::{CartLine, Order, OrderId, Product, ProductId, UserId};
use async_trait::async_trait;

/// Catalog storage: product records and their stock counters.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Look up a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Insert a new product.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn insert_product(&self, product: Product) -> Result<Product, StoreError>;

    /// Replace an existing product record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn update_product(&self, product: Product) -> Result<Product, StoreError>;

    /// Delete a product. Returns `true` if a record was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn delete_product(&self, id: ProductId) -> Result<bool, StoreError>;

    /// Atomically decrement a product's stock by `amount` only if at least
    /// `amount` units are available. Check and decrement are one atomic step;
    /// returns `false` (with no mutation) when stock is short or the product
    /// is gone.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn try_decrement_stock(&self, id: ProductId, amount: u32) -> Result<bool, StoreError>;

    /// Return previously decremented units to stock. Compensation path for a
    /// multi-line commit that lost a race partway through.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn restore_stock(&self, id: ProductId, amount: u32) -> Result<(), StoreError>;
}

/// Cart storage: one line list per user.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// The user's current cart lines; empty when no cart exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn cart(&self, user_id: UserId) -> Result<Vec<CartLine>, StoreError>;

    /// Replace the user's cart lines wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn put_cart(&self, user_id: UserId, lines: Vec<CartLine>) -> Result<(), StoreError>;

    /// Empty the user's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn clear_cart(&self, user_id: UserId) -> Result<(), StoreError>;
}

/// Order storage: persisted order records.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn insert_order(&self, order: Order) -> Result<Order, StoreError>;

    /// Look up an order by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn find_order(&self, id: OrderId) -> Result<Option<Order>, StoreError>;

    /// Replace an existing order record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn update_order(&self, order: Order) -> Result<Order, StoreError>;

    /// All orders placed by a user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn orders_by_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError>;

    /// Every order in the store, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    async fn all_orders(&self) -> Result<Vec<Order>, StoreError>;
}
