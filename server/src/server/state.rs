//! Application state for the storefront HTTP server.
//!
//! Contains the shared services handlers need: the order workflow engine,
//! cart operations, and direct catalog access for the products API. All
//! storage is injected through the core store traits, so the same state
//! shape serves the in-memory dev server and any future backed deployment.

use std::sync::Arc;
use storefront_core::{
    CartService, CartStore, CatalogStore, Clock, OrderService, OrderStore, SystemClock,
};
use storefront_memory::{MemoryCartStore, MemoryCatalogStore, MemoryOrderStore};

/// Application state shared across all HTTP handlers.
///
/// Cloned (cheaply via `Arc`) for each request.
#[derive(Clone)]
pub struct AppState {
    /// Order workflow engine
    pub orders: Arc<OrderService>,

    /// Cart operations
    pub cart: Arc<CartService>,

    /// Catalog store, used directly by the products API
    pub catalog: Arc<dyn CatalogStore>,
}

impl AppState {
    /// Create application state over the given storage collaborators.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        carts: Arc<dyn CartStore>,
        orders: Arc<dyn OrderStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            orders: Arc::new(OrderService::new(
                Arc::clone(&catalog),
                Arc::clone(&carts),
                orders,
                clock,
            )),
            cart: Arc::new(CartService::new(carts, Arc::clone(&catalog))),
            catalog,
        }
    }

    /// Create application state backed by fresh in-memory stores and the
    /// system clock. Used by the dev server and the test suite.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryCatalogStore::new()),
            Arc::new(MemoryCartStore::new()),
            Arc::new(MemoryOrderStore::new()),
            Arc::new(SystemClock),
        )
    }
}
