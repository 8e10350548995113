//! # Storefront Memory
//!
//! In-memory implementations of the storefront store traits, plus a fixed
//! clock for deterministic tests.
//!
//! The storage collaborators are out of scope for the service itself; these
//! implementations back the dev server and the test suite. They keep the one
//! contract that matters: [`MemoryCatalogStore`] performs its conditional
//! stock decrement as a single atomic step under one write lock, so racing
//! orders can never oversubscribe a product.
//!
//! ## Example
//!
//! ```
//! use storefront_core::{CatalogStore, Money, Product, ProductId};
//! use storefront_memory::MemoryCatalogStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), storefront_core::StoreError> {
//! let catalog = MemoryCatalogStore::new();
//! let id = ProductId::new();
//! catalog
//!     .insert_product(Product::new(
//!         id,
//!         "Widget".to_string(),
//!         Money::from_cents(1000),
//!         5,
//!         String::new(),
//!     ))
//!     .await?;
//!
//! assert!(catalog.try_decrement_stock(id, 5).await?);
//! assert!(!catalog.try_decrement_stock(id, 1).await?);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cart;
pub mod clock;
pub mod order;

pub use catalog::MemoryCatalogStore;
pub use cart::MemoryCartStore;
pub use clock::{FixedClock, test_clock};
pub use order::MemoryOrderStore;
