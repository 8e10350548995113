//! # Storefront Core
//!
//! Domain model and order workflow for the Storefront service.
//!
//! This crate contains:
//! - **Domain types**: typed identifiers, cents-based [`types::Money`],
//!   products, cart lines, and the immutable [`types::Order`] with its line
//!   snapshots
//! - **Store traits**: the storage collaborators the workflow engine talks
//!   to ([`stores::CatalogStore`], [`stores::CartStore`],
//!   [`stores::OrderStore`]), including the atomic conditional stock
//!   decrement the concurrency guarantees rest on
//! - **The workflow engine**: [`checkout::OrderService`] (place, pay,
//!   deliver, fetch) and [`cart::CartService`]
//!
//! # Atomicity
//!
//! `place_order` never leaves the catalog partially decremented: validation
//! performs no mutation, every reservation goes through the store's atomic
//! `decrement if available` primitive, and a reservation that loses a race
//! mid-commit restores every decrement already made before failing.
//!
//! All external dependencies (storage, time) are abstracted behind traits
//! and injected at construction.

pub mod cart;
pub mod checkout;
pub mod clock;
pub mod error;
pub mod stores;
pub mod types;

pub use cart::{CartAdjustment, CartService, CartView};
pub use checkout::{OrderService, PlaceOrder, Requester};
pub use clock::{Clock, SystemClock};
pub use error::{OrderError, StoreError};
pub use stores::{CartStore, CatalogStore, OrderStore};
pub use types::{
    CartLine, Money, Order, OrderId, OrderLine, OrderStatus, PaymentResult, Product, ProductId,
    ShippingAddress, UserId,
};
