//! # Storefront
//!
//! An e-commerce storefront service: a product catalog, per-user carts, and
//! an order workflow with atomic stock reservation.
//!
//! # Architecture
//!
//! ```text
//! HTTP (axum)                        Domain (storefront-core)
//! ┌──────────────────────────┐       ┌──────────────────────────┐
//! │ api::products            │       │ CatalogStore             │
//! │ api::cart      ──────────┼──────▶│ CartService              │
//! │ api::orders              │       │ OrderService             │
//! └──────────────────────────┘       └───────────┬──────────────┘
//!        identity via                            │ store traits
//!        gateway headers                         ▼
//!        (auth::Identity)            storefront-memory stores
//! ```
//!
//! The order workflow is the interesting part: placement validates every
//! line before any stock moves, reserves stock through an atomic
//! conditional decrement, and compensates in full when a reservation loses
//! a race, so the catalog can never be left partially decremented and two
//! buyers can never share the last unit.
//!
//! Identity is verified upstream and arrives as trusted headers; see
//! [`auth`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod auth;
pub mod config;
pub mod server;

pub use config::Config;
pub use server::{AppState, build_router};
