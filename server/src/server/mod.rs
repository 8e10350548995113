//! HTTP server module for the storefront.
//!
//! Provides the Axum-based HTTP server with application state, the health
//! endpoint, and router configuration.

pub mod health;
pub mod routes;
pub mod state;

pub use health::health_check;
pub use routes::build_router;
pub use state::AppState;
