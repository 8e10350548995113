//! Router configuration for the storefront.
//!
//! Builds the complete Axum router with all endpoints.

use super::health::health_check;
use super::state::AppState;
use crate::api::{cart, orders, products};
use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use storefront_web::correlation_id_layer;

/// Build the complete Axum router.
///
/// Routes mirror the original storefront surface, nested under `/api`:
/// products (public reads, admin writes), the per-user cart, and the order
/// workflow. Every request passes through the correlation-id layer.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Product catalog
        .route("/products", get(products::list_products))
        .route("/products", post(products::create_product))
        .route("/products/:id", get(products::get_product))
        .route("/products/:id", put(products::update_product))
        .route("/products/:id", delete(products::delete_product))
        // Cart
        .route("/cart", get(cart::get_cart))
        .route("/cart", post(cart::add_to_cart))
        .route("/cart", delete(cart::clear_cart))
        .route("/cart/:product_id", patch(cart::update_cart_item))
        .route("/cart/:product_id", delete(cart::remove_cart_item))
        // Orders
        .route("/orders", post(orders::place_order))
        .route("/orders", get(orders::get_orders))
        .route("/orders/myorders", get(orders::get_my_orders))
        .route("/orders/:id", get(orders::get_order))
        .route("/orders/:id/pay", put(orders::pay_order))
        .route("/orders/:id/deliver", put(orders::deliver_order));

    Router::new()
        // Health check (no authentication)
        .route("/health", get(health_check))
        // API routes under /api prefix
        .nest("/api", api_routes)
        .layer(correlation_id_layer())
        .with_state(state)
}
