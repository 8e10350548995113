//! Cart management API endpoints.
//!
//! - GET /api/cart - The caller's cart, enriched with catalog data
//! - POST /api/cart - Add a product (merges into an existing line)
//! - PATCH /api/cart/:product_id - Increase or decrease a line by one
//! - DELETE /api/cart/:product_id - Remove a line
//! - DELETE /api/cart - Empty the cart
//!
//! All endpoints require an authenticated identity and return the updated
//! cart so clients can re-render without a second request.

use crate::auth::Identity;
use crate::server::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use storefront_core::{CartAdjustment, CartView, ProductId};
use storefront_web::AppError;
use uuid::Uuid;

/// Request to add a product to the cart.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    /// Product to add
    pub product_id: Uuid,
    /// Units to add; defaults to 1
    pub quantity: Option<u32>,
}

/// Request to adjust a cart line's quantity.
#[derive(Debug, Deserialize)]
pub struct AdjustCartItemRequest {
    /// `increase` or `decrease`
    pub action: CartAdjustment,
}

/// Response after clearing the cart.
#[derive(Debug, Serialize)]
pub struct ClearCartResponse {
    /// Confirmation message
    pub message: String,
}

/// The caller's cart.
pub async fn get_cart(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<CartView>>, AppError> {
    let cart = state.cart.view_cart(identity.user_id).await?;
    Ok(Json(cart))
}

/// Add a product to the cart.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:8080/api/cart \
///   -H "X-User-Id: 770e8400-e29b-41d4-a716-446655440002" \
///   -H "Content-Type: application/json" \
///   -d '{"product_id": "550e8400-e29b-41d4-a716-446655440000", "quantity": 2}'
/// ```
pub async fn add_to_cart(
    identity: Identity,
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<Vec<CartView>>, AppError> {
    let cart = state
        .cart
        .add_to_cart(
            identity.user_id,
            ProductId::from_uuid(request.product_id),
            request.quantity.unwrap_or(1),
        )
        .await?;
    Ok(Json(cart))
}

/// Increase or decrease a cart line's quantity by one.
///
/// Decreasing a quantity-1 line removes it.
pub async fn update_cart_item(
    identity: Identity,
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<AdjustCartItemRequest>,
) -> Result<Json<Vec<CartView>>, AppError> {
    let cart = state
        .cart
        .adjust_item(
            identity.user_id,
            ProductId::from_uuid(product_id),
            request.action,
        )
        .await?;
    Ok(Json(cart))
}

/// Remove a product's line from the cart.
pub async fn remove_cart_item(
    identity: Identity,
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Vec<CartView>>, AppError> {
    let cart = state
        .cart
        .remove_item(identity.user_id, ProductId::from_uuid(product_id))
        .await?;
    Ok(Json(cart))
}

/// Empty the caller's cart.
pub async fn clear_cart(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<ClearCartResponse>, AppError> {
    state.cart.clear(identity.user_id).await?;
    Ok(Json(ClearCartResponse {
        message: "Cart cleared".to_string(),
    }))
}
