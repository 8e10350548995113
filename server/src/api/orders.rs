//! Order management API endpoints.
//!
//! - POST /api/orders - Place an order (requires auth)
//! - GET /api/orders/myorders - The caller's orders (requires auth)
//! - GET /api/orders/:id - Fetch one order (owner or admin)
//! - GET /api/orders - All orders (admin)
//! - PUT /api/orders/:id/pay - Record payment
//! - PUT /api/orders/:id/deliver - Record delivery (admin)
//!
//! # Order lifecycle
//!
//! ```text
//! Created → (pay) → Paid → (deliver) → Delivered
//! ```
//!
//! Placement is all-or-nothing: every line is validated before any stock
//! moves, and a placement that fails leaves the catalog and the order store
//! exactly as they were.

use crate::auth::{Identity, RequireAdmin};
use crate::server::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use storefront_core::{
    CartLine, Money, Order, OrderId, PaymentResult, PlaceOrder, ProductId, ShippingAddress,
};
use storefront_web::{AppError, CorrelationId};
use uuid::Uuid;

// ============================================================================
// Request Types
// ============================================================================

/// One requested line of a new order.
#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    /// Product to order
    pub product_id: Uuid,
    /// Units to order, at least 1
    pub quantity: u32,
}

/// Request to place a new order.
///
/// All money amounts are integer cents. Tax and shipping come from the
/// pricing collaborator; the server recomputes every total itself.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    /// Requested lines in submission order
    pub items: Vec<OrderItemRequest>,
    /// Where to ship
    pub shipping_address: ShippingAddress,
    /// Payment method tag (e.g. "PayPal")
    pub payment_method: String,
    /// Tax amount in cents
    pub tax_price: Money,
    /// Shipping amount in cents
    pub shipping_price: Money,
}

// ============================================================================
// Handlers
// ============================================================================

/// Place a new order.
///
/// Validates every requested line against the catalog, reserves stock
/// atomically, persists the order, and clears the caller's cart.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:8080/api/orders \
///   -H "X-User-Id: 770e8400-e29b-41d4-a716-446655440002" \
///   -H "Content-Type: application/json" \
///   -d '{
///     "items": [{"product_id": "550e8400-e29b-41d4-a716-446655440000", "quantity": 2}],
///     "shipping_address": {"address": "1 Main St", "city": "Springfield",
///                          "postal_code": "12345", "country": "US"},
///     "payment_method": "PayPal",
///     "tax_price": 100,
///     "shipping_price": 599
///   }'
/// ```
pub async fn place_order(
    identity: Identity,
    correlation_id: CorrelationId,
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let items: Vec<CartLine> = request
        .items
        .iter()
        .map(|item| CartLine::new(ProductId::from_uuid(item.product_id), item.quantity))
        .collect();

    tracing::debug!(
        correlation_id = %correlation_id.0,
        user_id = %identity.user_id,
        line_count = items.len(),
        "order placement requested"
    );

    let order = state
        .orders
        .place_order(PlaceOrder {
            user_id: identity.user_id,
            items,
            shipping_address: request.shipping_address,
            payment_method: request.payment_method,
            tax_price: request.tax_price,
            shipping_price: request.shipping_price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// Fetch one order by id.
///
/// Returns 404 for an unknown id and 401 when the caller neither owns the
/// order nor is an admin.
pub async fn get_order(
    identity: Identity,
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Order>, AppError> {
    let order = state
        .orders
        .get_order(OrderId::from_uuid(order_id), identity.requester())
        .await?;
    Ok(Json(order))
}

/// The caller's orders, oldest first.
pub async fn get_my_orders(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>, AppError> {
    let orders = state.orders.orders_for_user(identity.user_id).await?;
    Ok(Json(orders))
}

/// Every order in the store. Admin only.
pub async fn get_orders(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Order>>, AppError> {
    let orders = state.orders.all_orders().await?;
    Ok(Json(orders))
}

/// Record payment against an order.
///
/// The request body is the payment processor's result and is stored
/// verbatim as an opaque record.
///
/// # Example
///
/// ```bash
/// curl -X PUT http://localhost:8080/api/orders/<id>/pay \
///   -H "X-User-Id: 770e8400-e29b-41d4-a716-446655440002" \
///   -H "Content-Type: application/json" \
///   -d '{"id": "PAYID-123", "status": "COMPLETED", "update_time": "2025-01-01T00:00:00Z"}'
/// ```
pub async fn pay_order(
    _identity: Identity,
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payment_result): Json<PaymentResult>,
) -> Result<Json<Order>, AppError> {
    let order = state
        .orders
        .mark_paid(OrderId::from_uuid(order_id), payment_result)
        .await?;
    Ok(Json(order))
}

/// Record delivery of an order. Admin only.
pub async fn deliver_order(
    _admin: RequireAdmin,
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Order>, AppError> {
    let order = state
        .orders
        .mark_delivered(OrderId::from_uuid(order_id))
        .await?;
    Ok(Json(order))
}
