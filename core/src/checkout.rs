//! The order workflow engine.
//!
//! `OrderService` turns a validated request into a persisted order in two
//! phases: validate-and-snapshot (no mutation), then commit every stock
//! reservation through the catalog's atomic conditional decrement. A commit
//! that loses a race against a concurrent order is compensated in full, so
//! the catalog is never left partially decremented.
//!
//! ```text
//! place_order:
//!   Phase 1 (read-only)          Phase 2 (commit)
//!   ┌─ look up each product ─┐   ┌─ try_decrement_stock per line ─┐
//!   │  check availability    │ → │  on a lost race: restore all    │ → persist order,
//!   │  snapshot the line     │   │  prior decrements, fail          │   clear cart
//!   └─ accumulate pricing ───┘   └─────────────────────────────────┘
//! ```

use crate::clock::Clock;
use crate::error::{OrderError, StoreError};
use crate::stores::{CartStore, CatalogStore, OrderStore};
use crate::types::{
    CartLine, Money, Order, OrderId, OrderLine, PaymentResult, ProductId, ShippingAddress, UserId,
};
use std::sync::Arc;

/// A request to place an order.
///
/// `tax_price` and `shipping_price` come from the pricing collaborator; they
/// feed the total-price invariant but are not computed here.
#[derive(Clone, Debug)]
pub struct PlaceOrder {
    /// Buyer placing the order
    pub user_id: UserId,
    /// Requested (product, quantity) lines in submission order
    pub items: Vec<CartLine>,
    /// Where to ship
    pub shipping_address: ShippingAddress,
    /// Payment method tag
    pub payment_method: String,
    /// Tax amount from the pricing collaborator
    pub tax_price: Money,
    /// Shipping amount from the pricing collaborator
    pub shipping_price: Money,
}

/// The identity attached to a request, already verified upstream.
#[derive(Clone, Copy, Debug)]
pub struct Requester {
    /// Verified user identifier
    pub user_id: UserId,
    /// Whether the user holds the admin capability
    pub is_admin: bool,
}

/// Order workflow engine over the storage collaborators.
pub struct OrderService {
    catalog: Arc<dyn CatalogStore>,
    carts: Arc<dyn CartStore>,
    orders: Arc<dyn OrderStore>,
    clock: Arc<dyn Clock>,
}

impl OrderService {
    /// Create a new order service.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        carts: Arc<dyn CartStore>,
        orders: Arc<dyn OrderStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalog,
            carts,
            orders,
            clock,
        }
    }

    /// Place an order: validate every line, reserve stock atomically, persist
    /// the order, and clear the buyer's cart.
    ///
    /// Either the whole order commits or nothing does. Validation failures
    /// leave the catalog untouched; a reservation that loses a race against a
    /// concurrent order restores every decrement this call already made
    /// before failing with [`OrderError::ConcurrencyConflict`].
    ///
    /// # Errors
    ///
    /// [`OrderError::Validation`] for a malformed request,
    /// [`OrderError::ProductNotFound`] / [`OrderError::InsufficientStock`]
    /// when a line cannot be satisfied, [`OrderError::ConcurrencyConflict`]
    /// when a reservation loses a race, [`OrderError::Store`] when a
    /// collaborator fails.
    pub async fn place_order(&self, request: PlaceOrder) -> Result<Order, OrderError> {
        let items = merge_requested_lines(request.items)?;

        // Phase 1: validate and snapshot every line before touching stock.
        let mut lines = Vec::with_capacity(items.len());
        for item in &items {
            let product = self
                .catalog
                .find_product(item.product_id)
                .await?
                .ok_or(OrderError::ProductNotFound(item.product_id))?;

            if product.stock < item.quantity {
                return Err(OrderError::InsufficientStock {
                    product_id: product.id,
                    available: product.stock,
                    requested: item.quantity,
                });
            }

            lines.push(OrderLine {
                product_id: product.id,
                name: product.name,
                image: product.image,
                price: product.price,
                quantity: item.quantity,
            });
        }

        let items_price = items_price(&lines)?;
        let total_price = items_price
            .checked_add(request.tax_price)
            .and_then(|sum| sum.checked_add(request.shipping_price))
            .ok_or_else(|| OrderError::Validation("total price overflow".to_string()))?;

        // Phase 2: commit the reservations. Each decrement is atomic; a lost
        // race (or a store failure) rolls back everything this order already
        // reserved.
        let mut reserved: Vec<(ProductId, u32)> = Vec::new();
        for line in &lines {
            let decremented = match self
                .catalog
                .try_decrement_stock(line.product_id, line.quantity)
                .await
            {
                Ok(decremented) => decremented,
                Err(err) => {
                    self.release(&reserved).await?;
                    return Err(err.into());
                }
            };

            if !decremented {
                self.release(&reserved).await?;
                return Err(OrderError::ConcurrencyConflict(line.product_id));
            }
            reserved.push((line.product_id, line.quantity));
        }

        let order = Order {
            id: OrderId::new(),
            user_id: request.user_id,
            lines,
            shipping_address: request.shipping_address,
            payment_method: request.payment_method,
            items_price,
            tax_price: request.tax_price,
            shipping_price: request.shipping_price,
            total_price,
            is_paid: false,
            paid_at: None,
            payment_result: None,
            is_delivered: false,
            delivered_at: None,
            created_at: self.clock.now(),
        };

        let order = match self.orders.insert_order(order).await {
            Ok(order) => order,
            Err(err) => {
                // The order record never existed; hand the stock back.
                self.release(&reserved).await?;
                return Err(err.into());
            }
        };

        self.carts.clear_cart(request.user_id).await?;

        tracing::info!(
            order_id = %order.id,
            user_id = %order.user_id,
            line_count = order.lines.len(),
            total_price = %order.total_price,
            "order placed"
        );

        Ok(order)
    }

    /// Record a payment against an order.
    ///
    /// Stores the opaque processor result verbatim. No stock or pricing side
    /// effects; a repeat call re-stamps `paid_at`.
    ///
    /// # Errors
    ///
    /// [`OrderError::OrderNotFound`] if the order does not exist,
    /// [`OrderError::Store`] when a collaborator fails.
    pub async fn mark_paid(
        &self,
        order_id: OrderId,
        payment_result: PaymentResult,
    ) -> Result<Order, OrderError> {
        let mut order = self
            .orders
            .find_order(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        order.is_paid = true;
        order.paid_at = Some(self.clock.now());
        order.payment_result = Some(payment_result);

        let order = self.orders.update_order(order).await?;
        tracing::info!(order_id = %order.id, "order marked paid");
        Ok(order)
    }

    /// Record delivery of an order.
    ///
    /// Does not require prior payment, and a repeat call re-stamps
    /// `delivered_at` (see DESIGN.md for both decisions).
    ///
    /// # Errors
    ///
    /// [`OrderError::OrderNotFound`] if the order does not exist,
    /// [`OrderError::Store`] when a collaborator fails.
    pub async fn mark_delivered(&self, order_id: OrderId) -> Result<Order, OrderError> {
        let mut order = self
            .orders
            .find_order(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        order.is_delivered = true;
        order.delivered_at = Some(self.clock.now());

        let order = self.orders.update_order(order).await?;
        tracing::info!(order_id = %order.id, "order marked delivered");
        Ok(order)
    }

    /// Fetch an order, enforcing ownership.
    ///
    /// # Errors
    ///
    /// [`OrderError::OrderNotFound`] if the order does not exist,
    /// [`OrderError::NotAuthorized`] if the requester neither owns it nor is
    /// an admin, [`OrderError::Store`] when a collaborator fails.
    pub async fn get_order(
        &self,
        order_id: OrderId,
        requester: Requester,
    ) -> Result<Order, OrderError> {
        let order = self
            .orders
            .find_order(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        if order.user_id != requester.user_id && !requester.is_admin {
            return Err(OrderError::NotAuthorized);
        }

        Ok(order)
    }

    /// All orders placed by a user.
    ///
    /// # Errors
    ///
    /// [`OrderError::Store`] when a collaborator fails.
    pub async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.orders_by_user(user_id).await?)
    }

    /// Every order in the store. Admin gating happens at the route layer.
    ///
    /// # Errors
    ///
    /// [`OrderError::Store`] when a collaborator fails.
    pub async fn all_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.all_orders().await?)
    }

    /// Hand reserved units back to the catalog after a failed commit.
    async fn release(&self, reserved: &[(ProductId, u32)]) -> Result<(), StoreError> {
        for &(product_id, quantity) in reserved {
            self.catalog.restore_stock(product_id, quantity).await?;
        }
        Ok(())
    }
}

/// Sum of line subtotals with checked arithmetic.
///
/// # Errors
///
/// [`OrderError::Validation`] when a subtotal or the running sum overflows.
pub fn items_price(lines: &[OrderLine]) -> Result<Money, OrderError> {
    lines.iter().try_fold(Money::ZERO, |acc, line| {
        let subtotal = line
            .subtotal()
            .ok_or_else(|| OrderError::Validation(format!("line subtotal overflow for product {}", line.product_id)))?;
        acc.checked_add(subtotal)
            .ok_or_else(|| OrderError::Validation("items price overflow".to_string()))
    })
}

/// Validate requested lines and merge duplicate product ids, the same rule
/// carts apply: quantities sum, first occurrence keeps its position.
fn merge_requested_lines(items: Vec<CartLine>) -> Result<Vec<CartLine>, OrderError> {
    if items.is_empty() {
        return Err(OrderError::Validation(
            "order must contain at least one item".to_string(),
        ));
    }

    let mut merged: Vec<CartLine> = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity == 0 {
            return Err(OrderError::Validation(format!(
                "quantity for product {} must be at least 1",
                item.product_id
            )));
        }

        match merged.iter_mut().find(|line| line.product_id == item.product_id) {
            Some(line) => {
                line.quantity = line.quantity.checked_add(item.quantity).ok_or_else(|| {
                    OrderError::Validation(format!(
                        "quantity for product {} overflows",
                        item.product_id
                    ))
                })?;
            }
            None => merged.push(item),
        }
    }

    Ok(merged)
}
