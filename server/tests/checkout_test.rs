//! Order placement tests.
//!
//! Exercise the full placement workflow against in-memory stores: pricing
//! invariants, snapshot capture, atomicity of failed placements, and the
//! last-unit race between concurrent buyers.
//!
//! Run with: `cargo test --test checkout_test`

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;
use storefront_core::{
    CartLine, CartStore, CatalogStore, Clock, Money, OrderError, OrderService, OrderStore,
    PlaceOrder, Product, ProductId, ShippingAddress, UserId,
};
use storefront_memory::{MemoryCartStore, MemoryCatalogStore, MemoryOrderStore, test_clock};

struct Harness {
    catalog: Arc<MemoryCatalogStore>,
    carts: Arc<MemoryCartStore>,
    orders: Arc<MemoryOrderStore>,
    service: Arc<OrderService>,
}

fn harness(products: Vec<Product>) -> Harness {
    let catalog = Arc::new(MemoryCatalogStore::with_products(products));
    let carts = Arc::new(MemoryCartStore::new());
    let orders = Arc::new(MemoryOrderStore::new());
    let service = Arc::new(OrderService::new(
        catalog.clone(),
        carts.clone(),
        orders.clone(),
        Arc::new(test_clock()),
    ));
    Harness {
        catalog,
        carts,
        orders,
        service,
    }
}

fn product(name: &str, price_cents: u64, stock: u32) -> Product {
    Product::new(
        ProductId::new(),
        name.to_string(),
        Money::from_cents(price_cents),
        stock,
        format!("/images/{name}.jpg"),
    )
}

fn shipping() -> ShippingAddress {
    ShippingAddress {
        address: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        postal_code: "12345".to_string(),
        country: "US".to_string(),
    }
}

fn place(user_id: UserId, items: Vec<CartLine>, tax_cents: u64, shipping_cents: u64) -> PlaceOrder {
    PlaceOrder {
        user_id,
        items,
        shipping_address: shipping(),
        payment_method: "PayPal".to_string(),
        tax_price: Money::from_cents(tax_cents),
        shipping_price: Money::from_cents(shipping_cents),
    }
}

/// The worked example: stock 2 at $10.00, quantity 2, tax $1.00, shipping
/// $5.99 → items $20.00, total $26.99, stock 0.
#[tokio::test]
async fn placement_prices_the_worked_example() {
    let widget = product("widget", 1000, 2);
    let widget_id = widget.id;
    let h = harness(vec![widget]);
    let buyer = UserId::new();

    let order = h
        .service
        .place_order(place(buyer, vec![CartLine::new(widget_id, 2)], 100, 599))
        .await
        .unwrap();

    assert_eq!(order.items_price, Money::from_cents(2000));
    assert_eq!(order.tax_price, Money::from_cents(100));
    assert_eq!(order.shipping_price, Money::from_cents(599));
    assert_eq!(order.total_price, Money::from_cents(2699));
    assert!(!order.is_paid);
    assert!(!order.is_delivered);
    assert_eq!(order.created_at, test_clock().now());

    let remaining = h.catalog.find_product(widget_id).await.unwrap().unwrap();
    assert_eq!(remaining.stock, 0);
}

#[tokio::test]
async fn totals_hold_across_multiple_lines() {
    let a = product("keyboard", 8999, 5);
    let b = product("mouse", 3499, 5);
    let (a_id, b_id) = (a.id, b.id);
    let h = harness(vec![a, b]);

    let order = h
        .service
        .place_order(place(
            UserId::new(),
            vec![CartLine::new(a_id, 2), CartLine::new(b_id, 3)],
            250,
            499,
        ))
        .await
        .unwrap();

    let line_sum: u64 = order
        .lines
        .iter()
        .map(|line| line.subtotal().unwrap().cents())
        .sum();
    assert_eq!(order.items_price.cents(), line_sum);
    assert_eq!(
        order.total_price,
        order
            .items_price
            .checked_add(order.tax_price)
            .and_then(|sum| sum.checked_add(order.shipping_price))
            .unwrap()
    );

    // Post-order stock equals pre-order stock minus the ordered quantity.
    assert_eq!(h.catalog.find_product(a_id).await.unwrap().unwrap().stock, 3);
    assert_eq!(h.catalog.find_product(b_id).await.unwrap().unwrap().stock, 2);
}

/// Line snapshots are decoupled from later catalog edits.
#[tokio::test]
async fn order_lines_survive_catalog_edits() {
    let widget = product("widget", 1000, 5);
    let widget_id = widget.id;
    let h = harness(vec![widget]);

    let order = h
        .service
        .place_order(place(UserId::new(), vec![CartLine::new(widget_id, 1)], 0, 0))
        .await
        .unwrap();

    let mut edited = h.catalog.find_product(widget_id).await.unwrap().unwrap();
    edited.name = "renamed widget".to_string();
    edited.price = Money::from_cents(9999);
    h.catalog.update_product(edited).await.unwrap();

    let stored = h.orders.find_order(order.id).await.unwrap().unwrap();
    assert_eq!(stored.lines[0].name, "widget");
    assert_eq!(stored.lines[0].price, Money::from_cents(1000));
}

#[tokio::test]
async fn unknown_product_aborts_without_side_effects() {
    let widget = product("widget", 1000, 5);
    let widget_id = widget.id;
    let h = harness(vec![widget]);
    let buyer = UserId::new();

    h.carts
        .put_cart(buyer, vec![CartLine::new(widget_id, 1)])
        .await
        .unwrap();

    let ghost = ProductId::new();
    let err = h
        .service
        .place_order(place(
            buyer,
            vec![CartLine::new(widget_id, 2), CartLine::new(ghost, 1)],
            0,
            0,
        ))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::ProductNotFound(ghost));
    // No partial order, no stock movement, cart untouched.
    assert!(h.orders.all_orders().await.unwrap().is_empty());
    assert_eq!(h.catalog.find_product(widget_id).await.unwrap().unwrap().stock, 5);
    assert_eq!(h.carts.cart(buyer).await.unwrap().len(), 1);
}

/// A later line failing must leave every earlier product untouched: no
/// eager per-line decrement may survive a failed placement.
#[tokio::test]
async fn insufficient_stock_aborts_without_side_effects() {
    let plenty = product("keyboard", 8999, 5);
    let scarce = product("monitor", 24999, 2);
    let (plenty_id, scarce_id) = (plenty.id, scarce.id);
    let h = harness(vec![plenty, scarce]);

    let err = h
        .service
        .place_order(place(
            UserId::new(),
            vec![CartLine::new(plenty_id, 2), CartLine::new(scarce_id, 3)],
            0,
            0,
        ))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        OrderError::InsufficientStock {
            product_id: scarce_id,
            available: 2,
            requested: 3,
        }
    );
    assert!(h.orders.all_orders().await.unwrap().is_empty());
    assert_eq!(h.catalog.find_product(plenty_id).await.unwrap().unwrap().stock, 5);
    assert_eq!(h.catalog.find_product(scarce_id).await.unwrap().unwrap().stock, 2);
}

#[tokio::test]
async fn empty_and_zero_quantity_requests_are_rejected() {
    let widget = product("widget", 1000, 5);
    let widget_id = widget.id;
    let h = harness(vec![widget]);

    let empty = h
        .service
        .place_order(place(UserId::new(), vec![], 0, 0))
        .await
        .unwrap_err();
    assert!(matches!(empty, OrderError::Validation(_)));

    let zero = h
        .service
        .place_order(place(UserId::new(), vec![CartLine::new(widget_id, 0)], 0, 0))
        .await
        .unwrap_err();
    assert!(matches!(zero, OrderError::Validation(_)));

    assert_eq!(h.catalog.find_product(widget_id).await.unwrap().unwrap().stock, 5);
}

#[tokio::test]
async fn duplicate_lines_merge_like_a_cart() {
    let widget = product("widget", 1000, 3);
    let widget_id = widget.id;
    let h = harness(vec![widget]);

    let order = h
        .service
        .place_order(place(
            UserId::new(),
            vec![CartLine::new(widget_id, 1), CartLine::new(widget_id, 2)],
            0,
            0,
        ))
        .await
        .unwrap();

    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].quantity, 3);
    assert_eq!(h.catalog.find_product(widget_id).await.unwrap().unwrap().stock, 0);
}

#[tokio::test]
async fn successful_placement_clears_the_cart() {
    let widget = product("widget", 1000, 5);
    let widget_id = widget.id;
    let h = harness(vec![widget]);
    let buyer = UserId::new();

    h.carts
        .put_cart(buyer, vec![CartLine::new(widget_id, 2)])
        .await
        .unwrap();

    h.service
        .place_order(place(buyer, vec![CartLine::new(widget_id, 2)], 0, 0))
        .await
        .unwrap();

    assert!(h.carts.cart(buyer).await.unwrap().is_empty());
}

/// Two buyers race for the last unit: exactly one order commits, the loser
/// fails with a stock error, and stock ends at zero, never negative.
#[tokio::test]
async fn concurrent_buyers_cannot_share_the_last_unit() {
    let widget = product("widget", 1000, 1);
    let widget_id = widget.id;
    let h = harness(vec![widget]);

    let first = {
        let service = Arc::clone(&h.service);
        tokio::spawn(async move {
            service
                .place_order(place(UserId::new(), vec![CartLine::new(widget_id, 1)], 0, 0))
                .await
        })
    };
    let second = {
        let service = Arc::clone(&h.service);
        tokio::spawn(async move {
            service
                .place_order(place(UserId::new(), vec![CartLine::new(widget_id, 1)], 0, 0))
                .await
        })
    };

    let results = [first.await.unwrap(), second.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);

    let loser = results
        .iter()
        .find_map(|r| r.as_ref().err())
        .expect("one buyer must lose");
    assert!(matches!(
        loser,
        OrderError::InsufficientStock { .. } | OrderError::ConcurrencyConflict(_)
    ));

    assert_eq!(h.orders.all_orders().await.unwrap().len(), 1);
    assert_eq!(h.catalog.find_product(widget_id).await.unwrap().unwrap().stock, 0);
}
