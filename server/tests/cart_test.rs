//! Cart operation tests.
//!
//! Merge-on-add, quantity adjustment, removal, and the enriched view.
//!
//! Run with: `cargo test --test cart_test`

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;
use storefront_core::{
    CartAdjustment, CartService, CatalogStore, Money, OrderError, Product, ProductId, UserId,
};
use storefront_memory::{MemoryCartStore, MemoryCatalogStore};

struct Harness {
    catalog: Arc<MemoryCatalogStore>,
    service: CartService,
}

fn harness(products: Vec<Product>) -> Harness {
    let catalog = Arc::new(MemoryCatalogStore::with_products(products));
    let carts = Arc::new(MemoryCartStore::new());
    let service = CartService::new(carts, catalog.clone());
    Harness { catalog, service }
}

fn widget() -> Product {
    Product::new(
        ProductId::new(),
        "widget".to_string(),
        Money::from_cents(1000),
        10,
        "/images/widget.jpg".to_string(),
    )
}

#[tokio::test]
async fn add_returns_the_enriched_view() {
    let product = widget();
    let product_id = product.id;
    let h = harness(vec![product]);
    let user = UserId::new();

    let cart = h.service.add_to_cart(user, product_id, 2).await.unwrap();

    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].product_id, product_id);
    assert_eq!(cart[0].name, "widget");
    assert_eq!(cart[0].price, Money::from_cents(1000));
    assert_eq!(cart[0].image, "/images/widget.jpg");
    assert_eq!(cart[0].quantity, 2);
}

#[tokio::test]
async fn add_merges_into_an_existing_line() {
    let product = widget();
    let product_id = product.id;
    let h = harness(vec![product]);
    let user = UserId::new();

    h.service.add_to_cart(user, product_id, 1).await.unwrap();
    let cart = h.service.add_to_cart(user, product_id, 2).await.unwrap();

    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity, 3);
}

#[tokio::test]
async fn add_rejects_unknown_products_and_zero_quantities() {
    let product = widget();
    let product_id = product.id;
    let h = harness(vec![product]);
    let user = UserId::new();

    let ghost = ProductId::new();
    assert_eq!(
        h.service.add_to_cart(user, ghost, 1).await.unwrap_err(),
        OrderError::ProductNotFound(ghost)
    );
    assert!(matches!(
        h.service.add_to_cart(user, product_id, 0).await.unwrap_err(),
        OrderError::Validation(_)
    ));
}

#[tokio::test]
async fn adjust_moves_quantities_and_drops_at_one() {
    let product = widget();
    let product_id = product.id;
    let h = harness(vec![product]);
    let user = UserId::new();

    h.service.add_to_cart(user, product_id, 1).await.unwrap();

    let cart = h
        .service
        .adjust_item(user, product_id, CartAdjustment::Increase)
        .await
        .unwrap();
    assert_eq!(cart[0].quantity, 2);

    let cart = h
        .service
        .adjust_item(user, product_id, CartAdjustment::Decrease)
        .await
        .unwrap();
    assert_eq!(cart[0].quantity, 1);

    // Decreasing a quantity-1 line removes it.
    let cart = h
        .service
        .adjust_item(user, product_id, CartAdjustment::Decrease)
        .await
        .unwrap();
    assert!(cart.is_empty());
}

#[tokio::test]
async fn adjust_of_an_absent_line_is_not_found() {
    let h = harness(vec![widget()]);
    let ghost = ProductId::new();

    let err = h
        .service
        .adjust_item(UserId::new(), ghost, CartAdjustment::Increase)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::CartItemNotFound(ghost));
}

#[tokio::test]
async fn remove_is_a_no_op_for_absent_lines() {
    let product = widget();
    let product_id = product.id;
    let h = harness(vec![product]);
    let user = UserId::new();

    h.service.add_to_cart(user, product_id, 1).await.unwrap();

    let cart = h
        .service
        .remove_item(user, ProductId::new())
        .await
        .unwrap();
    assert_eq!(cart.len(), 1);

    let cart = h.service.remove_item(user, product_id).await.unwrap();
    assert!(cart.is_empty());
}

#[tokio::test]
async fn view_omits_products_deleted_from_the_catalog() {
    let product = widget();
    let product_id = product.id;
    let h = harness(vec![product]);
    let user = UserId::new();

    h.service.add_to_cart(user, product_id, 1).await.unwrap();
    h.catalog.delete_product(product_id).await.unwrap();

    assert!(h.service.view_cart(user).await.unwrap().is_empty());
}

#[tokio::test]
async fn clear_empties_the_cart() {
    let product = widget();
    let product_id = product.id;
    let h = harness(vec![product]);
    let user = UserId::new();

    h.service.add_to_cart(user, product_id, 3).await.unwrap();
    h.service.clear(user).await.unwrap();

    assert!(h.service.view_cart(user).await.unwrap().is_empty());
}
