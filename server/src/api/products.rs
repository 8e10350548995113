//! Product catalog API endpoints.
//!
//! - GET /api/products - List the catalog (public)
//! - GET /api/products/:id - Fetch one product (public)
//! - POST /api/products - Create a product (admin)
//! - PUT /api/products/:id - Update a product (admin)
//! - DELETE /api/products/:id - Delete a product (admin)
//!
//! Stock edited here is the same stock the order workflow reserves against.

use crate::auth::RequireAdmin;
use crate::server::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use storefront_core::{Money, Product, ProductId};
use storefront_web::AppError;
use uuid::Uuid;

/// Request to create a product.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    /// Product name
    pub name: String,
    /// Unit price in cents
    pub price: Money,
    /// Initial stock
    pub stock: u32,
    /// Image reference; defaults to empty
    pub image: Option<String>,
}

/// Request to update a product. Absent fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    /// New product name
    pub name: Option<String>,
    /// New unit price in cents
    pub price: Option<Money>,
    /// New stock count
    pub stock: Option<u32>,
    /// New image reference
    pub image: Option<String>,
}

/// Response after deleting a product.
#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    /// Confirmation message
    pub message: String,
}

/// List the catalog.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.catalog.list_products().await.map_err(map_store_err)?;
    Ok(Json(products))
}

/// Fetch one product by id.
pub async fn get_product(
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Product>, AppError> {
    let id = ProductId::from_uuid(product_id);
    let product = state
        .catalog
        .find_product(id)
        .await
        .map_err(map_store_err)?
        .ok_or_else(|| AppError::not_found("Product", id))?;
    Ok(Json(product))
}

/// Create a product. Admin only.
pub async fn create_product(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let product = Product::new(
        ProductId::new(),
        request.name,
        request.price,
        request.stock,
        request.image.unwrap_or_default(),
    );
    let product = state
        .catalog
        .insert_product(product)
        .await
        .map_err(map_store_err)?;

    tracing::info!(product_id = %product.id, name = %product.name, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product. Admin only; absent fields are left unchanged.
pub async fn update_product(
    _admin: RequireAdmin,
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<Json<Product>, AppError> {
    let id = ProductId::from_uuid(product_id);
    let mut product = state
        .catalog
        .find_product(id)
        .await
        .map_err(map_store_err)?
        .ok_or_else(|| AppError::not_found("Product", id))?;

    if let Some(name) = request.name {
        product.name = name;
    }
    if let Some(price) = request.price {
        product.price = price;
    }
    if let Some(stock) = request.stock {
        product.stock = stock;
    }
    if let Some(image) = request.image {
        product.image = image;
    }

    let product = state
        .catalog
        .update_product(product)
        .await
        .map_err(map_store_err)?;
    Ok(Json(product))
}

/// Delete a product. Admin only.
pub async fn delete_product(
    _admin: RequireAdmin,
    Path(product_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<DeleteProductResponse>, AppError> {
    let id = ProductId::from_uuid(product_id);
    let removed = state
        .catalog
        .delete_product(id)
        .await
        .map_err(map_store_err)?;

    if !removed {
        return Err(AppError::not_found("Product", id));
    }

    tracing::info!(product_id = %id, "product deleted");
    Ok(Json(DeleteProductResponse {
        message: "Product deleted".to_string(),
    }))
}

fn map_store_err(err: storefront_core::StoreError) -> AppError {
    AppError::from(storefront_core::OrderError::from(err))
}
