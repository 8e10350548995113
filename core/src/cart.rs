//! Cart operations.
//!
//! A cart is a per-user list of (product, quantity) lines with no duplicate
//! products; adding an existing product merges into its line. Reads are
//! returned enriched with the current catalog name/price/image so clients
//! can render them without a second round trip.

use crate::error::OrderError;
use crate::stores::{CartStore, CatalogStore};
use crate::types::{CartLine, Money, ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A cart line enriched with current catalog data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    /// Referenced product
    pub product_id: ProductId,
    /// Current product name
    pub name: String,
    /// Current unit price
    pub price: Money,
    /// Current image reference
    pub image: String,
    /// Units in the cart
    pub quantity: u32,
}

/// Quantity adjustment applied to a single cart line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartAdjustment {
    /// Bump the line quantity by one
    Increase,
    /// Drop the line quantity by one; at quantity 1 the line is removed
    Decrease,
}

/// Cart operations over the cart and catalog stores.
pub struct CartService {
    carts: Arc<dyn CartStore>,
    catalog: Arc<dyn CatalogStore>,
}

impl CartService {
    /// Create a new cart service.
    #[must_use]
    pub fn new(carts: Arc<dyn CartStore>, catalog: Arc<dyn CatalogStore>) -> Self {
        Self { carts, catalog }
    }

    /// The user's cart, enriched with current catalog data.
    ///
    /// Lines whose product has since been removed from the catalog are
    /// omitted from the view (they cannot be ordered anyway).
    ///
    /// # Errors
    ///
    /// [`OrderError::Store`] when a collaborator fails.
    pub async fn view_cart(&self, user_id: UserId) -> Result<Vec<CartView>, OrderError> {
        let lines = self.carts.cart(user_id).await?;
        let mut views = Vec::with_capacity(lines.len());
        for line in lines {
            if let Some(product) = self.catalog.find_product(line.product_id).await? {
                views.push(CartView {
                    product_id: product.id,
                    name: product.name,
                    price: product.price,
                    image: product.image,
                    quantity: line.quantity,
                });
            }
        }
        Ok(views)
    }

    /// Add a product to the cart, merging into an existing line.
    ///
    /// # Errors
    ///
    /// [`OrderError::ProductNotFound`] if the product does not exist,
    /// [`OrderError::Validation`] for a zero quantity, [`OrderError::Store`]
    /// when a collaborator fails.
    pub async fn add_to_cart(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Vec<CartView>, OrderError> {
        if quantity == 0 {
            return Err(OrderError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }

        self.catalog
            .find_product(product_id)
            .await?
            .ok_or(OrderError::ProductNotFound(product_id))?;

        let mut lines = self.carts.cart(user_id).await?;
        match lines.iter_mut().find(|line| line.product_id == product_id) {
            Some(line) => {
                line.quantity = line.quantity.checked_add(quantity).ok_or_else(|| {
                    OrderError::Validation(format!("quantity for product {product_id} overflows"))
                })?;
            }
            None => lines.push(CartLine::new(product_id, quantity)),
        }
        self.carts.put_cart(user_id, lines).await?;

        self.view_cart(user_id).await
    }

    /// Increase or decrease a cart line's quantity by one.
    ///
    /// Decreasing a quantity-1 line removes it from the cart.
    ///
    /// # Errors
    ///
    /// [`OrderError::CartItemNotFound`] if the product is not in the cart,
    /// [`OrderError::Store`] when a collaborator fails.
    pub async fn adjust_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
        adjustment: CartAdjustment,
    ) -> Result<Vec<CartView>, OrderError> {
        let mut lines = self.carts.cart(user_id).await?;
        let Some(index) = lines.iter().position(|line| line.product_id == product_id) else {
            return Err(OrderError::CartItemNotFound(product_id));
        };

        match adjustment {
            CartAdjustment::Increase => {
                lines[index].quantity = lines[index].quantity.saturating_add(1);
            }
            CartAdjustment::Decrease => {
                if lines[index].quantity > 1 {
                    lines[index].quantity -= 1;
                } else {
                    lines.remove(index);
                }
            }
        }
        self.carts.put_cart(user_id, lines).await?;

        self.view_cart(user_id).await
    }

    /// Remove a product's line from the cart. Removing an absent product is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// [`OrderError::Store`] when a collaborator fails.
    pub async fn remove_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<Vec<CartView>, OrderError> {
        let mut lines = self.carts.cart(user_id).await?;
        lines.retain(|line| line.product_id != product_id);
        self.carts.put_cart(user_id, lines).await?;

        self.view_cart(user_id).await
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// [`OrderError::Store`] when a collaborator fails.
    pub async fn clear(&self, user_id: UserId) -> Result<(), OrderError> {
        self.carts.clear_cart(user_id).await?;
        Ok(())
    }
}
