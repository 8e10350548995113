//! In-memory catalog store.

use async_trait::async_trait;
use std::collections::HashMap;
use storefront_core::{CatalogStore, Product, ProductId, StoreError};
use tokio::sync::RwLock;

/// Catalog store backed by a `HashMap` behind an async `RwLock`.
///
/// The write lock makes `try_decrement_stock` a single critical section:
/// the availability check and the decrement happen as one atomic step.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl MemoryCatalogStore {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog pre-populated with products.
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let mut products: Vec<Product> = self.products.read().await.values().cloned().collect();
        // HashMap iteration order is arbitrary; keep listings stable.
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn insert_product(&self, product: Product) -> Result<Product, StoreError> {
        self.products.write().await.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update_product(&self, product: Product) -> Result<Product, StoreError> {
        self.products.write().await.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete_product(&self, id: ProductId) -> Result<bool, StoreError> {
        Ok(self.products.write().await.remove(&id).is_some())
    }

    async fn try_decrement_stock(&self, id: ProductId, amount: u32) -> Result<bool, StoreError> {
        let mut products = self.products.write().await;
        match products.get_mut(&id) {
            Some(product) if product.stock >= amount => {
                product.stock -= amount;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn restore_stock(&self, id: ProductId, amount: u32) -> Result<(), StoreError> {
        if let Some(product) = self.products.write().await.get_mut(&id) {
            product.stock = product.stock.saturating_add(amount);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storefront_core::Money;

    fn product(id: ProductId, stock: u32) -> Product {
        Product::new(id, "widget".to_string(), Money::from_cents(1000), stock, String::new())
    }

    #[tokio::test]
    async fn decrement_is_conditional() {
        let id = ProductId::new();
        let store = MemoryCatalogStore::with_products(vec![product(id, 3)]);

        assert!(store.try_decrement_stock(id, 2).await.unwrap());
        assert!(!store.try_decrement_stock(id, 2).await.unwrap());
        assert_eq!(store.find_product(id).await.unwrap().unwrap().stock, 1);
    }

    #[tokio::test]
    async fn decrement_of_missing_product_fails_without_error() {
        let store = MemoryCatalogStore::new();
        assert!(!store.try_decrement_stock(ProductId::new(), 1).await.unwrap());
    }

    #[tokio::test]
    async fn restore_returns_units_to_stock() {
        let id = ProductId::new();
        let store = MemoryCatalogStore::with_products(vec![product(id, 5)]);

        assert!(store.try_decrement_stock(id, 5).await.unwrap());
        store.restore_stock(id, 5).await.unwrap();
        assert_eq!(store.find_product(id).await.unwrap().unwrap().stock, 5);
    }

    /// Many tasks race single-unit decrements against limited stock: exactly
    /// `stock` of them may win, and stock never goes negative (it cannot
    /// even underflow, but the success count proves no double-spend).
    #[tokio::test]
    async fn concurrent_decrements_never_oversubscribe() {
        let id = ProductId::new();
        let store = Arc::new(MemoryCatalogStore::with_products(vec![product(id, 100)]));

        let mut handles = Vec::new();
        for _ in 0..150 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.try_decrement_stock(id, 1).await.unwrap()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }

        assert_eq!(successes, 100);
        assert_eq!(store.find_product(id).await.unwrap().unwrap().stock, 0);
    }
}
