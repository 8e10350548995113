//! In-memory order store.

use async_trait::async_trait;
use storefront_core::{Order, OrderId, OrderStore, StoreError, UserId};
use tokio::sync::RwLock;

/// Order store backed by a `Vec` so listings come back in insertion order
/// (oldest first), matching what a timestamp-ordered query would return.
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    orders: RwLock<Vec<Order>>,
}

impl MemoryOrderStore {
    /// Create an empty order store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn insert_order(&self, order: Order) -> Result<Order, StoreError> {
        self.orders.write().await.push(order.clone());
        Ok(order)
    }

    async fn find_order(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .find(|order| order.id == id)
            .cloned())
    }

    async fn update_order(&self, order: Order) -> Result<Order, StoreError> {
        let mut orders = self.orders.write().await;
        match orders.iter_mut().find(|existing| existing.id == order.id) {
            Some(existing) => {
                *existing = order.clone();
                Ok(order)
            }
            None => Err(StoreError::Unavailable(format!(
                "order {} vanished during update",
                order.id
            ))),
        }
    }

    async fn orders_by_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError> {
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn all_orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.orders.read().await.clone())
    }
}
