//! In-memory cart store.

use async_trait::async_trait;
use std::collections::HashMap;
use storefront_core::{CartLine, CartStore, StoreError, UserId};
use tokio::sync::RwLock;

/// Cart store keeping one line list per user.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    carts: RwLock<HashMap<UserId, Vec<CartLine>>>,
}

impl MemoryCartStore {
    /// Create an empty cart store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn cart(&self, user_id: UserId) -> Result<Vec<CartLine>, StoreError> {
        Ok(self.carts.read().await.get(&user_id).cloned().unwrap_or_default())
    }

    async fn put_cart(&self, user_id: UserId, lines: Vec<CartLine>) -> Result<(), StoreError> {
        self.carts.write().await.insert(user_id, lines);
        Ok(())
    }

    async fn clear_cart(&self, user_id: UserId) -> Result<(), StoreError> {
        self.carts.write().await.remove(&user_id);
        Ok(())
    }
}
