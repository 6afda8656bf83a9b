use std::collections::HashMap;

use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::order::{Order, OrderStatus};

use super::order_store::OrderStore;

// ============================================================================
// In-Memory Order Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: Order) -> Result<Order> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id) {
            bail!("Order already exists: {}", order.id);
        }
        tracing::debug!(order_id = %order.id, order_number = %order.order_number, "order created");
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn update(&self, order: Order) -> Result<Order> {
        let mut orders = self.orders.write().await;
        if !orders.contains_key(&order.id) {
            bail!("Order does not exist: {}", order.id);
        }
        tracing::debug!(order_id = %order.id, "order updated");
        orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>> {
        let mut all: Vec<Order> = self.orders.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut orders = self.orders.write().await;
        if orders.remove(&id).is_none() {
            bail!("Order does not exist: {}", id);
        }
        tracing::debug!(order_id = %id, "order deleted");
        Ok(())
    }

    async fn change_status(&self, id: Uuid, status: OrderStatus) -> Result<Order> {
        let mut orders = self.orders.write().await;
        let Some(order) = orders.get_mut(&id) else {
            bail!("Order does not exist: {}", id);
        };
        order.change_status(status);
        tracing::debug!(order_id = %id, ?status, "order status changed");
        Ok(order.clone())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
