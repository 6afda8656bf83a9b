use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::{Order, OrderStatus};

// ============================================================================
// Order Store Port
// ============================================================================
//
// The persistence collaborator the editing session hands a finalized draft
// to. Backed by the console's REST resource in production; the in-memory
// implementation serves the demo and tests. Transport concerns (retries,
// auth) live behind this trait, not in the domain layer.
//
// ============================================================================

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: Order) -> Result<Order>;

    async fn update(&self, order: Order) -> Result<Order>;

    async fn fetch(&self, id: Uuid) -> Result<Option<Order>>;

    /// All orders, most recently created first
    async fn list(&self) -> Result<Vec<Order>>;

    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Partial update used by the list screen's inline status menu
    async fn change_status(&self, id: Uuid, status: OrderStatus) -> Result<Order>;
}
