use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::CatalogSnapshot;
use crate::store::OrderStore;

use super::draft::OrderDraft;
use super::errors::OrderError;
use super::record::Order;

// ============================================================================
// Editing Session - Draft Lifecycle State Machine
// ============================================================================
//
// One session per order form: it owns the draft and the catalog snapshot
// fetched when the form opened. States:
//
//   Empty --(add line)--> Dirty --(remove last line)--> Empty
//   Dirty --(validate ok, save ok)--> Submitted   (terminal)
//
// A failed validation or save leaves the session Dirty. The state is derived
// from the draft rather than tracked separately, the same way the draft
// derives its totals from the lines.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Empty,
    Dirty,
    Submitted,
}

pub struct EditingSession {
    draft: OrderDraft,
    catalog: CatalogSnapshot,
    order_id: Option<Uuid>,
    created_at: Option<DateTime<Utc>>,
    submitted: bool,
}

impl EditingSession {
    /// New-order form: empty draft
    pub fn start(catalog: CatalogSnapshot) -> Self {
        Self {
            draft: OrderDraft::new(),
            catalog,
            order_id: None,
            created_at: None,
            submitted: false,
        }
    }

    /// Edit form: draft hydrated from a fetched order
    pub fn edit(order: &Order, catalog: CatalogSnapshot) -> Self {
        Self {
            draft: OrderDraft::from_order(order),
            catalog,
            order_id: Some(order.id),
            created_at: Some(order.created_at),
            submitted: false,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.submitted {
            SessionState::Submitted
        } else if self.draft.line_items().is_empty() {
            SessionState::Empty
        } else {
            SessionState::Dirty
        }
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Header fields (customer name, payment, shipping, ...) are edited
    /// directly; line mutations should go through `add_line` / `remove_line`
    /// so they use the session's catalog and respect the terminal state.
    pub fn draft_mut(&mut self) -> &mut OrderDraft {
        &mut self.draft
    }

    pub fn add_line(&mut self, product_id: Uuid, quantity: i32) -> Result<(), OrderError> {
        self.ensure_open()?;
        self.draft.add_or_increment(product_id, quantity, &self.catalog)?;
        tracing::debug!(%product_id, quantity, total = %self.draft.final_price_display(), "line added");
        Ok(())
    }

    pub fn remove_line(&mut self, product_id: Uuid) -> Result<(), OrderError> {
        self.ensure_open()?;
        self.draft.remove_line(product_id);
        tracing::debug!(%product_id, total = %self.draft.final_price_display(), "line removed");
        Ok(())
    }

    /// Validate, then hand the finalized draft to the store. Success is
    /// terminal: a new session must be started to continue editing.
    pub async fn submit(&mut self, store: &dyn OrderStore) -> Result<Order> {
        if self.submitted {
            return Err(OrderError::AlreadySubmitted.into());
        }
        self.draft.validate_for_submit()?;

        let saved = match self.order_id {
            Some(id) => {
                let order = Order::from_draft(id, &self.draft, self.created_at);
                store.update(order).await?
            }
            None => {
                let order = Order::from_draft(Uuid::new_v4(), &self.draft, None);
                store.create(order).await?
            }
        };

        self.submitted = true;
        tracing::info!(
            order_id = %saved.id,
            order_number = %saved.order_number,
            total = %saved.final_price_display(),
            "order submitted"
        );
        Ok(saved)
    }

    fn ensure_open(&self) -> Result<(), OrderError> {
        if self.submitted {
            return Err(OrderError::AlreadySubmitted);
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
