use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::draft::OrderDraft;
use super::value_objects::{LineItem, OrderStatus, PaymentMethod, PaymentStatus, ShippingInfo};

// ============================================================================
// Order Record - Persisted Representation
// ============================================================================
//
// What the order store hands back: the draft's header, lines and totals plus
// identity and audit stamps. List screens and reports work over these.
//
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub shipping: ShippingInfo,
    pub notes: String,
    pub status: OrderStatus,
    pub line_items: Vec<LineItem>,
    pub num_products: i32,
    pub final_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Materialize a finalized draft under the given identity. `created_at`
    /// is preserved when updating an existing order.
    pub fn from_draft(id: Uuid, draft: &OrderDraft, created_at: Option<DateTime<Utc>>) -> Self {
        let now = Utc::now();
        Self {
            id,
            order_number: draft.order_number.clone(),
            customer_name: draft.customer_name.clone(),
            order_date: draft.order_date,
            payment_status: draft.payment_status,
            payment_method: draft.payment_method,
            shipping: draft.shipping.clone(),
            notes: draft.notes.clone(),
            status: draft.status,
            line_items: draft.line_items().to_vec(),
            num_products: draft.num_products(),
            final_price: draft.final_price(),
            created_at: created_at.unwrap_or(now),
            updated_at: now,
        }
    }

    /// Inline status change from the orders list screen
    pub fn change_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn final_price_display(&self) -> Decimal {
        self.final_price.round_dp(2)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
