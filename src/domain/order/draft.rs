use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::CatalogSnapshot;

use super::errors::OrderError;
use super::record::Order;
use super::value_objects::{LineItem, OrderStatus, PaymentMethod, PaymentStatus, ShippingInfo};

// ============================================================================
// Order Draft - Line Aggregation Core
// ============================================================================
//
// The in-progress, unpersisted representation of an order being created or
// edited. The line list and the derived totals are private: every mutation
// goes through `add_or_increment` / `remove_line`, and both recompute
// `num_products` and `final_price` from the full line sequence afterwards.
// The totals therefore cannot drift from the lines, no matter how call sites
// interleave the operations.
//
// Invariants held after every operation:
// - num_products == sum of line quantities
// - final_price == sum of quantity * unit_price (full precision)
// - no two lines share a product_id
// - every line has quantity >= 1
// - insertion order of lines is preserved
//
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub order_number: String,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub shipping: ShippingInfo,
    pub notes: String,
    pub status: OrderStatus,
    line_items: Vec<LineItem>,
    num_products: i32,
    final_price: Decimal,
}

impl OrderDraft {
    /// Empty draft for a new order, dated today
    pub fn new() -> Self {
        Self {
            order_number: String::new(),
            customer_name: String::new(),
            order_date: Utc::now().date_naive(),
            payment_status: PaymentStatus::Pending,
            payment_method: PaymentMethod::Cash,
            shipping: ShippingInfo::default(),
            notes: String::new(),
            status: OrderStatus::Pending,
            line_items: Vec::new(),
            num_products: 0,
            final_price: Decimal::ZERO,
        }
    }

    /// Hydrate a draft from a fetched order (edit mode). Totals are
    /// recomputed from the fetched lines rather than trusted.
    pub fn from_order(order: &Order) -> Self {
        let mut draft = Self {
            order_number: order.order_number.clone(),
            customer_name: order.customer_name.clone(),
            order_date: order.order_date,
            payment_status: order.payment_status,
            payment_method: order.payment_method,
            shipping: order.shipping.clone(),
            notes: order.notes.clone(),
            status: order.status,
            line_items: order.line_items.clone(),
            num_products: 0,
            final_price: Decimal::ZERO,
        };
        draft.recompute_totals();
        draft
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn num_products(&self) -> i32 {
        self.num_products
    }

    /// Full-precision total
    pub fn final_price(&self) -> Decimal {
        self.final_price
    }

    /// Total rounded to 2 decimal places for display
    pub fn final_price_display(&self) -> Decimal {
        self.final_price.round_dp(2)
    }

    /// Add `quantity` units of a product, merging into an existing line when
    /// the product is already on the order. A merged line keeps its position
    /// and has its unit price refreshed to the catalog's current price, so
    /// repeat adds always reflect current pricing.
    pub fn add_or_increment(
        &mut self,
        product_id: Uuid,
        quantity: i32,
        catalog: &CatalogSnapshot,
    ) -> Result<(), OrderError> {
        if quantity <= 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }
        let entry = catalog
            .resolve(product_id)
            .ok_or(OrderError::ProductNotFound(product_id))?;

        match self
            .line_items
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            Some(line) => {
                line.quantity += quantity;
                line.unit_price = entry.unit_price;
            }
            None => self.line_items.push(LineItem {
                product_id,
                name: entry.name.clone(),
                unit_price: entry.unit_price,
                quantity,
            }),
        }

        self.recompute_totals();
        Ok(())
    }

    /// Drop the line for a product. Removing a product that is not on the
    /// order is a no-op, so the operation is idempotent.
    pub fn remove_line(&mut self, product_id: Uuid) {
        self.line_items.retain(|line| line.product_id != product_id);
        self.recompute_totals();
    }

    /// Sequential guard checks before handing the draft to the save
    /// collaborator. Returns the first failing check only.
    pub fn validate_for_submit(&self) -> Result<(), OrderError> {
        if self.order_number.trim().is_empty() {
            return Err(OrderError::EmptyOrderNumber);
        }
        if self.customer_name.trim().is_empty() {
            return Err(OrderError::EmptyCustomerName);
        }
        if self.line_items.is_empty() {
            return Err(OrderError::EmptyOrderLines);
        }
        Ok(())
    }

    // Derived totals are always recomputed from the full sequence, never
    // incrementally updated.
    fn recompute_totals(&mut self) {
        self.num_products = self.line_items.iter().map(|line| line.quantity).sum();
        self.final_price = self.line_items.iter().map(LineItem::line_total).sum();
    }
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::CatalogEntry;
    use rust_decimal_macros::dec;

    fn catalog_with(entries: &[(Uuid, &str, Decimal)]) -> CatalogSnapshot {
        let mut catalog = CatalogSnapshot::new();
        for (id, name, price) in entries {
            catalog.insert(
                *id,
                CatalogEntry {
                    name: (*name).to_string(),
                    unit_price: *price,
                },
            );
        }
        catalog
    }

    fn assert_totals_consistent(draft: &OrderDraft) {
        let quantity_sum: i32 = draft.line_items().iter().map(|l| l.quantity).sum();
        let price_sum: Decimal = draft.line_items().iter().map(LineItem::line_total).sum();
        assert_eq!(draft.num_products(), quantity_sum);
        assert_eq!(draft.final_price(), price_sum);
    }

    #[test]
    fn test_add_to_empty_draft() {
        let p1 = Uuid::new_v4();
        let catalog = catalog_with(&[(p1, "Widget", dec!(10.00))]);
        let mut draft = OrderDraft::new();

        draft.add_or_increment(p1, 2, &catalog).unwrap();

        assert_eq!(draft.line_items().len(), 1);
        let line = &draft.line_items()[0];
        assert_eq!(line.product_id, p1);
        assert_eq!(line.name, "Widget");
        assert_eq!(line.unit_price, dec!(10.00));
        assert_eq!(line.quantity, 2);
        assert_eq!(draft.num_products(), 2);
        assert_eq!(draft.final_price(), dec!(20.00));
    }

    #[test]
    fn test_repeat_add_merges_and_refreshes_price() {
        let p1 = Uuid::new_v4();
        let mut draft = OrderDraft::new();
        draft
            .add_or_increment(p1, 2, &catalog_with(&[(p1, "Widget", dec!(10.00))]))
            .unwrap();

        // The catalog price moved between the two adds.
        draft
            .add_or_increment(p1, 3, &catalog_with(&[(p1, "Widget", dec!(12.00))]))
            .unwrap();

        assert_eq!(draft.line_items().len(), 1);
        let line = &draft.line_items()[0];
        assert_eq!(line.quantity, 5);
        assert_eq!(line.unit_price, dec!(12.00));
        assert_eq!(draft.num_products(), 5);
        assert_eq!(draft.final_price(), dec!(60.00));
    }

    #[test]
    fn test_remove_last_line_zeroes_totals() {
        let p1 = Uuid::new_v4();
        let catalog = catalog_with(&[(p1, "Widget", dec!(12.00))]);
        let mut draft = OrderDraft::new();
        draft.add_or_increment(p1, 5, &catalog).unwrap();

        draft.remove_line(p1);

        assert!(draft.line_items().is_empty());
        assert_eq!(draft.num_products(), 0);
        assert_eq!(draft.final_price(), Decimal::ZERO);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let catalog = catalog_with(&[(p1, "Widget", dec!(10.00)), (p2, "Gadget", dec!(4.00))]);
        let mut draft = OrderDraft::new();
        draft.add_or_increment(p1, 1, &catalog).unwrap();
        draft.add_or_increment(p2, 2, &catalog).unwrap();

        draft.remove_line(p1);
        let after_first = draft.clone();
        draft.remove_line(p1);

        assert_eq!(draft.line_items(), after_first.line_items());
        assert_eq!(draft.num_products(), after_first.num_products());
        assert_eq!(draft.final_price(), after_first.final_price());
    }

    #[test]
    fn test_unknown_product_fails_and_leaves_draft_unchanged() {
        let p1 = Uuid::new_v4();
        let catalog = catalog_with(&[(p1, "Widget", dec!(10.00))]);
        let mut draft = OrderDraft::new();
        draft.add_or_increment(p1, 2, &catalog).unwrap();
        let before = draft.clone();

        let missing = Uuid::new_v4();
        let result = draft.add_or_increment(missing, 1, &catalog);

        assert!(matches!(
            result.unwrap_err(),
            OrderError::ProductNotFound(id) if id == missing
        ));
        assert_eq!(draft.line_items(), before.line_items());
        assert_eq!(draft.num_products(), before.num_products());
        assert_eq!(draft.final_price(), before.final_price());
    }

    #[test]
    fn test_non_positive_quantity_fails() {
        let p1 = Uuid::new_v4();
        let catalog = catalog_with(&[(p1, "Widget", dec!(10.00))]);
        let mut draft = OrderDraft::new();

        assert!(matches!(
            draft.add_or_increment(p1, 0, &catalog).unwrap_err(),
            OrderError::InvalidQuantity(0)
        ));
        assert!(matches!(
            draft.add_or_increment(p1, -3, &catalog).unwrap_err(),
            OrderError::InvalidQuantity(-3)
        ));
        assert!(draft.line_items().is_empty());
    }

    #[test]
    fn test_merge_preserves_insertion_order() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let catalog = catalog_with(&[(p1, "Widget", dec!(10.00)), (p2, "Gadget", dec!(4.00))]);
        let mut draft = OrderDraft::new();

        draft.add_or_increment(p1, 1, &catalog).unwrap();
        draft.add_or_increment(p2, 1, &catalog).unwrap();
        draft.add_or_increment(p1, 1, &catalog).unwrap();

        assert_eq!(draft.line_items().len(), 2);
        assert_eq!(draft.line_items()[0].product_id, p1);
        assert_eq!(draft.line_items()[1].product_id, p2);
    }

    #[test]
    fn test_no_duplicate_product_ids() {
        let p1 = Uuid::new_v4();
        let catalog = catalog_with(&[(p1, "Widget", dec!(10.00))]);
        let mut draft = OrderDraft::new();

        for _ in 0..4 {
            draft.add_or_increment(p1, 1, &catalog).unwrap();
        }

        assert_eq!(draft.line_items().len(), 1);
        assert_eq!(draft.line_items()[0].quantity, 4);
    }

    #[test]
    fn test_totals_consistent_across_op_sequence() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let p3 = Uuid::new_v4();
        let catalog = catalog_with(&[
            (p1, "Widget", dec!(10.00)),
            (p2, "Gadget", dec!(4.25)),
            (p3, "Gizmo", dec!(0.99)),
        ]);
        let mut draft = OrderDraft::new();

        draft.add_or_increment(p1, 2, &catalog).unwrap();
        assert_totals_consistent(&draft);
        draft.add_or_increment(p2, 7, &catalog).unwrap();
        assert_totals_consistent(&draft);
        draft.remove_line(p1);
        assert_totals_consistent(&draft);
        draft.add_or_increment(p3, 1, &catalog).unwrap();
        assert_totals_consistent(&draft);
        draft.add_or_increment(p2, 3, &catalog).unwrap();
        assert_totals_consistent(&draft);
        draft.remove_line(p3);
        assert_totals_consistent(&draft);

        assert_eq!(draft.num_products(), 10);
        assert_eq!(draft.final_price(), dec!(42.50));
    }

    #[test]
    fn test_display_price_is_rounded_to_two_places() {
        let p1 = Uuid::new_v4();
        let catalog = catalog_with(&[(p1, "Bolt", dec!(0.333))]);
        let mut draft = OrderDraft::new();
        draft.add_or_increment(p1, 3, &catalog).unwrap();

        assert_eq!(draft.final_price(), dec!(0.999));
        assert_eq!(draft.final_price_display(), dec!(1.00));
    }

    #[test]
    fn test_validate_checks_order_number_first() {
        let p1 = Uuid::new_v4();
        let catalog = catalog_with(&[(p1, "Widget", dec!(10.00))]);
        let mut draft = OrderDraft::new();
        draft.customer_name = "Bob".to_string();
        draft.add_or_increment(p1, 1, &catalog).unwrap();

        // Customer name and lines are fine; the order number guard fires first.
        assert!(matches!(
            draft.validate_for_submit().unwrap_err(),
            OrderError::EmptyOrderNumber
        ));
    }

    #[test]
    fn test_validate_checks_customer_name_before_lines() {
        let draft = OrderDraft {
            order_number: "ORD-1".to_string(),
            ..OrderDraft::new()
        };

        assert!(matches!(
            draft.validate_for_submit().unwrap_err(),
            OrderError::EmptyCustomerName
        ));
    }

    #[test]
    fn test_validate_requires_at_least_one_line() {
        let draft = OrderDraft {
            order_number: "ORD-1".to_string(),
            customer_name: "Bob".to_string(),
            ..OrderDraft::new()
        };

        assert!(matches!(
            draft.validate_for_submit().unwrap_err(),
            OrderError::EmptyOrderLines
        ));
    }

    #[test]
    fn test_validate_passes_complete_draft() {
        let p1 = Uuid::new_v4();
        let catalog = catalog_with(&[(p1, "Widget", dec!(10.00))]);
        let mut draft = OrderDraft::new();
        draft.order_number = "ORD-1".to_string();
        draft.customer_name = "Bob".to_string();
        draft.add_or_increment(p1, 1, &catalog).unwrap();

        assert!(draft.validate_for_submit().is_ok());
    }

    #[test]
    fn test_whitespace_only_fields_fail_validation() {
        let draft = OrderDraft {
            order_number: "   ".to_string(),
            customer_name: "Bob".to_string(),
            ..OrderDraft::new()
        };

        assert!(matches!(
            draft.validate_for_submit().unwrap_err(),
            OrderError::EmptyOrderNumber
        ));
    }

    #[test]
    fn test_hydration_recomputes_stale_totals() {
        let order = crate::domain::order::record::Order {
            id: Uuid::new_v4(),
            order_number: "ORD-7".to_string(),
            customer_name: "Alice".to_string(),
            order_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            payment_status: PaymentStatus::Pending,
            payment_method: PaymentMethod::Cash,
            shipping: ShippingInfo::default(),
            notes: String::new(),
            status: OrderStatus::Pending,
            line_items: vec![LineItem {
                product_id: Uuid::new_v4(),
                name: "Widget".to_string(),
                unit_price: dec!(10.00),
                quantity: 3,
            }],
            // Stale values as a backend might return them.
            num_products: 99,
            final_price: dec!(0.01),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let draft = OrderDraft::from_order(&order);

        assert_eq!(draft.num_products(), 3);
        assert_eq!(draft.final_price(), dec!(30.00));
    }
}
