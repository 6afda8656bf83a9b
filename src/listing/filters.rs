use uuid::Uuid;

use crate::domain::order::{Order, OrderStatus, PaymentStatus};
use crate::domain::product::{Product, StockStatus};
use crate::domain::supplier::Supplier;

use super::pagination::{paginate, Page, PageRequest};

// ============================================================================
// List Screen Filters
// ============================================================================
//
// Every list screen combines its filter dimensions with AND; an unset
// dimension matches everything, so a default filter passes the whole
// collection through. Text dimensions are case-insensitive substring
// matches. Callers reset to page 1 whenever a dimension changes.
//
// ============================================================================

pub trait RowFilter<T> {
    fn matches(&self, row: &T) -> bool;
}

/// Filter, then page over the filtered collection
pub fn filter_page<T: Clone>(
    rows: &[T],
    filter: &impl RowFilter<T>,
    request: &PageRequest,
) -> Page<T> {
    let filtered: Vec<T> = rows
        .iter()
        .filter(|row| filter.matches(row))
        .cloned()
        .collect();
    paginate(&filtered, request)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

// ============================================================================
// Per-Screen Filter Values
// ============================================================================

/// Products screen: search over name or code, plus classification and
/// supplier dropdowns
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search: String,
    pub classification: Option<String>,
    pub supplier_id: Option<Uuid>,
}

impl RowFilter<Product> for ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        let matches_search =
            contains_ci(&product.name, &self.search) || contains_ci(&product.code, &self.search);
        let matches_classification = self
            .classification
            .as_ref()
            .is_none_or(|c| &product.classification == c);
        let matches_supplier = self
            .supplier_id
            .is_none_or(|id| product.supplier_id == Some(id));

        matches_search && matches_classification && matches_supplier
    }
}

/// Orders screen: order-number search plus payment status, general status
/// and exact product-count dimensions
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub search: String,
    pub payment_status: Option<PaymentStatus>,
    pub status: Option<OrderStatus>,
    pub num_products: Option<i32>,
}

impl RowFilter<Order> for OrderFilter {
    fn matches(&self, order: &Order) -> bool {
        let matches_search = contains_ci(&order.order_number, &self.search);
        let matches_payment = self
            .payment_status
            .is_none_or(|status| order.payment_status == status);
        let matches_status = self.status.is_none_or(|status| order.status == status);
        let matches_count = self.num_products.is_none_or(|n| order.num_products == n);

        matches_search && matches_payment && matches_status && matches_count
    }
}

/// Inventory screen: search over name or code, supplier dropdown and the
/// low/available stock dimension
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    pub search: String,
    pub supplier_id: Option<Uuid>,
    pub stock_status: Option<StockStatus>,
}

impl RowFilter<Product> for InventoryFilter {
    fn matches(&self, product: &Product) -> bool {
        let matches_search =
            contains_ci(&product.name, &self.search) || contains_ci(&product.code, &self.search);
        let matches_supplier = self
            .supplier_id
            .is_none_or(|id| product.supplier_id == Some(id));
        let matches_stock = self
            .stock_status
            .is_none_or(|status| product.stock_status() == status);

        matches_search && matches_supplier && matches_stock
    }
}

/// Suppliers screen: one search box over company name or RUC
#[derive(Debug, Clone, Default)]
pub struct SupplierFilter {
    pub search: String,
}

impl RowFilter<Supplier> for SupplierFilter {
    fn matches(&self, supplier: &Supplier) -> bool {
        contains_ci(&supplier.company_name, &self.search) || contains_ci(&supplier.ruc, &self.search)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
