use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Duration};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::order::{Order, OrderStatus};
use crate::domain::product::Product;
use crate::domain::supplier::Supplier;

// ============================================================================
// Report Tables
// ============================================================================
//
// Each report is a plain row list, serializable so an exporter collaborator
// (spreadsheet, chart) can consume it as-is.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRow {
    pub status: OrderStatus,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProductRow {
    pub name: String,
    pub quantity_sold: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierProductsRow {
    pub supplier: String,
    pub products: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalesPeriod {
    Day,
    Week,
    Month,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRow {
    /// ISO date for Day/Week buckets (weeks keyed by the preceding Sunday),
    /// `YYYY-MM` for Month buckets
    pub period: String,
    pub sales: Decimal,
}

/// Order counts per status, in status order, statuses with no orders omitted
pub fn orders_by_status(orders: &[Order]) -> Vec<StatusRow> {
    let mut counts: HashMap<OrderStatus, usize> = HashMap::new();
    for order in orders {
        *counts.entry(order.status).or_default() += 1;
    }

    [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ]
    .into_iter()
    .filter_map(|status| {
        counts.get(&status).map(|&orders| StatusRow { status, orders })
    })
    .collect()
}

/// Ten best-selling products by summed line quantity across all orders.
/// Lines whose product is no longer in the product list are skipped.
pub fn top_selling_products(orders: &[Order], products: &[Product]) -> Vec<TopProductRow> {
    let names: HashMap<Uuid, &str> = products
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .collect();

    let mut sold: HashMap<&str, i32> = HashMap::new();
    for order in orders {
        for line in &order.line_items {
            if let Some(name) = names.get(&line.product_id).copied() {
                *sold.entry(name).or_default() += line.quantity;
            }
        }
    }

    let mut rows: Vec<TopProductRow> = sold
        .into_iter()
        .map(|(name, quantity_sold)| TopProductRow {
            name: name.to_string(),
            quantity_sold,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.quantity_sold
            .cmp(&a.quantity_sold)
            .then_with(|| a.name.cmp(&b.name))
    });
    rows.truncate(10);
    rows
}

/// Product counts per supplier; products without a known supplier are
/// bucketed together.
pub fn products_by_supplier(products: &[Product], suppliers: &[Supplier]) -> Vec<SupplierProductsRow> {
    let names: HashMap<Uuid, &str> = suppliers
        .iter()
        .map(|s| (s.id, s.company_name.as_str()))
        .collect();

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for product in products {
        let supplier = product
            .supplier_id
            .and_then(|id| names.get(&id).copied())
            .unwrap_or("No supplier")
            .to_string();
        *counts.entry(supplier).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(supplier, products)| SupplierProductsRow { supplier, products })
        .collect()
}

/// Revenue bucketed by order date, rows sorted by period
pub fn sales_by_period(orders: &[Order], period: SalesPeriod) -> Vec<SalesRow> {
    let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();
    for order in orders {
        let key = match period {
            SalesPeriod::Day => order.order_date.format("%Y-%m-%d").to_string(),
            SalesPeriod::Week => {
                let days_from_sunday = order.order_date.weekday().num_days_from_sunday();
                let week_start = order.order_date - Duration::days(i64::from(days_from_sunday));
                week_start.format("%Y-%m-%d").to_string()
            }
            SalesPeriod::Month => order.order_date.format("%Y-%m").to_string(),
        };
        *buckets.entry(key).or_insert(Decimal::ZERO) += order.final_price;
    }

    buckets
        .into_iter()
        .map(|(period, sales)| SalesRow {
            period,
            sales: sales.round_dp(2),
        })
        .collect()
}

/// The inventory-alert table: products at or below the low-stock threshold
pub fn low_stock_report(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.is_low_stock()).cloned().collect()
}

// ============================================================================
// Unit Tests
// ============================================================================
