use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order::Order;
use crate::domain::product::Product;

// ============================================================================
// Dashboard Snapshot
// ============================================================================
//
// The landing screen's KPI cards, charts and side tables, computed in one
// pass over the fetched order and product lists.
//
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_orders: usize,
    /// Sum of order totals, rounded to 2 decimal places
    pub total_revenue: Decimal,
    pub total_stock: i32,
    pub low_stock_items: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationCount {
    pub classification: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductStockLevel {
    pub name: String,
    pub stock: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub products_by_classification: Vec<ClassificationCount>,
    pub stock_by_product: Vec<ProductStockLevel>,
    pub recent_orders: Vec<Order>,
    pub low_stock_products: Vec<Product>,
}

impl DashboardSnapshot {
    /// `orders` is expected most-recent-first, as the store lists them.
    pub fn compute(orders: &[Order], products: &[Product]) -> Self {
        let low_stock_products: Vec<Product> = products
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect();

        let total_revenue: Decimal = orders.iter().map(|o| o.final_price).sum();
        let stats = DashboardStats {
            total_orders: orders.len(),
            total_revenue: total_revenue.round_dp(2),
            total_stock: products.iter().map(|p| p.stock).sum(),
            low_stock_items: low_stock_products.len(),
        };

        let mut by_classification: BTreeMap<String, usize> = BTreeMap::new();
        for product in products {
            let classification = if product.classification.is_empty() {
                "Unclassified".to_string()
            } else {
                product.classification.clone()
            };
            *by_classification.entry(classification).or_default() += 1;
        }
        let products_by_classification = by_classification
            .into_iter()
            .map(|(classification, count)| ClassificationCount {
                classification,
                count,
            })
            .collect();

        let stock_by_product = products
            .iter()
            .map(|p| ProductStockLevel {
                name: p.name.clone(),
                stock: p.stock,
            })
            .collect();

        let recent_orders = orders.iter().take(5).cloned().collect();

        Self {
            stats,
            products_by_classification,
            stock_by_product,
            recent_orders,
            low_stock_products,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
