use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::product::Product;

// ============================================================================
// Catalog Snapshot - Product Lookup for Order Editing
// ============================================================================
//
// The product listing is fetched once per editing session; the snapshot then
// answers synchronous lookups while the user edits an order. Prices are read
// from here on every add, so a line picks up the current catalog price.
//
// ============================================================================

/// What an order line needs to know about a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub unit_price: Decimal,
}

/// Pre-fetched `product id -> entry` mapping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    entries: HashMap<Uuid, CatalogEntry>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from a fetched product list
    pub fn from_products(products: &[Product]) -> Self {
        let entries = products
            .iter()
            .map(|p| {
                (
                    p.id,
                    CatalogEntry {
                        name: p.name.clone(),
                        unit_price: p.unit_price,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn insert(&mut self, product_id: Uuid, entry: CatalogEntry) {
        self.entries.insert(product_id, entry);
    }

    pub fn resolve(&self, product_id: Uuid) -> Option<&CatalogEntry> {
        self.entries.get(&product_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
