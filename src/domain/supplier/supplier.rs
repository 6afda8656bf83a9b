use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::order::Order;
use crate::domain::product::Product;

// ============================================================================
// Supplier - Vendor Directory Entry
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub company_name: String,
    pub ruc: String,
    pub contact: String,
    pub address: String,
}

impl Supplier {
    pub fn new(
        id: Uuid,
        company_name: impl Into<String>,
        ruc: impl Into<String>,
        contact: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            company_name: company_name.into(),
            ruc: ruc.into(),
            contact: contact.into(),
            address: address.into(),
        }
    }
}

/// Orders containing at least one line for a product sourced from this
/// supplier, resolved through the product list.
pub fn purchase_history<'a>(
    supplier_id: Uuid,
    orders: &'a [Order],
    products: &[Product],
) -> Vec<&'a Order> {
    let supplied: HashSet<Uuid> = products
        .iter()
        .filter(|p| p.supplier_id == Some(supplier_id))
        .map(|p| p.id)
        .collect();

    orders
        .iter()
        .filter(|order| {
            order
                .line_items
                .iter()
                .any(|line| supplied.contains(&line.product_id))
        })
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================
