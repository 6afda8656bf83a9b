use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::ProductError;

// ============================================================================
// Product - Catalog Item with Stock and Price History
// ============================================================================

/// Stock at or below this level shows up as low on the inventory screen
pub const LOW_STOCK_THRESHOLD: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    Available,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub classification: String,
    pub stock: i32,
    pub unit_price: Decimal,
    pub previous_unit_price: Option<Decimal>,
    pub supplier_id: Option<Uuid>,
}

impl Product {
    pub fn new(
        id: Uuid,
        code: impl Into<String>,
        name: impl Into<String>,
        classification: impl Into<String>,
        stock: i32,
        unit_price: Decimal,
        supplier_id: Option<Uuid>,
    ) -> Result<Self, ProductError> {
        if unit_price <= Decimal::ZERO {
            return Err(ProductError::InvalidUnitPrice(unit_price));
        }
        if stock < 0 {
            return Err(ProductError::NegativeStock(stock));
        }

        Ok(Self {
            id,
            code: code.into(),
            name: name.into(),
            classification: classification.into(),
            stock,
            unit_price,
            previous_unit_price: None,
            supplier_id,
        })
    }

    /// Set a new unit price, keeping the old one for the price-history column
    pub fn update_price(&mut self, new_price: Decimal) -> Result<(), ProductError> {
        if new_price <= Decimal::ZERO {
            return Err(ProductError::InvalidUnitPrice(new_price));
        }
        self.previous_unit_price = Some(self.unit_price);
        self.unit_price = new_price;
        Ok(())
    }

    pub fn update_stock(&mut self, new_stock: i32) -> Result<(), ProductError> {
        if new_stock < 0 {
            return Err(ProductError::NegativeStock(new_stock));
        }
        self.stock = new_stock;
        Ok(())
    }

    /// Consume stock for a fulfilled order line
    pub fn decrease_stock(&mut self, amount: i32) -> Result<(), ProductError> {
        if amount <= 0 {
            return Err(ProductError::InvalidAmount(amount));
        }
        if self.stock < amount {
            return Err(ProductError::InsufficientStock {
                requested: amount,
                available: self.stock,
            });
        }
        self.stock -= amount;
        Ok(())
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.stock <= LOW_STOCK_THRESHOLD {
            StockStatus::Low
        } else {
            StockStatus::Available
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock_status() == StockStatus::Low
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
