use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Order Value Objects
// ============================================================================

/// One product entry within an order, with its own quantity and price snapshot.
/// Identity within an order is `product_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
}

impl LineItem {
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    Paypal,
    BankTransfer,
}

/// Shipping block of the order form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub address: String,
    pub method: String,
    pub tracking_number: Option<String>,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_total() {
        let line = LineItem {
            product_id: Uuid::new_v4(),
            name: "Widget".to_string(),
            unit_price: dec!(10.50),
            quantity: 3,
        };

        assert_eq!(line.line_total(), dec!(31.50));
    }

    #[test]
    fn test_line_item_serialization() {
        let line = LineItem {
            product_id: Uuid::new_v4(),
            name: "Widget".to_string(),
            unit_price: dec!(12.00),
            quantity: 2,
        };

        let json = serde_json::to_string(&line).unwrap();
        let deserialized: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(line, deserialized);
    }
}
