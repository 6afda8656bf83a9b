use rust_decimal::Decimal;

// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Unit price must be positive: {0}")]
    InvalidUnitPrice(Decimal),

    #[error("Stock cannot be negative: {0}")]
    NegativeStock(i32),

    #[error("Amount must be positive: {0}")]
    InvalidAmount(i32),

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i32, available: i32 },
}
