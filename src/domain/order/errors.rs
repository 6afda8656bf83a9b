use uuid::Uuid;

// ============================================================================
// Order Business Rule Errors
// ============================================================================
//
// Everything here is recoverable by the caller: the draft is left unchanged
// on failure and the user can retry with corrected input.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Quantity must be a positive integer: {0}")]
    InvalidQuantity(i32),

    #[error("Product not found in catalog: {0}")]
    ProductNotFound(Uuid),

    #[error("Order number cannot be empty")]
    EmptyOrderNumber,

    #[error("Customer name cannot be empty")]
    EmptyCustomerName,

    #[error("Order must contain at least one line item")]
    EmptyOrderLines,

    #[error("Editing session is already submitted")]
    AlreadySubmitted,
}
