use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

// ============================================================================
// Display Formatting Helpers
// ============================================================================

/// `DD/MM/YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `DD/MM/YYYY HH:MM`
pub fn format_date_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}

/// Dollar amount with two decimal places
pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

// ============================================================================
// Unit Tests
// ============================================================================
