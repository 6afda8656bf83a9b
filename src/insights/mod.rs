// ============================================================================
// Insights - Dashboard Statistics and Report Tables
// ============================================================================

pub mod dashboard;
pub mod reports;

pub use dashboard::*;
pub use reports::*;
