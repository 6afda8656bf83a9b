// ============================================================================
// Listing - Multi-Dimension Filters with Client-Side Pagination
// ============================================================================
//
// The pattern every list screen repeats: filter the fetched collection over
// its screen-specific dimensions, then page over the filtered result.
//
// ============================================================================

pub mod filters;
pub mod pagination;

pub use filters::*;
pub use pagination::*;
