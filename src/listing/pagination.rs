use serde::{Deserialize, Serialize};

// ============================================================================
// Client-Side Pagination
// ============================================================================
//
// The list screens fetch full collections and page over the filtered result
// locally. Pages are 1-based; a page past the end yields an empty item list
// rather than an error.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    /// Page and page size are clamped to at least 1
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn first(per_page: usize) -> Self {
        Self::new(1, per_page)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

pub fn paginate<T: Clone>(items: &[T], request: &PageRequest) -> Page<T> {
    // Tolerate hand-built requests that skipped the clamping constructor.
    let per_page = request.per_page.max(1);
    let page = request.page.max(1);

    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let window = items.iter().skip(start).take(per_page).cloned().collect();

    Page {
        items: window,
        total_items,
        total_pages,
        current_page: page,
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
