//! Pagination types
//!
//! Value types produced and consumed by `PaginationState`.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Page size used when a view definition does not set one
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Construction options for a `PaginationState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationOptions {
    /// Items per page (must be > 0)
    pub page_size: usize,
    /// Size of the filtered list
    #[serde(default)]
    pub total_items: usize,
    /// Requested starting page (1-indexed, clamped on construction)
    #[serde(default = "default_initial_page")]
    pub initial_page: i64,
}

fn default_initial_page() -> i64 {
    1
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
            initial_page: 1,
        }
    }
}

impl PaginationOptions {
    /// Create options with the given page size and defaults otherwise
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    /// Set the total item count
    pub fn total_items(mut self, total_items: usize) -> Self {
        self.total_items = total_items;
        self
    }

    /// Set the starting page
    pub fn initial_page(mut self, page: i64) -> Self {
        self.initial_page = page;
        self
    }
}

/// Notification emitted when the current page actually changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageChange {
    /// New current page (1-indexed)
    pub page: usize,
    /// Zero-based index of the first item on the new page
    pub offset: usize,
}

/// Read model of a pagination state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    /// Current page (1-indexed)
    pub page: usize,
    /// Items per page
    pub page_size: usize,
    /// Size of the filtered list
    pub total_items: usize,
    /// Zero-based index of the first item on the current page
    pub offset: usize,
    /// Number of pages (at least 1, even for an empty list)
    pub page_count: usize,
    /// Whether a previous page exists
    pub has_prev: bool,
    /// Whether a next page exists
    pub has_next: bool,
    /// Index one past the last visible item
    pub end: usize,
}

impl PageSummary {
    /// Half-open range of visible item indices
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end
    }

    /// Number of items visible on the current page
    pub fn visible_count(&self) -> usize {
        self.end - self.offset
    }

    /// Whether the filtered list is empty
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}
