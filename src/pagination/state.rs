//! Pagination state
//!
//! The single mutable piece of a paginated list view.

use super::types::{PageChange, PageSummary, PaginationOptions};
use crate::error::{Error, Result};
use std::ops::Range;
use tracing::debug;

/// Tracks the visible page of a filtered list
///
/// Invariant: `1 <= page() <= page_count()` after every operation. Page size is
/// fixed for the lifetime of the state; build a new state to change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    page_size: usize,
    total_items: usize,
    page: usize,
}

impl PaginationState {
    /// Create a state for an empty list, positioned on page 1
    ///
    /// A zero page size is rejected; nothing else about pagination can fail.
    pub fn new(page_size: usize) -> Result<Self> {
        Self::with_options(PaginationOptions::new(page_size))
    }

    /// Create a state from full construction options
    ///
    /// An out-of-range `initial_page` is clamped silently.
    pub fn with_options(options: PaginationOptions) -> Result<Self> {
        if options.page_size == 0 {
            return Err(Error::InvalidPageSize {
                page_size: options.page_size,
            });
        }

        let mut state = Self {
            page_size: options.page_size,
            total_items: options.total_items,
            page: 1,
        };
        state.page = state.clamp(options.initial_page);
        Ok(state)
    }

    /// Set the total item count while building a state
    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.set_total_items(total_items);
        self
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    /// Current page (1-indexed)
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Size of the filtered list
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `max(1, ceil(total_items / page_size))`
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    /// Zero-based index of the first item on the current page
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// Half-open range of visible indices, bounded by `total_items`
    pub fn range(&self) -> Range<usize> {
        let start = self.offset();
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start.min(end)..end
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn is_first(&self) -> bool {
        !self.has_prev()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// Snapshot of every derived value
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            offset: self.offset(),
            page_count: self.page_count(),
            has_prev: self.has_prev(),
            has_next: self.has_next(),
            end: self.range().end,
        }
    }

    /// Visible window of a caller-owned list
    ///
    /// `items` is expected to be the filtered list whose length was reported
    /// as `total_items`. A shorter slice yields a shorter (possibly empty) window.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Move to `target`, clamped into `[1, page_count]`
    ///
    /// Returns the change only when the current page actually moved.
    pub fn go_to(&mut self, target: i64) -> Option<PageChange> {
        let page = self.clamp(target);
        self.set_page(page)
    }

    /// Next page; no-op on the last page
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<PageChange> {
        let page = (self.page + 1).min(self.page_count());
        self.set_page(page)
    }

    /// Previous page; no-op on page 1
    pub fn prev(&mut self) -> Option<PageChange> {
        let page = self.page.saturating_sub(1).max(1);
        self.set_page(page)
    }

    /// Back to page 1
    ///
    /// Owners call this whenever their filter or search criteria change.
    pub fn reset(&mut self) -> Option<PageChange> {
        self.set_page(1)
    }

    /// Last page
    pub fn last(&mut self) -> Option<PageChange> {
        let page = self.page_count();
        self.set_page(page)
    }

    // ------------------------------------------------------------------------
    // Recomputation
    // ------------------------------------------------------------------------

    /// Report a new size for the filtered list
    ///
    /// If the current page no longer exists it is clamped to the new last page
    /// before this returns, and the change is reported. Growing the list never
    /// moves the page.
    pub fn set_total_items(&mut self, total_items: usize) -> Option<PageChange> {
        if total_items != self.total_items {
            debug!(
                from = self.total_items,
                to = total_items,
                "pagination total changed"
            );
        }
        self.total_items = total_items;

        let page_count = self.page_count();
        if self.page > page_count {
            debug!(page = self.page, page_count, "clamping page after shrink");
            self.set_page(page_count)
        } else {
            None
        }
    }

    fn clamp(&self, target: i64) -> usize {
        let max = i64::try_from(self.page_count()).unwrap_or(i64::MAX);
        target.clamp(1, max) as usize
    }

    fn set_page(&mut self, page: usize) -> Option<PageChange> {
        if page == self.page {
            return None;
        }

        self.page = page;
        let change = PageChange {
            page,
            offset: self.offset(),
        };
        debug!(page = change.page, offset = change.offset, "page changed");
        Some(change)
    }
}
