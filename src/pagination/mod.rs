//! Pagination module
//!
//! Client-side pagination over an in-memory, already filtered list.
//!
//! # Overview
//!
//! A `PaginationState` answers "what slice of the filtered list is visible".
//! It derives the page count and offset from a total item count and a fixed
//! page size. It also provides clamped navigation (`go_to`, `next`, `prev`,
//! `reset`).
//!
//! The state never holds an out-of-range page. When the owner reports a
//! smaller total through `set_total_items`, the current page is clamped down
//! in the same call.
//!
//! ```text
//! records ──filter──▶ filtered (len = total_items)
//!                          │
//!          PaginationState ┤ page, page_size ──▶ offset..offset+page_size
//!                          ▼
//!                    visible slice
//! ```

mod state;
mod types;

pub use state::PaginationState;
pub use types::{PageChange, PageSummary, PaginationOptions, DEFAULT_PAGE_SIZE};
