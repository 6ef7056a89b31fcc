//! List view module
//!
//! Owns one paginated list: its records, its criteria and its pagination state.
//!
//! # Overview
//!
//! A `ListView` runs the filter-then-paginate pattern:
//!
//! ```text
//! records ─▶ default filters ∧ criteria ∧ search ─▶ sort ─▶ PaginationState ─▶ visible page
//! ```
//!
//! Criteria and search changes reset to page 1. Replacing the records (a reload)
//! keeps the page unless the list shrank past it, in which case the page is
//! clamped. Views share no state, so a screen with trips and tasks holds two
//! independent `ListView`s.

mod list;
mod sort;

pub use list::{ListView, Page};
pub use sort::compare_fields;

#[cfg(test)]
mod tests;
