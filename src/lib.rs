// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]

//! # agency-pager
//!
//! Client-side filtering and pagination for the list views of a travel-agency
//! CRM: reservations, trips, tasks, categories, notifications and users.
//!
//! ## Features
//!
//! - **Clamped Pagination**: page count, offset and navigation that never leave the valid range
//! - **Shrink Clamp**: the current page follows the list down when a filter narrows it
//! - **Filter Criteria**: search, equality, one-of, numeric and date ranges over JSON records
//! - **View Definitions**: YAML list screens with page size, search fields, sort and default filters
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use agency_pager::{load_view, ListView, Criterion, Result};
//!
//! fn main() -> Result<()> {
//!     let definition = load_view("reservations")?;
//!     let records = agency_pager::loader::load_records("reservations.json")?;
//!
//!     let mut view = ListView::with_records(definition, records)?;
//!     view.set_search("lisbon");
//!     view.add_criterion(Criterion::equals("status", "confirmed"));
//!     view.next();
//!
//!     for record in view.visible() {
//!         println!("{}", record["code"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          ListView                            │
//! │  set_records()  set_search()/set_criteria()  go_to()/next()  │
//! └──────────────────────────────────────────────────────────────┘
//!                │                   │                   │
//!        ┌───────┴──────┐    ┌───────┴──────┐    ┌───────┴───────┐
//!        │    loader    │    │    filter    │    │  pagination   │
//!        ├──────────────┤    ├──────────────┤    ├───────────────┤
//!        │ View YAML    │    │ Search       │    │ page_count    │
//!        │ JSON / JSONL │    │ Equals/OneOf │    │ offset        │
//!        │ Built-ins    │    │ Date / Range │    │ clamp         │
//!        └──────────────┘    └──────────────┘    └───────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client-side pagination state
pub mod pagination;

/// Filter criteria over JSON records
pub mod filter;

/// Filter-then-paginate list views
pub mod view;

/// YAML loader for view definitions and record files
pub mod loader;

/// Built-in view definitions
pub mod views;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use filter::{Criteria, Criterion};
pub use loader::{load_view, load_view_from_str, ViewDefinition};
pub use pagination::{PageChange, PageSummary, PaginationOptions, PaginationState};
pub use view::{ListView, Page};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
