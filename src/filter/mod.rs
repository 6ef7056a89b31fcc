//! Filter module
//!
//! The "filter" half of filter-then-paginate: criteria that narrow a list of
//! JSON records before it is paginated.
//!
//! # Overview
//!
//! - `Criterion` - one predicate (search, equality, one-of, ranges, exists)
//! - `Criteria` - an ordered conjunction of criteria
//! - `extract_field` - dotted path lookup shared by every predicate
//!
//! Criteria can be declared in YAML view definitions (tagged by `type`) or
//! parsed from the compact CLI form with `Criterion::parse`.

mod matcher;
mod parser;
mod types;

pub use matcher::{extract_field, field_as_date, field_as_number, scalar_to_string};
pub use types::{Criteria, Criterion};
