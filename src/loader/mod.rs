//! Loader module
//!
//! Parse list view definitions from YAML and records from JSON/JSONL.
//!
//! # Overview
//!
//! The loader module provides:
//! - `ViewDefinition` - Declarative list view specification
//! - `SortDefinition` - Optional post-filter sort
//! - YAML parsing with validation, and record file parsing

mod parser;
mod types;

pub use parser::{
    load_records, load_records_from_str, load_view, load_view_from_str, validate_view,
};
pub use types::{SortDefinition, ViewDefinition};
