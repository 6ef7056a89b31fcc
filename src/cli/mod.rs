//! CLI module
//!
//! Command-line interface for paging through CRM record exports.
//!
//! # Commands
//!
//! - `page` - Filter a record file through a view and print one page
//! - `validate` - Check a view definition
//! - `views` - List built-in views

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

#[cfg(test)]
mod tests;
