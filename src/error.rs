//! Error types for agency-pager
//!
//! This module defines the error hierarchy for the whole crate.
//! All fallible public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Pagination itself is fail-soft: once a `PaginationState` exists, every
//! navigation input is clamped instead of rejected. The only pagination error
//! is a zero page size at construction.

use thiserror::Error;

/// The main error type for agency-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Page size must be greater than zero (got {page_size})")]
    InvalidPageSize { page_size: usize },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Filter Errors
    // ============================================================================
    #[error("Invalid filter '{expr}': {message}")]
    InvalidFilter { expr: String, message: String },

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("Invalid records: {message}")]
    InvalidRecords { message: String },

    #[error(
        "View '{name}' not found. Built-in views: {}. Or provide a path to a YAML file.",
        crate::views::list_builtin().join(", ")
    )]
    ViewNotFound { name: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a filter parse error
    pub fn invalid_filter(expr: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            expr: expr.into(),
            message: message.into(),
        }
    }

    /// Create an invalid records error
    pub fn invalid_records(message: impl Into<String>) -> Self {
        Self::InvalidRecords {
            message: message.into(),
        }
    }

    /// Create a view not found error
    pub fn view_not_found(name: impl Into<String>) -> Self {
        Self::ViewNotFound { name: name.into() }
    }

    /// Check if this error was caused by user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidPageSize { .. }
                | Error::Config { .. }
                | Error::MissingConfigField { .. }
                | Error::InvalidConfigValue { .. }
                | Error::YamlParse(_)
                | Error::InvalidFilter { .. }
                | Error::ViewNotFound { .. }
        )
    }
}

/// Result type alias for agency-pager
pub type Result<T> = std::result::Result<T, Error>;
