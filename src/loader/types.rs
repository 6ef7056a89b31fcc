//! Loader types
//!
//! Declarative list view definition types for YAML parsing.

use crate::filter::Criteria;
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::types::SortDirection;
use serde::{Deserialize, Serialize};

// ============================================================================
// View Definition
// ============================================================================

/// Top-level list view definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ViewDefinition {
    /// View name (e.g. "reservations")
    pub name: String,
    /// Human-readable title
    #[serde(default)]
    pub title: Option<String>,
    /// Items per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Fields the free-text search looks at
    #[serde(default)]
    pub search_fields: Vec<String>,
    /// Optional sort applied after filtering
    #[serde(default)]
    pub sort: Option<SortDefinition>,
    /// Criteria that always apply to this view
    #[serde(default)]
    pub filters: Criteria,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl ViewDefinition {
    /// Create a definition with defaults for everything but the name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            page_size: DEFAULT_PAGE_SIZE,
            search_fields: Vec::new(),
            sort: None,
            filters: Criteria::new(),
        }
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the searchable fields
    pub fn with_search_fields<S: Into<String>>(
        mut self,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sort
    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortDefinition {
            field: field.into(),
            direction,
        });
        self
    }

    /// Set the default filters
    pub fn with_filters(mut self, filters: Criteria) -> Self {
        self.filters = filters;
        self
    }

    /// Title, falling back to the name
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

// ============================================================================
// Sort Definition
// ============================================================================

/// Sort configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SortDefinition {
    /// Field path to sort by
    pub field: String,
    /// Direction
    #[serde(default)]
    pub direction: SortDirection,
}
