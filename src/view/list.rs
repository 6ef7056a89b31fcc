//! Filter-then-paginate list view

use super::sort::compare_fields;
use crate::error::Result;
use crate::filter::{Criteria, Criterion};
use crate::loader::{validate_view, ViewDefinition};
use crate::pagination::{PageChange, PageSummary, PaginationState};
use crate::types::Record;
use serde::Serialize;
use tracing::debug;

/// Snapshot of the visible page of a view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// View name
    pub view: String,
    /// Pagination read model
    pub pagination: PageSummary,
    /// Records on the current page
    pub records: Vec<Record>,
}

/// One paginated, filterable list
#[derive(Debug, Clone)]
pub struct ListView {
    definition: ViewDefinition,
    records: Vec<Record>,
    search: String,
    criteria: Criteria,
    /// Indices into `records` that pass every filter, in display order
    filtered: Vec<usize>,
    pagination: PaginationState,
}

impl ListView {
    /// Create an empty view
    pub fn new(definition: ViewDefinition) -> Result<Self> {
        Self::with_records(definition, Vec::new())
    }

    /// Create a view over an initial set of records
    pub fn with_records(definition: ViewDefinition, records: Vec<Record>) -> Result<Self> {
        validate_view(&definition)?;
        let pagination = PaginationState::new(definition.page_size)?;

        let mut view = Self {
            definition,
            records,
            search: String::new(),
            criteria: Criteria::new(),
            filtered: Vec::new(),
            pagination,
        };
        view.refilter();
        Ok(view)
    }

    pub fn definition(&self) -> &ViewDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    // ------------------------------------------------------------------------
    // Source list
    // ------------------------------------------------------------------------

    /// Replace the source records (e.g. after a reload)
    ///
    /// The current page is kept when it still exists, otherwise clamped.
    pub fn set_records(&mut self, records: Vec<Record>) -> Option<PageChange> {
        self.records = records;
        self.refilter()
    }

    /// Number of source records before filtering
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    // ------------------------------------------------------------------------
    // Criteria (every change resets to page 1)
    // ------------------------------------------------------------------------

    /// Set the free-text search over the view's search fields
    pub fn set_search(&mut self, text: impl Into<String>) -> Option<PageChange> {
        let text = text.into();
        if text == self.search {
            return None;
        }
        self.search = text;
        self.criteria_changed()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the user criteria
    pub fn set_criteria(&mut self, criteria: Criteria) -> Option<PageChange> {
        self.criteria = criteria;
        self.criteria_changed()
    }

    /// Add one user criterion
    pub fn add_criterion(&mut self, criterion: Criterion) -> Option<PageChange> {
        self.criteria.push(criterion);
        self.criteria_changed()
    }

    /// Drop the user criteria and the search text
    pub fn clear_criteria(&mut self) -> Option<PageChange> {
        self.criteria.clear();
        self.search.clear();
        self.criteria_changed()
    }

    /// User criteria (the definition's default filters are not included)
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    pub fn go_to(&mut self, page: i64) -> Option<PageChange> {
        self.pagination.go_to(page)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<PageChange> {
        self.pagination.next()
    }

    pub fn prev(&mut self) -> Option<PageChange> {
        self.pagination.prev()
    }

    pub fn reset(&mut self) -> Option<PageChange> {
        self.pagination.reset()
    }

    pub fn last(&mut self) -> Option<PageChange> {
        self.pagination.last()
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    /// Number of records passing every filter
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Every filtered record, in display order
    pub fn filtered(&self) -> impl Iterator<Item = &Record> + '_ {
        self.filtered.iter().map(|&i| &self.records[i])
    }

    /// Records on the current page
    pub fn visible(&self) -> Vec<&Record> {
        self.pagination
            .slice(&self.filtered)
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    pub fn summary(&self) -> PageSummary {
        self.pagination.summary()
    }

    /// Owned snapshot of the current page
    pub fn page(&self) -> Page {
        Page {
            view: self.definition.name.clone(),
            pagination: self.summary(),
            records: self.visible().into_iter().cloned().collect(),
        }
    }

    // ------------------------------------------------------------------------
    // Recomputation
    // ------------------------------------------------------------------------

    fn criteria_changed(&mut self) -> Option<PageChange> {
        let before = self.pagination.page();
        self.refilter();
        self.pagination.reset();

        (self.pagination.page() != before).then(|| PageChange {
            page: self.pagination.page(),
            offset: self.pagination.offset(),
        })
    }

    fn refilter(&mut self) -> Option<PageChange> {
        let search = self.search_criterion();
        let definition = &self.definition;
        let criteria = &self.criteria;

        let mut filtered: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                definition.filters.matches(record)
                    && criteria.matches(record)
                    && search.as_ref().map_or(true, |s| s.matches(record))
            })
            .map(|(i, _)| i)
            .collect();

        if let Some(sort) = &definition.sort {
            let records = &self.records;
            filtered.sort_by(|&a, &b| {
                compare_fields(&records[a], &records[b], &sort.field, sort.direction)
            });
        }

        debug!(
            view = %self.definition.name,
            total = self.records.len(),
            matched = filtered.len(),
            "refiltered list view"
        );
        self.filtered = filtered;
        self.pagination.set_total_items(self.filtered.len())
    }

    fn search_criterion(&self) -> Option<Criterion> {
        if self.search.trim().is_empty() {
            return None;
        }
        Some(Criterion::search(
            self.search.clone(),
            self.definition.search_fields.iter().cloned(),
        ))
    }
}
