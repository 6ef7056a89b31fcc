//! Filter types
//!
//! Declarative criteria over JSON records.

use super::matcher;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A single predicate over a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Criterion {
    /// Case-insensitive substring search
    Search {
        /// Text to look for (blank matches everything)
        text: String,
        /// Field paths to search; empty means every top-level scalar field
        #[serde(default)]
        fields: Vec<String>,
    },

    /// Field equals a value
    Equals {
        /// Field path
        field: String,
        /// Expected value
        value: Value,
    },

    /// Field equals any of the values
    OneOf {
        /// Field path
        field: String,
        /// Accepted values
        values: Vec<Value>,
    },

    /// Field is a date within inclusive bounds
    DateRange {
        /// Field path
        field: String,
        /// Earliest accepted date
        #[serde(default)]
        from: Option<NaiveDate>,
        /// Latest accepted date
        #[serde(default)]
        to: Option<NaiveDate>,
    },

    /// Field is a number within inclusive bounds
    Range {
        /// Field path
        field: String,
        /// Smallest accepted value
        #[serde(default)]
        min: Option<f64>,
        /// Largest accepted value
        #[serde(default)]
        max: Option<f64>,
    },

    /// Field is present and not null
    Exists {
        /// Field path
        field: String,
    },
}

impl Criterion {
    /// Create a search criterion
    pub fn search<S: Into<String>>(
        text: impl Into<String>,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::Search {
            text: text.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an equality criterion
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Equals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a one-of criterion
    pub fn one_of<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self::OneOf {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a date range criterion
    pub fn date_range(
        field: impl Into<String>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Self {
        Self::DateRange {
            field: field.into(),
            from,
            to,
        }
    }

    /// Create a numeric range criterion
    pub fn range(field: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        Self::Range {
            field: field.into(),
            min,
            max,
        }
    }

    /// Create an exists criterion
    pub fn exists(field: impl Into<String>) -> Self {
        Self::Exists {
            field: field.into(),
        }
    }

    /// Check a record against this criterion
    pub fn matches(&self, record: &Value) -> bool {
        match self {
            Self::Search { text, fields } => matcher::matches_search(record, text, fields),
            Self::Equals { field, value } => matcher::extract_field(record, field)
                .is_some_and(|actual| matcher::loosely_equal(actual, value)),
            Self::OneOf { field, values } => {
                matcher::extract_field(record, field).is_some_and(|actual| {
                    values
                        .iter()
                        .any(|expected| matcher::loosely_equal(actual, expected))
                })
            }
            Self::DateRange { field, from, to } => matcher::extract_field(record, field)
                .and_then(matcher::field_as_date)
                .is_some_and(|date| {
                    from.map_or(true, |from| date >= from) && to.map_or(true, |to| date <= to)
                }),
            Self::Range { field, min, max } => matcher::extract_field(record, field)
                .and_then(matcher::field_as_number)
                .is_some_and(|n| {
                    min.map_or(true, |min| n >= min) && max.map_or(true, |max| n <= max)
                }),
            Self::Exists { field } => {
                matcher::extract_field(record, field).is_some_and(|v| !v.is_null())
            }
        }
    }

    /// Field path this criterion reads, if it targets a single field
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Search { .. } => None,
            Self::Equals { field, .. }
            | Self::OneOf { field, .. }
            | Self::DateRange { field, .. }
            | Self::Range { field, .. }
            | Self::Exists { field } => Some(field),
        }
    }
}

/// Ordered conjunction of criteria
///
/// An empty set matches every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criteria(Vec<Criterion>);

impl Criteria {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a criterion
    pub fn push(&mut self, criterion: Criterion) {
        self.0.push(criterion);
    }

    /// Add a criterion (builder form)
    pub fn with(mut self, criterion: Criterion) -> Self {
        self.push(criterion);
        self
    }

    /// Remove every criterion
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.0.iter()
    }

    /// Check a record against every criterion
    pub fn matches(&self, record: &Value) -> bool {
        self.0.iter().all(|c| c.matches(record))
    }

    /// Indices of matching records, in source order
    pub fn apply(&self, records: &[Value]) -> Vec<usize> {
        let indices: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .map(|(i, _)| i)
            .collect();

        debug!(
            criteria = self.0.len(),
            total = records.len(),
            matched = indices.len(),
            "applied filter criteria"
        );
        indices
    }
}

impl From<Vec<Criterion>> for Criteria {
    fn from(criteria: Vec<Criterion>) -> Self {
        Self(criteria)
    }
}

impl FromIterator<Criterion> for Criteria {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Criterion> for Criteria {
    fn extend<I: IntoIterator<Item = Criterion>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Criteria {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
