//! YAML and JSON parsers
//!
//! Parses and validates view definition files and the record files they page over.
//! View definitions can be built-in (by name) or custom YAML files (by path).

use crate::error::{Error, Result};
use crate::loader::types::ViewDefinition;
use crate::types::Record;
use crate::views;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Top-level keys searched for the record array in wrapped JSON responses
const WRAPPER_KEYS: [&str; 3] = ["data", "items", "results"];

/// Load a view definition from a name or file path
///
/// This function first checks if the input is a built-in view name (e.g., "reservations"),
/// then falls back to loading from a file path.
///
/// # Examples
///
/// ```ignore
/// // Load built-in view by name
/// let view = load_view("reservations")?;
///
/// // Load custom view from file
/// let view = load_view("./my-view.yaml")?;
/// ```
pub fn load_view(path: impl AsRef<Path>) -> Result<ViewDefinition> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    let bare_name = !path_str.contains('/')
        && !path_str.contains('\\')
        && !path_str.ends_with(".yaml")
        && !path_str.ends_with(".yml");

    if bare_name {
        if let Some(yaml) = views::get_builtin(&path_str) {
            return load_view_from_str(yaml);
        }
    }

    if !path.exists() {
        return Err(if bare_name {
            Error::view_not_found(path_str)
        } else {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        });
    }

    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), "loading view file");
    load_view_from_str(&content)
}

/// Load a view definition from a YAML string
pub fn load_view_from_str(yaml: &str) -> Result<ViewDefinition> {
    let def: ViewDefinition = serde_yaml::from_str(yaml)?;

    validate_view(&def)?;
    Ok(def)
}

/// Validate a view definition
pub fn validate_view(def: &ViewDefinition) -> Result<()> {
    if def.name.trim().is_empty() {
        return Err(Error::config("View name cannot be empty"));
    }

    if def.page_size == 0 {
        return Err(Error::invalid_value(
            "page_size",
            format!("view '{}' must show at least one item per page", def.name),
        ));
    }

    if def.search_fields.iter().any(|f| f.trim().is_empty()) {
        return Err(Error::invalid_value(
            "search_fields",
            format!("view '{}' has an empty search field", def.name),
        ));
    }

    if let Some(sort) = &def.sort {
        if sort.field.trim().is_empty() {
            return Err(Error::missing_field("sort.field"));
        }
    }

    for criterion in &def.filters {
        if criterion.field().is_some_and(|f| f.trim().is_empty()) {
            return Err(Error::invalid_value(
                "filters",
                format!("view '{}' has a filter without a field", def.name),
            ));
        }
    }

    Ok(())
}

/// Load records from a JSON or JSONL file
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path)?;
    let records = load_records_from_str(&content)?;
    debug!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Parse records from a JSON array, a wrapped JSON array, or JSONL
///
/// Accepted shapes:
/// - `[{...}, {...}]`
/// - `{"data": [...]}` (also `items` / `results`)
/// - one JSON object per line (blank lines skipped)
pub fn load_records_from_str(content: &str) -> Result<Vec<Record>> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        let records: Vec<Record> = serde_json::from_str(trimmed)?;
        ensure_objects(&records)?;
        return Ok(records);
    }

    let records = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(mut map)) => {
            let wrapped = WRAPPER_KEYS.iter().find_map(|key| match map.get_mut(*key) {
                Some(Value::Array(items)) => Some(std::mem::take(items)),
                _ => None,
            });
            // A single object without a wrapper key is a one-line JSONL document
            wrapped.unwrap_or_else(|| vec![Value::Object(map)])
        }
        Ok(other) => {
            return Err(Error::invalid_records(format!(
                "expected an array or object, got {}",
                type_name(&other)
            )))
        }
        // Only JSONL when the first line is a complete document on its own;
        // otherwise the whole-document error carries the real position
        Err(e) => {
            let first_line = trimmed.lines().next().unwrap_or_default();
            if serde_json::from_str::<Value>(first_line).is_err() {
                return Err(e.into());
            }
            parse_jsonl(trimmed)?
        }
    };

    ensure_objects(&records)?;
    Ok(records)
}

fn parse_jsonl(content: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut blank = 0;
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            blank += 1;
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|e| {
            Error::invalid_records(format!("line {}: invalid JSON: {e}", line_no + 1))
        })?;
        records.push(value);
    }

    debug!(records = records.len(), blank, "parsed JSONL records");
    Ok(records)
}

fn ensure_objects(records: &[Record]) -> Result<()> {
    if let Some((index, bad)) = records.iter().enumerate().find(|(_, r)| !r.is_object()) {
        return Err(Error::invalid_records(format!(
            "record {index} is {}, expected an object",
            type_name(bad)
        )));
    }
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
