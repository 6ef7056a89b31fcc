//! Field access and value comparison for criteria

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Look up a dotted field path in a record
///
/// Accepts an optional `$.` prefix. Numeric segments index into arrays,
/// so `legs.0.city` reaches the first element of `legs`.
pub fn extract_field<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() {
        return Some(record);
    }

    let mut current = record;
    for part in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// String form of a scalar value; `None` for null, arrays and objects
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Numeric value of a number or numeric string
pub fn field_as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Calendar date (in the timestamp's own offset) of an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS`
/// timestamp, or a plain `YYYY-MM-DD` date
pub fn field_as_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// JSON equality, plus string criteria matching scalars by their string form
pub(super) fn loosely_equal(actual: &Value, expected: &Value) -> bool {
    if actual == expected {
        return true;
    }

    match (actual, expected) {
        (Value::Number(_) | Value::Bool(_), Value::String(s)) => {
            scalar_to_string(actual).is_some_and(|a| a == *s)
        }
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => false,
    }
}

/// Case-insensitive substring search across fields
pub(super) fn matches_search(record: &Value, text: &str, fields: &[String]) -> bool {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    if fields.is_empty() {
        return match record {
            Value::Object(map) => map.values().any(|v| contains_text(v, &needle)),
            other => contains_text(other, &needle),
        };
    }

    fields
        .iter()
        .filter_map(|field| extract_field(record, field))
        .any(|v| contains_text(v, &needle))
}

fn contains_text(value: &Value, needle: &str) -> bool {
    match value {
        Value::Array(items) => items.iter().any(|item| contains_text(item, needle)),
        other => scalar_to_string(other).is_some_and(|s| s.to_lowercase().contains(needle)),
    }
}
