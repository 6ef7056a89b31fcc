//! Record ordering

use crate::filter::extract_field;
use crate::types::SortDirection;
use serde_json::Value;
use std::cmp::Ordering;

/// Compare two records by a field path
///
/// Numbers compare numerically, strings lexically, booleans false-first.
/// Missing and null fields sort last in either direction. Values of
/// different kinds order as numbers, then strings, then booleans, then the rest.
pub fn compare_fields(a: &Value, b: &Value, field: &str, direction: SortDirection) -> Ordering {
    let a = extract_field(a, field).filter(|v| !v.is_null());
    let b = extract_field(b, field).filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => direction.apply(compare_values(a, b)),
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Number(_) => 0,
        Value::String(_) => 1,
        Value::Bool(_) => 2,
        Value::Array(_) => 3,
        Value::Object(_) => 4,
        Value::Null => 5,
    }
}
