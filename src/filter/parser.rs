//! Compact filter expressions
//!
//! Parses the command-line form of a criterion:
//!
//! | Expression              | Criterion                      |
//! |-------------------------|--------------------------------|
//! | `status=confirmed`      | `Equals`                       |
//! | `status=pending\|draft` | `OneOf`                        |
//! | `total>=100`            | `Range { min }`                |
//! | `total<=500`            | `Range { max }`                |
//! | `customer.name~smith`   | `Search` in one field          |
//! | `assignee?`             | `Exists`                       |
//! | `departure@2024-05-01..2024-05-31` | `DateRange`         |

use super::types::Criterion;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// `field` `operator` `rest`
static EXPR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*((?:\$\.)?[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z0-9_]+)*)\s*(>=|<=|=|~|@|\?)(.*)$",
    )
    .unwrap()
});

impl Criterion {
    /// Parse a compact filter expression
    pub fn parse(expr: &str) -> Result<Self> {
        let caps = EXPR_REGEX.captures(expr).ok_or_else(|| {
            Error::invalid_filter(
                expr,
                "expected <field><op><value> with op one of = >= <= ~ @ ?",
            )
        })?;

        let field = caps[1].to_string();
        let op = &caps[2];
        let rest = caps[3].trim();

        match op {
            "?" => {
                if rest.is_empty() {
                    Ok(Self::exists(field))
                } else {
                    Err(Error::invalid_filter(expr, "'?' takes no value"))
                }
            }
            "=" => {
                if rest.is_empty() {
                    return Err(Error::invalid_filter(expr, "missing value"));
                }
                if rest.contains('|') {
                    let values: Vec<Value> = rest
                        .split('|')
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(|v| Value::String(v.to_string()))
                        .collect();
                    if values.is_empty() {
                        return Err(Error::invalid_filter(expr, "missing value"));
                    }
                    Ok(Self::OneOf { field, values })
                } else {
                    Ok(Self::equals(field, rest))
                }
            }
            ">=" => Ok(Self::range(field, Some(parse_number(expr, rest)?), None)),
            "<=" => Ok(Self::range(field, None, Some(parse_number(expr, rest)?))),
            "~" => {
                if rest.is_empty() {
                    return Err(Error::invalid_filter(expr, "missing search text"));
                }
                Ok(Self::search(rest, [field]))
            }
            "@" => parse_date_range(expr, field, rest),
            _ => Err(Error::invalid_filter(expr, format!("unknown operator '{op}'"))),
        }
    }
}

fn parse_number(expr: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| Error::invalid_filter(expr, format!("'{value}' is not a number")))
}

fn parse_date(expr: &str, value: &str) -> Result<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| {
            Error::invalid_filter(expr, format!("'{value}' is not a YYYY-MM-DD date: {e}"))
        })
}

fn parse_date_range(expr: &str, field: String, rest: &str) -> Result<Criterion> {
    let (from, to) = match rest.split_once("..") {
        Some((from, to)) => (parse_date(expr, from)?, parse_date(expr, to)?),
        None => {
            let day = parse_date(expr, rest)?;
            (day, day)
        }
    };

    if from.is_none() && to.is_none() {
        return Err(Error::invalid_filter(
            expr,
            "date range needs at least one bound",
        ));
    }
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(Error::invalid_filter(expr, "range start is after range end"));
        }
    }

    Ok(Criterion::date_range(field, from, to))
}
