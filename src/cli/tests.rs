//! Tests for CLI module

use super::*;
use crate::types::LogLevel;
use clap::Parser;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

fn records_file(n: usize) -> NamedTempFile {
    let records: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "id": i,
                "code": format!("RES-{i:03}"),
                "status": if i % 2 == 0 { "confirmed" } else { "pending" },
                "destination": if i % 5 == 0 { "Lisbon" } else { "Rome" },
                "customer": { "name": format!("Customer {i}") },
                "created_at": format!("2024-01-{:02}", (i % 28) + 1),
            })
        })
        .collect();

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&records).unwrap()).unwrap();
    file
}

fn run(args: &[&str]) -> crate::Result<String> {
    let cli = Cli::try_parse_from(args).unwrap();
    Runner::new(cli).execute()
}

fn run_json(args: &[&str]) -> Value {
    serde_json::from_str(&run(args).unwrap()).unwrap()
}

// ============================================================================
// Argument Parsing Tests
// ============================================================================

#[test]
fn test_parse_page_command() {
    let cli = Cli::try_parse_from([
        "agency-pager",
        "page",
        "--view",
        "trips",
        "--data",
        "trips.json",
        "--filter",
        "status=open",
        "--filter",
        "pax>=2",
        "--page",
        "-3",
        "--format",
        "table",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Table);
    match cli.command {
        Commands::Page { filters, page, page_size, .. } => {
            assert_eq!(filters, vec!["status=open", "pax>=2"]);
            assert_eq!(page, -3);
            assert_eq!(page_size, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_log_level_resolution() {
    let cli = Cli::try_parse_from(["agency-pager", "views"]).unwrap();
    assert_eq!(cli.log_level(), LogLevel::Info);

    let cli = Cli::try_parse_from(["agency-pager", "-v", "views"]).unwrap();
    assert_eq!(cli.log_level(), LogLevel::Debug);

    let cli = Cli::try_parse_from(["agency-pager", "-v", "--log-level", "warn", "views"]).unwrap();
    assert_eq!(cli.log_level(), LogLevel::Warn);
}

// ============================================================================
// Page Command Tests
// ============================================================================

#[test]
fn test_page_command_json() {
    let data = records_file(25);
    let path = data.path().to_str().unwrap();

    let out = run_json(&["agency-pager", "page", "--view", "reservations", "--data", path, "--page", "2"]);

    assert_eq!(out["view"], "reservations");
    assert_eq!(out["pagination"]["page"], 2);
    assert_eq!(out["pagination"]["offset"], 10);
    assert_eq!(out["pagination"]["page_count"], 3);
    assert_eq!(out["records"].as_array().unwrap().len(), 10);
}

#[test]
fn test_page_command_clamps_page() {
    let data = records_file(25);
    let path = data.path().to_str().unwrap();

    let out = run_json(&["agency-pager", "page", "--view", "reservations", "--data", path, "--page", "40"]);
    assert_eq!(out["pagination"]["page"], 3);
    assert_eq!(out["records"].as_array().unwrap().len(), 5);
}

#[test]
fn test_page_command_search_and_filters() {
    let data = records_file(50);
    let path = data.path().to_str().unwrap();

    let out = run_json(&[
        "agency-pager",
        "page",
        "--view",
        "reservations",
        "--data",
        path,
        "--search",
        "lisbon",
        "--filter",
        "status=confirmed",
    ]);

    assert_eq!(out["pagination"]["total_items"], 5);
    for record in out["records"].as_array().unwrap() {
        assert_eq!(record["destination"], "Lisbon");
        assert_eq!(record["status"], "confirmed");
    }
}

#[test]
fn test_page_size_override() {
    let data = records_file(25);
    let path = data.path().to_str().unwrap();

    let out = run_json(&["agency-pager", "page", "--view", "trips", "--data", path, "--page-size", "4"]);
    assert_eq!(out["pagination"]["page_size"], 4);
    assert_eq!(out["pagination"]["page_count"], 7);
}

#[test]
fn test_zero_page_size_override_rejected() {
    let data = records_file(5);
    let path = data.path().to_str().unwrap();

    let err = run(&["agency-pager", "page", "--view", "trips", "--data", path, "--page-size", "0"])
        .unwrap_err();
    assert!(err.is_user_error());
}

#[test]
fn test_bad_filter_rejected() {
    let data = records_file(5);
    let path = data.path().to_str().unwrap();

    let err = run(&["agency-pager", "page", "--view", "trips", "--data", path, "--filter", "status"])
        .unwrap_err();
    assert!(matches!(err, crate::Error::InvalidFilter { .. }));
}

#[test]
fn test_page_command_table() {
    let data = records_file(12);
    let path = data.path().to_str().unwrap();

    let out = run(&[
        "agency-pager",
        "page",
        "--view",
        "reservations",
        "--data",
        path,
        "--format",
        "table",
        "--page",
        "2",
    ])
    .unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "reservations: page 2/2 (items 11-12 of 12)");
    assert_eq!(lines[1], "code | customer.name | customer.email | destination");
    assert_eq!(lines.len(), 4);
    assert!(lines[2].contains("| - |"));
}

#[test]
fn test_page_command_table_empty() {
    let data = records_file(3);
    let path = data.path().to_str().unwrap();

    let out = run(&[
        "agency-pager",
        "page",
        "--view",
        "reservations",
        "--data",
        path,
        "--format",
        "table",
        "--search",
        "nowhere",
    ])
    .unwrap();
    assert_eq!(out, "reservations: no matching records");
}

// ============================================================================
// Validate / Views Command Tests
// ============================================================================

#[test]
fn test_validate_command() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "name: vendors\npage_size: 25\nsearch_fields: [name]").unwrap();
    let path = file.path().to_str().unwrap();

    let out = run_json(&["agency-pager", "validate", "--view", path]);
    assert_eq!(out["valid"], true);
    assert_eq!(out["view"]["name"], "vendors");
    assert_eq!(out["view"]["page_size"], 25);
}

#[test]
fn test_validate_command_rejects_invalid() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "name: vendors\npage_size: 0").unwrap();
    let path = file.path().to_str().unwrap();

    assert!(run(&["agency-pager", "validate", "--view", path]).is_err());
}

#[test]
fn test_views_command() {
    let out = run_json(&["agency-pager", "views"]);
    let names: Vec<&str> = out["views"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["reservations", "trips", "tasks", "categories", "notifications", "users"]
    );
}

#[test]
fn test_views_command_lists_every_builtin() {
    let out = run(&["agency-pager", "--format", "pretty", "views"]).unwrap();
    assert!(out.lines().count() > 1);

    let parsed: Value = serde_json::from_str(&out).unwrap();
    let listed = parsed["views"].as_array().unwrap();
    assert_eq!(listed.len(), crate::views::list_builtin().len());
    assert!(listed.iter().all(|v| v["page_size"].as_u64().unwrap() > 0));
}

#[test]
fn test_unknown_view_name_rejected() {
    let data = records_file(3);
    let path = data.path().to_str().unwrap();

    let err = run(&["agency-pager", "page", "--view", "invoices", "--data", path]).unwrap_err();
    assert!(matches!(err, crate::Error::ViewNotFound { .. }));
}

#[test]
fn test_views_command_table() {
    let out = run(&["agency-pager", "--format", "table", "views"]).unwrap();
    assert_eq!(out.lines().count(), 6);
    assert!(out.lines().next().unwrap().starts_with("reservations"));
}
