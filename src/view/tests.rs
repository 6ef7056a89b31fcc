//! Tests for list view module

use super::*;
use crate::filter::{Criteria, Criterion};
use crate::loader::ViewDefinition;
use crate::pagination::PageChange;
use crate::types::{Record, SortDirection};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::cmp::Ordering;

fn reservations(n: usize) -> Vec<Record> {
    (1..=n)
        .map(|i| {
            json!({
                "id": i,
                "code": format!("RES-{i:03}"),
                "status": if i % 2 == 0 { "confirmed" } else { "pending" },
                "destination": if i % 5 == 0 { "Lisbon" } else { "Rome" },
            })
        })
        .collect()
}

fn definition() -> ViewDefinition {
    ViewDefinition::new("reservations")
        .with_page_size(10)
        .with_search_fields(["code", "destination"])
}

fn ids(records: &[&Record]) -> Vec<u64> {
    records.iter().map(|r| r["id"].as_u64().unwrap()).collect()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_new_view_is_empty() {
    let view = ListView::new(definition()).unwrap();
    assert!(view.is_empty());
    assert_eq!(view.filtered_len(), 0);
    assert_eq!(view.summary().page_count, 1);
    assert!(view.visible().is_empty());
}

#[test]
fn test_zero_page_size_rejected() {
    let err = ListView::new(definition().with_page_size(0)).unwrap_err();
    assert!(matches!(err, crate::Error::InvalidConfigValue { .. }));
}

#[test]
fn test_first_page_visible() {
    let view = ListView::with_records(definition(), reservations(25)).unwrap();
    assert_eq!(view.len(), 25);
    assert_eq!(view.filtered_len(), 25);
    assert_eq!(ids(&view.visible()), (1..=10).collect::<Vec<_>>());
}

// ============================================================================
// Navigation Tests
// ============================================================================

#[test]
fn test_navigation_slices_filtered_list() {
    let mut view = ListView::with_records(definition(), reservations(25)).unwrap();

    assert_eq!(view.next(), Some(PageChange { page: 2, offset: 10 }));
    assert_eq!(ids(&view.visible()), (11..=20).collect::<Vec<_>>());

    assert_eq!(view.go_to(99), Some(PageChange { page: 3, offset: 20 }));
    assert_eq!(ids(&view.visible()), (21..=25).collect::<Vec<_>>());

    assert_eq!(view.next(), None);
    assert_eq!(view.prev(), Some(PageChange { page: 2, offset: 10 }));
    assert_eq!(view.reset(), Some(PageChange { page: 1, offset: 0 }));
    assert_eq!(view.last(), Some(PageChange { page: 3, offset: 20 }));
}

#[test]
fn test_page_snapshot() {
    let mut view = ListView::with_records(definition(), reservations(12)).unwrap();
    view.next();

    let page = view.page();
    assert_eq!(page.view, "reservations");
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.pagination.offset, 10);
    assert_eq!(page.records.len(), 2);
    assert_eq!(page.records[0]["id"], json!(11));
}

// ============================================================================
// Criteria Tests
// ============================================================================

#[test]
fn test_search_resets_to_first_page() {
    let mut view = ListView::with_records(definition(), reservations(50)).unwrap();
    view.go_to(4);

    let change = view.set_search("lisbon");
    assert_eq!(change, Some(PageChange { page: 1, offset: 0 }));
    assert_eq!(view.filtered_len(), 10);
    assert_eq!(ids(&view.visible()), vec![5, 10, 15, 20, 25, 30, 35, 40, 45, 50]);
}

#[test]
fn test_search_on_first_page_reports_nothing() {
    let mut view = ListView::with_records(definition(), reservations(50)).unwrap();
    assert_eq!(view.set_search("RES-00"), None);
    assert_eq!(view.filtered_len(), 9);
    assert_eq!(view.set_search("RES-00"), None);
}

#[test]
fn test_blank_search_matches_everything() {
    let mut view = ListView::with_records(definition(), reservations(20)).unwrap();
    view.set_search("   ");
    assert_eq!(view.filtered_len(), 20);
}

#[test]
fn test_criteria_change_resets_even_when_page_survives() {
    let mut view = ListView::with_records(definition(), reservations(50)).unwrap();
    view.go_to(2);

    view.add_criterion(Criterion::equals("status", "pending"));
    assert_eq!(view.filtered_len(), 25);
    assert_eq!(view.summary().page, 1);
    assert_eq!(ids(&view.visible())[..3].to_vec(), vec![1, 3, 5]);
}

#[test]
fn test_set_and_clear_criteria() {
    let mut view = ListView::with_records(definition(), reservations(30)).unwrap();
    view.set_search("rome");
    view.set_criteria(Criteria::new().with(Criterion::equals("status", "confirmed")));
    assert_eq!(view.criteria().len(), 1);
    assert_eq!(view.filtered_len(), 12);

    view.go_to(2);
    assert_eq!(view.clear_criteria(), Some(PageChange { page: 1, offset: 0 }));
    assert!(view.criteria().is_empty());
    assert_eq!(view.search(), "");
    assert_eq!(view.filtered_len(), 30);
}

#[test]
fn test_default_filters_always_apply() {
    let def = definition()
        .with_filters(Criteria::new().with(Criterion::equals("status", "confirmed")));
    let mut view = ListView::with_records(def, reservations(20)).unwrap();
    assert_eq!(view.filtered_len(), 10);

    view.clear_criteria();
    assert_eq!(view.filtered_len(), 10);
    assert!(view.filtered().all(|r| r["status"] == "confirmed"));
}

// ============================================================================
// Source Replacement Tests
// ============================================================================

#[test]
fn test_reload_keeps_page_when_it_still_exists() {
    let mut view = ListView::with_records(definition(), reservations(50)).unwrap();
    view.go_to(2);

    assert_eq!(view.set_records(reservations(40)), None);
    assert_eq!(view.summary().page, 2);
}

#[test]
fn test_reload_shrink_clamps_page() {
    let mut view = ListView::with_records(definition(), reservations(50)).unwrap();
    view.go_to(5);
    assert_eq!(view.summary().offset, 40);

    let change = view.set_records(reservations(12));
    assert_eq!(change, Some(PageChange { page: 2, offset: 10 }));
    assert_eq!(view.summary().page_count, 2);
    assert_eq!(ids(&view.visible()), vec![11, 12]);
}

#[test]
fn test_reload_to_empty() {
    let mut view = ListView::with_records(definition(), reservations(30)).unwrap();
    view.last();
    view.set_records(Vec::new());
    assert_eq!(view.summary().page, 1);
    assert!(view.visible().is_empty());
}

// ============================================================================
// Sorting Tests
// ============================================================================

#[test]
fn test_sorted_view() {
    let def = definition()
        .with_page_size(3)
        .with_sort("departure", SortDirection::Desc);
    let records = vec![
        json!({"id": 1, "departure": "2024-05-02"}),
        json!({"id": 2}),
        json!({"id": 3, "departure": "2024-07-20"}),
        json!({"id": 4, "departure": "2024-06-11"}),
        json!({"id": 5, "departure": null}),
    ];
    let mut view = ListView::with_records(def, records).unwrap();

    assert_eq!(ids(&view.visible()), vec![3, 4, 1]);
    view.next();
    assert_eq!(ids(&view.visible()), vec![2, 5]);
}

#[test]
fn test_compare_fields() {
    let a = json!({"n": 2, "s": "b", "flag": false});
    let b = json!({"n": 10, "s": "a", "flag": true});
    let missing = json!({});

    assert_eq!(compare_fields(&a, &b, "n", SortDirection::Asc), Ordering::Less);
    assert_eq!(compare_fields(&a, &b, "s", SortDirection::Asc), Ordering::Greater);
    assert_eq!(compare_fields(&a, &b, "flag", SortDirection::Desc), Ordering::Greater);
    assert_eq!(compare_fields(&missing, &a, "n", SortDirection::Asc), Ordering::Greater);
    assert_eq!(compare_fields(&missing, &a, "n", SortDirection::Desc), Ordering::Greater);
    assert_eq!(compare_fields(&missing, &missing, "n", SortDirection::Asc), Ordering::Equal);
}

#[test]
fn test_sort_is_stable() {
    let def = definition().with_sort("status", SortDirection::Asc);
    let view = ListView::with_records(def, reservations(6)).unwrap();
    let ordered: Vec<u64> = view.filtered().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ordered, vec![2, 4, 6, 1, 3, 5]);
}

// ============================================================================
// Independence Tests
// ============================================================================

#[test]
fn test_independent_views_share_nothing() {
    let trips = ViewDefinition::new("trips").with_page_size(5);
    let tasks = ViewDefinition::new("tasks").with_page_size(5);
    let records: Vec<Value> = reservations(20);

    let mut trip_view = ListView::with_records(trips, records.clone()).unwrap();
    let mut task_view = ListView::with_records(tasks, records).unwrap();

    trip_view.go_to(3);
    task_view.set_search("lisbon");

    assert_eq!(trip_view.summary().page, 3);
    assert_eq!(trip_view.filtered_len(), 20);
    assert_eq!(task_view.summary().page, 1);
    assert_eq!(task_view.filtered_len(), 4);
}
