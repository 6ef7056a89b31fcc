//! Built-in list view definitions embedded in the binary
//!
//! This module embeds the YAML definitions of the CRM list screens directly into
//! the binary, allowing users to pass `--view reservations` instead of a file path.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in view YAML definitions
pub static BUILTIN_VIEWS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Sales
    m.insert("reservations", include_str!("../views/reservations.yaml"));
    m.insert("bookings", include_str!("../views/reservations.yaml"));

    // Operations
    m.insert("trips", include_str!("../views/trips.yaml"));
    m.insert("operations", include_str!("../views/trips.yaml"));
    m.insert("tasks", include_str!("../views/tasks.yaml"));

    // Administration
    m.insert("categories", include_str!("../views/categories.yaml"));
    m.insert("notifications", include_str!("../views/notifications.yaml"));
    m.insert("users", include_str!("../views/users.yaml"));

    m
});

/// Get a built-in view by name
pub fn get_builtin(name: &str) -> Option<&'static str> {
    BUILTIN_VIEWS.get(name).copied()
}

/// Check if a view name is a built-in view
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_VIEWS.contains_key(name)
}

/// List all built-in view names (primary names only)
pub fn list_builtin() -> Vec<&'static str> {
    vec![
        "reservations",
        "trips",
        "tasks",
        "categories",
        "notifications",
        "users",
    ]
}
