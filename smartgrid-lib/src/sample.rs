//! Sample data generator
//!
//! Deterministic demo records for examples, benchmarks and manual testing.

use crate::model::Column;
use crate::model::Record;

const ROLES: [&str; 4] = ["Admin", "User", "Manager", "Viewer"];
const STATUS: [&str; 3] = ["Active", "Inactive", "Pending"];

/// Generates `count` demo user records.
///
/// Rows rotate through a fixed set of roles and statuses, so any count
/// exercises every value without randomness:
///
/// ```
/// use smartgrid_lib::sample;
///
/// let users = sample::users(3);
/// assert_eq!(users[0].get_string("role").unwrap(), Some("Admin"));
/// assert_eq!(users[1].get_string("email").unwrap(), Some("user2@example.com"));
/// ```
pub fn users(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            Record::new()
                .set("id", (i + 1) as i64)
                .set("name", format!("User {}", i + 1))
                .set("email", format!("user{}@example.com", i + 1))
                .set("role", ROLES[i % ROLES.len()])
                .set("status", STATUS[i % STATUS.len()])
        })
        .collect()
}

/// Returns the column set matching [`users`].
pub fn user_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").sortable(true),
        Column::new("name", "Name").sortable(true),
        Column::new("email", "Email"),
        Column::new("role", "Role").sortable(true),
        Column::new("status", "Status").sortable(true),
    ]
}
