//! Sort stage: single-column, direction-toggling ordering

use std::cmp::Ordering;

use super::VisibleRow;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The active sort: at most one column at a time.
///
/// Selecting a new column sorts it ascending; selecting the active column
/// again flips the direction. With no column selected the sort stage is the
/// identity.
///
/// # Example
///
/// ```
/// use smartgrid_lib::pipeline::{Direction, SortState};
///
/// let mut sort = SortState::new();
/// sort.toggle("name");
/// assert_eq!(sort.column(), Some("name"));
/// assert_eq!(sort.direction(), Direction::Asc);
///
/// sort.toggle("name");
/// assert_eq!(sort.direction(), Direction::Desc);
///
/// sort.toggle("age");
/// assert_eq!(sort.column(), Some("age"));
/// assert_eq!(sort.direction(), Direction::Asc);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    column: Option<String>,
    direction: Direction,
}

impl SortState {
    /// Creates a sort state with no active column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active sort column, if any.
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Returns the current direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Selects a column, or flips the direction if it is already selected.
    pub fn toggle(&mut self, column_id: impl Into<String>) {
        let column_id = column_id.into();
        if self.column.as_deref() == Some(column_id.as_str()) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(column_id);
            self.direction = Direction::Asc;
        }
    }

    /// Clears the active sort.
    pub fn reset(&mut self) {
        self.column = None;
        self.direction = Direction::Asc;
    }
}

/// Orders the rows by the active sort column.
///
/// Uses a stable sort over [`Value::compare`](crate::model::Value::compare)
/// on the raw cell values (not their display text), so rows with equal or
/// incomparable keys keep their filtered order. Missing cells compare equal
/// to everything and therefore stay where they are.
pub fn apply<'a>(mut rows: Vec<VisibleRow<'a>>, sort: &SortState) -> Vec<VisibleRow<'a>> {
    let Some(column_id) = sort.column() else {
        return rows;
    };

    rows.sort_by(|a, b| {
        let ordering = match (a.record.get(column_id), b.record.get(column_id)) {
            (Some(a), Some(b)) => a.compare(b),
            _ => Ordering::Equal,
        };
        match sort.direction() {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });
    rows
}
