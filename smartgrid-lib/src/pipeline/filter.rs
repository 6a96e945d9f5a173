//! Filter stage: per-column substring queries

use std::collections::HashMap;

use super::VisibleRow;
use crate::model::Column;
use crate::model::Record;

/// Per-column substring filter queries.
///
/// Maps column ids to case-insensitive substring queries. An absent entry
/// (or an empty query) means "no filter for this column". A record passes
/// when, for every column, the lower-cased display text of its cell contains
/// the lower-cased query.
///
/// # Example
///
/// ```
/// use smartgrid_lib::pipeline::FilterState;
///
/// let mut filters = FilterState::new();
/// filters.set("name", "ali");
/// assert_eq!(filters.query("name"), Some("ali"));
/// assert_eq!(filters.query("role"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    queries: HashMap<String, String>,
}

impl FilterState {
    /// Creates an empty filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query for a column, replacing any previous query.
    pub fn set(&mut self, column_id: impl Into<String>, query: impl Into<String>) {
        self.queries.insert(column_id.into(), query.into());
    }

    /// Removes the query for a column.
    pub fn clear(&mut self, column_id: &str) {
        self.queries.remove(column_id);
    }

    /// Removes all queries.
    pub fn clear_all(&mut self) {
        self.queries.clear();
    }

    /// Returns the query for a column, if one is set.
    pub fn query(&self, column_id: &str) -> Option<&str> {
        self.queries.get(column_id).map(String::as_str)
    }

    /// Returns `true` if no queries are set.
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Returns `true` if the record passes every column's query.
    ///
    /// Missing cells read as empty strings, so any non-empty query on a
    /// column the record lacks rejects it.
    pub fn matches(&self, record: &Record, columns: &[Column]) -> bool {
        columns.iter().all(|column| {
            let query = self
                .queries
                .get(column.id())
                .map(|q| q.to_lowercase())
                .unwrap_or_default();
            record
                .cell_text(column.id())
                .to_lowercase()
                .contains(&query)
        })
    }
}

/// Retains the records that pass every active filter, pairing each with its
/// source index.
pub fn apply<'a>(
    records: &'a [Record],
    columns: &[Column],
    filters: &FilterState,
) -> Vec<VisibleRow<'a>> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filters.matches(record, columns))
        .map(|(source_index, record)| VisibleRow {
            source_index,
            record,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![Column::new("name", "Name"), Column::new("role", "Role")]
    }

    fn records() -> Vec<Record> {
        vec![
            Record::new().set("name", "Alice").set("role", "Admin"),
            Record::new().set("name", "Bob").set("role", "User"),
            Record::new().set("name", "Carol").set("role", "Admin"),
        ]
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        let records = records();
        let rows = apply(&records, &columns(), &FilterState::new());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].source_index, 0);
        assert_eq!(rows[2].source_index, 2);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let records = records();
        let mut filters = FilterState::new();
        filters.set("name", "ALI");

        let rows = apply(&records, &columns(), &filters);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.cell_text("name"), "Alice");
    }

    #[test]
    fn test_all_columns_must_match() {
        let records = records();
        let mut filters = FilterState::new();
        filters.set("role", "admin");
        filters.set("name", "car");

        let rows = apply(&records, &columns(), &filters);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].source_index, 2);
    }

    #[test]
    fn test_missing_cell_reads_as_empty() {
        let records = vec![Record::new().set("name", "NoRole")];
        let mut filters = FilterState::new();
        filters.set("role", "admin");

        assert!(apply(&records, &columns(), &filters).is_empty());

        // An empty query matches the empty cell.
        filters.set("role", "");
        assert_eq!(apply(&records, &columns(), &filters).len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = records();
        let mut filters = FilterState::new();
        filters.set("role", "admin");

        let once: Vec<usize> = apply(&records, &columns(), &filters)
            .iter()
            .map(|r| r.source_index)
            .collect();
        // Re-filtering the surviving records keeps them all.
        let survivors: Vec<Record> = once.iter().map(|&i| records[i].clone()).collect();
        let twice = apply(&survivors, &columns(), &filters);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_non_string_values_are_stringified() {
        let records = vec![
            Record::new().set("name", 42i64),
            Record::new().set("name", true),
        ];
        let mut filters = FilterState::new();
        filters.set("name", "4");
        assert_eq!(apply(&records, &columns(), &filters).len(), 1);

        filters.set("name", "tru");
        let rows = apply(&records, &columns(), &filters);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].source_index, 1);
    }
}
