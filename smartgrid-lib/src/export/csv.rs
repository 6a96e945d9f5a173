//! CSV serialization

use crate::model::Column;
use crate::model::Record;
use crate::model::Value;

/// Serializes records to CSV in column order.
///
/// The first line is the comma-joined column labels; each following line is
/// one record's raw cell values. A *string* value containing a comma is
/// wrapped in double quotes; embedded quotes and newlines are passed through
/// untouched. This matches the exporter this grid is compatible with and is
/// deliberately not RFC 4180 compliant.
///
/// # Example
///
/// ```
/// use smartgrid_lib::export::to_csv;
/// use smartgrid_lib::model::{Column, Record};
///
/// let columns = vec![Column::new("id", "ID"), Column::new("name", "Name")];
/// let records = vec![Record::new().set("id", 1i64).set("name", "Alice")];
///
/// assert_eq!(to_csv(&records, &columns), "ID,Name\n1,Alice");
/// ```
pub fn to_csv(records: &[Record], columns: &[Column]) -> String {
    let header = columns
        .iter()
        .map(Column::label)
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(header);

    for record in records {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| cell_field(record.get(column.id())))
            .collect();
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

fn cell_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if s.contains(',') => format!("\"{s}\""),
        Some(value) => value.to_display_string(),
        None => String::new(),
    }
}
