//! JSON serialization

use crate::error::ExportError;
use crate::model::Record;

/// Serializes the record array to pretty-printed JSON (2-space indent).
///
/// Only raw record data is serialized; column metadata and cell renderers
/// never appear in the output.
///
/// # Example
///
/// ```
/// use smartgrid_lib::export::to_json;
/// use smartgrid_lib::model::Record;
///
/// let records = vec![Record::new().set("id", 1i64)];
/// let json = to_json(&records).unwrap();
/// assert_eq!(json, "[\n  {\n    \"id\": 1\n  }\n]");
/// ```
pub fn to_json(records: &[Record]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let records = vec![
            Record::new().set("id", 1i64).set("name", "Alice"),
            Record::new().set("id", 2i64).set("active", true),
        ];

        let json = to_json(&records).unwrap();
        let back: Vec<Record> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_two_space_indent() {
        let records = vec![Record::new().set("id", 1i64)];
        let json = to_json(&records).unwrap();
        assert!(json.contains("\n  {"));
        assert!(json.contains("\n    \"id\": 1"));
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
