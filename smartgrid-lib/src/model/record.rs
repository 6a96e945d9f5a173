//! Dynamic row record

use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::Value;
use crate::error::FieldError;

/// One logical row of grid data.
///
/// Records hold cell values as a `HashMap<String, Value>`, keyed by column
/// id, allowing dynamic access to any cell. There is no compile-time link
/// between a column descriptor and a record's shape: a column id with no
/// matching key simply reads as an empty cell. Identity is positional —
/// a record is "row `i`" of the source collection and nothing more.
///
/// # Example
///
/// ```
/// use smartgrid_lib::model::Record;
///
/// let record = Record::new()
///     .set("name", "Contoso")
///     .set("revenue", 1_000_000i64);
///
/// assert_eq!(record.get_string("name").unwrap(), Some("Contoso"));
/// assert_eq!(record.cell_text("missing"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the cell value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the display text of a cell.
    ///
    /// A missing field or a `Null` value reads as the empty string; this is
    /// the normalization the filter stage and CSV export rely on.
    pub fn cell_text(&self, field: &str) -> String {
        self.fields
            .get(field)
            .map(Value::to_display_string)
            .unwrap_or_default()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a cell value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a cell value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Returns a copy of this record with the given updates applied on top.
    ///
    /// Updated fields win on key conflict; fields absent from `updates` keep
    /// their current value.
    pub fn merged(&self, updates: impl IntoIterator<Item = (String, Value)>) -> Record {
        let mut merged = self.clone();
        for (field, value) in updates {
            merged.fields.insert(field, value);
        }
        merged
    }

    // =========================================================================
    // Typed getters
    // =========================================================================

    /// Returns a string field value.
    ///
    /// Returns `Ok(None)` if the field is missing or null, and a
    /// [`FieldError::TypeMismatch`] if it holds a different kind of value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(FieldError::type_mismatch(field, "string", other.type_name())),
        }
    }

    /// Returns an integer field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Int(i)) => Ok(Some(*i)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Returns a float field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Float(f)) => Ok(Some(*f)),
            Some(Value::Int(i)) => Ok(Some(*i as f64)),
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Returns a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }

    /// Returns a decimal field value.
    pub fn get_decimal(&self, field: &str) -> Result<Option<Decimal>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Decimal(d)) => Ok(Some(*d)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "decimal",
                other.type_name(),
            )),
        }
    }

    /// Returns a GUID field value.
    pub fn get_guid(&self, field: &str) -> Result<Option<Uuid>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Guid(g)) => Ok(Some(*g)),
            Some(other) => Err(FieldError::type_mismatch(field, "guid", other.type_name())),
        }
    }

    /// Returns a datetime field value.
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::DateTime(dt)) => Ok(Some(*dt)),
            Some(other) => Err(FieldError::type_mismatch(
                field,
                "datetime",
                other.type_name(),
            )),
        }
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_normalization() {
        let record = Record::new().set("name", "Alice").set("gone", Value::Null);

        assert_eq!(record.cell_text("name"), "Alice");
        assert_eq!(record.cell_text("gone"), "");
        assert_eq!(record.cell_text("never_set"), "");
    }

    #[test]
    fn test_typed_getters() {
        let record = Record::new().set("name", "Alice").set("age", 30i64);

        assert_eq!(record.get_string("name").unwrap(), Some("Alice"));
        assert_eq!(record.get_int("age").unwrap(), Some(30));
        assert_eq!(record.get_string("missing").unwrap(), None);
        assert!(record.get_string("age").is_err());
    }

    #[test]
    fn test_merged_updates_win() {
        let record = Record::new().set("id", 1i64).set("name", "A");
        let merged = record.merged([("name".to_string(), Value::from("A2"))]);

        assert_eq!(merged.get_int("id").unwrap(), Some(1));
        assert_eq!(merged.get_string("name").unwrap(), Some("A2"));
        // The original is untouched.
        assert_eq!(record.get_string("name").unwrap(), Some("A"));
    }

    #[test]
    fn test_serde_map_shape() {
        let record = Record::new().set("id", 1i64).set("name", "Alice");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alice");

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
