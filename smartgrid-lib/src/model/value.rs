//! Value enum for dynamic cell values

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// A dynamic value that can be stored in a grid cell.
///
/// Cells are untyped: a record maps column ids to `Value`s, and nothing ties
/// a column to one value kind. The enum covers the scalar kinds a cell can
/// hold; everything the grid does with a cell goes through either
/// [`to_display_string`](Value::to_display_string) (filtering, CSV export,
/// default rendering) or [`compare`](Value::compare) (sorting).
///
/// # Example
///
/// ```
/// use smartgrid_lib::model::Value;
///
/// let name = Value::from("Contoso");
/// let revenue = Value::from(1_000_000i64);
/// let active = Value::from(true);
/// let empty = Value::Null;
///
/// assert_eq!(revenue.to_display_string(), "1000000");
/// assert_eq!(empty.to_display_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Arbitrary precision decimal. Serializes as a string, so an untagged
    /// deserialize will never produce this variant; it exists for typed
    /// construction by the host.
    Decimal(Decimal),
    /// GUID/UUID value. Same deserialize caveat as `Decimal`.
    Guid(Uuid),
    /// Date and time with timezone. Same deserialize caveat as `Decimal`.
    DateTime(DateTime<Utc>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Decimal(_) => "decimal",
            Value::Guid(_) => "guid",
            Value::DateTime(_) => "datetime",
        }
    }

    /// Converts the value to its display text.
    ///
    /// This is the stringification used by the filter stage, CSV export and
    /// default cell rendering: default string conversion for numbers and
    /// booleans, RFC 3339 for datetimes, and the empty string for `Null`.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
            Value::Decimal(d) => d.to_string(),
            Value::Guid(g) => g.to_string(),
            Value::DateTime(dt) => dt.to_rfc3339(),
        }
    }

    /// Three-way comparison used by the sort stage.
    ///
    /// Values of the same kind compare naturally; the numeric kinds
    /// (`Int`, `Float`, `Decimal`) compare with each other numerically.
    /// `Int` and `Decimal` compare exactly; only mixes involving `Float`
    /// go through `f64`. `Null` and values of incomparable kinds compare
    /// `Equal`, so a stable sort leaves their relative order untouched.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Decimal(a), Value::Decimal(b)) => a.cmp(b),
            (Value::Int(a), Value::Decimal(b)) => Decimal::from(*a).cmp(b),
            (Value::Decimal(a), Value::Int(b)) => a.cmp(&Decimal::from(*b)),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Guid(a), Value::Guid(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            _ => match (self.as_numeric(), other.as_numeric()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        }
    }

    /// Returns the numeric interpretation of the value, if it has one.
    fn as_numeric(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Decimal(d) => d.to_f64(),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Guid(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTime(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_string() {
        assert_eq!(Value::Null.to_display_string(), "");
        assert_eq!(Value::Bool(true).to_display_string(), "true");
        assert_eq!(Value::Int(42).to_display_string(), "42");
        assert_eq!(Value::Float(1.5).to_display_string(), "1.5");
        assert_eq!(Value::from("hello").to_display_string(), "hello");
    }

    #[test]
    fn test_compare_same_kind() {
        assert_eq!(Value::Int(1).compare(&Value::Int(2)), Ordering::Less);
        assert_eq!(
            Value::from("banana").compare(&Value::from("apple")),
            Ordering::Greater
        );
        assert_eq!(
            Value::Bool(false).compare(&Value::Bool(true)),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_numeric_family() {
        assert_eq!(Value::Int(2).compare(&Value::Float(2.5)), Ordering::Less);
        assert_eq!(
            Value::Float(3.0).compare(&Value::Int(3)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_decimal_is_exact() {
        // Distinct past f64 precision; a lossy comparison would call these
        // equal.
        let a: Decimal = "1.0000000000000000000000000001".parse().unwrap();
        let b: Decimal = "1.0000000000000000000000000002".parse().unwrap();

        assert_eq!(Value::Decimal(a).compare(&Value::Decimal(b)), Ordering::Less);
        assert_eq!(
            Value::Decimal(b).compare(&Value::Decimal(a)),
            Ordering::Greater
        );
        assert_eq!(
            Value::Decimal(a).compare(&Value::Decimal(a)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_int_decimal_is_exact() {
        let just_over: Decimal = "3.0000000000000000000000000001".parse().unwrap();

        assert_eq!(
            Value::Int(3).compare(&Value::Decimal(just_over)),
            Ordering::Less
        );
        assert_eq!(
            Value::Decimal(just_over).compare(&Value::Int(3)),
            Ordering::Greater
        );
        assert_eq!(
            Value::Int(3).compare(&Value::Decimal(Decimal::from(3))),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_incomparable_is_equal() {
        assert_eq!(Value::Null.compare(&Value::Int(1)), Ordering::Equal);
        assert_eq!(
            Value::from("abc").compare(&Value::Int(1)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_untagged_deserialize() {
        assert_eq!(serde_json::from_str::<Value>("null").unwrap(), Value::Null);
        assert_eq!(
            serde_json::from_str::<Value>("true").unwrap(),
            Value::Bool(true)
        );
        assert_eq!(serde_json::from_str::<Value>("7").unwrap(), Value::Int(7));
        assert_eq!(
            serde_json::from_str::<Value>("1.25").unwrap(),
            Value::Float(1.25)
        );
        assert_eq!(
            serde_json::from_str::<Value>("\"hi\"").unwrap(),
            Value::from("hi")
        );
    }
}
