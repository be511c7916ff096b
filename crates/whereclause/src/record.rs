//! Records that filters can be evaluated against.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use crate::filter::{EnumVariant, FieldTable};

/// A runtime field value, or a predicate operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A resolved enum variant.
    Enum(EnumVariant),
    /// A whole number.
    Integer(i64),
    /// Text.
    Text(String),
    /// A calendar date.
    Date(NaiveDate),
    /// A time of day.
    Time(NaiveTime),
    /// An absent value. Never equal, greater or less than anything.
    Null,
}

impl Value {
    /// Compares two values of the same kind.
    ///
    /// Returns `None` when the kinds differ or either side is `Null`, which
    /// makes every comparison against it false.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Enum(a), Value::Enum(b)) => Some(a.cmp(b)),
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::Time(a), Value::Time(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        value.map_or(Value::Null, Value::Text)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Enum(variant) => write!(f, "'{variant}'"),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Text(value) => write!(f, "'{value}'"),
            Value::Date(value) => write!(f, "'{}'", value.format("%Y-%m-%d")),
            Value::Time(value) => write!(f, "'{}'", value.format("%H:%M:%S")),
            Value::Null => f.write_str("NULL"),
        }
    }
}

/// A structured record exposing named fields to filters.
///
/// `field_value` receives canonical field names as declared in the record's
/// [`FieldTable`], so implementations can match them exactly.
pub trait Record {
    /// The fields this record type exposes to filter expressions.
    fn field_table() -> &'static FieldTable
    where
        Self: Sized;

    /// Returns the value of a field, or `None` if the record has no such field.
    fn field_value(&self, field: &str) -> Option<Value>;
}
