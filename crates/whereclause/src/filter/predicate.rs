//! Compiled predicates evaluated against records.

use std::cmp::Ordering;
use std::fmt;

use super::ast::OperationType;
use crate::record::{Record, Value};

/// A compiled, type-checked boolean predicate.
///
/// Predicates are produced by the [`PredicateCompiler`](super::PredicateCompiler)
/// from filter text, or built directly by callers for extra constraints such
/// as ownership scoping.
///
/// # Example
///
/// ```
/// use whereclause_rs::filter::Predicate;
/// use whereclause_rs::Value;
///
/// let owned = Predicate::equal("user", Value::Text("alice".to_string()));
/// let recent = Predicate::greater_than("distance", Value::Integer(1000));
/// let scoped = Predicate::and(owned, recent);
/// assert_eq!(scoped.to_string(), "(user = 'alice' AND distance > 1000)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Compares a field against an operand.
    Compare {
        /// Canonical field name.
        field: &'static str,
        /// Comparison to apply.
        op: OperationType,
        /// Right-hand side value.
        operand: Value,
    },

    /// Both predicates hold.
    And(Box<Predicate>, Box<Predicate>),

    /// At least one predicate holds.
    Or(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
    /// Creates a comparison leaf.
    pub fn compare(field: &'static str, op: OperationType, operand: Value) -> Self {
        Predicate::Compare { field, op, operand }
    }

    /// `field = operand`
    pub fn equal(field: &'static str, operand: Value) -> Self {
        Self::compare(field, OperationType::Eq, operand)
    }

    /// `field <> operand`
    pub fn not_equal(field: &'static str, operand: Value) -> Self {
        Self::compare(field, OperationType::Ne, operand)
    }

    /// `field > operand`
    pub fn greater_than(field: &'static str, operand: Value) -> Self {
        Self::compare(field, OperationType::Gt, operand)
    }

    /// `field < operand`
    pub fn less_than(field: &'static str, operand: Value) -> Self {
        Self::compare(field, OperationType::Lt, operand)
    }

    /// Conjunction of two predicates.
    pub fn and(left: Predicate, right: Predicate) -> Self {
        Predicate::And(Box::new(left), Box::new(right))
    }

    /// Disjunction of two predicates.
    pub fn or(left: Predicate, right: Predicate) -> Self {
        Predicate::Or(Box::new(left), Box::new(right))
    }

    /// Returns true if the record satisfies the predicate.
    ///
    /// A comparison whose field is missing, `Null`, or of a different kind
    /// than the operand is false for every operator, `ne` included.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            Predicate::Compare { field, op, operand } => record
                .field_value(field)
                .and_then(|value| value.compare(operand))
                .is_some_and(|ordering| holds(*op, ordering)),
            Predicate::And(left, right) => left.matches(record) && right.matches(record),
            Predicate::Or(left, right) => left.matches(record) || right.matches(record),
        }
    }
}

/// Whether a comparison outcome satisfies the operator.
fn holds(op: OperationType, ordering: Ordering) -> bool {
    match op {
        OperationType::Eq => ordering == Ordering::Equal,
        OperationType::Ne => ordering != Ordering::Equal,
        OperationType::Gt => ordering == Ordering::Greater,
        OperationType::Lt => ordering == Ordering::Less,
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Compare { field, op, operand } => {
                let symbol = match op {
                    OperationType::Eq => "=",
                    OperationType::Ne => "<>",
                    OperationType::Gt => ">",
                    OperationType::Lt => "<",
                };
                write!(f, "{field} {symbol} {operand}")
            }
            Predicate::And(left, right) => write!(f, "({left} AND {right})"),
            Predicate::Or(left, right) => write!(f, "({left} OR {right})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FieldTable;

    struct Row {
        id: i64,
        note: Option<String>,
    }

    static FIELDS: [crate::filter::FieldDef; 0] = [];
    static TABLE: FieldTable = FieldTable::new("row", &FIELDS);

    impl Record for Row {
        fn field_table() -> &'static FieldTable {
            &TABLE
        }

        fn field_value(&self, field: &str) -> Option<Value> {
            match field {
                "id" => Some(Value::Integer(self.id)),
                "note" => Some(Value::from(self.note.clone())),
                _ => None,
            }
        }
    }

    fn row(id: i64, note: Option<&str>) -> Row {
        Row {
            id,
            note: note.map(str::to_string),
        }
    }

    #[test]
    fn test_compare_operators() {
        let r = row(5, None);
        assert!(Predicate::equal("id", Value::Integer(5)).matches(&r));
        assert!(Predicate::not_equal("id", Value::Integer(4)).matches(&r));
        assert!(Predicate::greater_than("id", Value::Integer(4)).matches(&r));
        assert!(Predicate::less_than("id", Value::Integer(6)).matches(&r));
        assert!(!Predicate::greater_than("id", Value::Integer(5)).matches(&r));
        assert!(!Predicate::less_than("id", Value::Integer(5)).matches(&r));
    }

    #[test]
    fn test_null_never_matches() {
        let r = row(1, None);
        assert!(!Predicate::equal("note", Value::Text("x".into())).matches(&r));
        assert!(!Predicate::not_equal("note", Value::Text("x".into())).matches(&r));
    }

    #[test]
    fn test_missing_field_never_matches() {
        let r = row(1, Some("x"));
        assert!(!Predicate::not_equal("other", Value::Integer(1)).matches(&r));
    }

    #[test]
    fn test_and_or() {
        let r = row(3, Some("x"));
        let is_three = Predicate::equal("id", Value::Integer(3));
        let is_y = Predicate::equal("note", Value::Text("y".into()));
        assert!(!Predicate::and(is_three.clone(), is_y.clone()).matches(&r));
        assert!(Predicate::or(is_three, is_y).matches(&r));
    }

    #[test]
    fn test_display() {
        let predicate = Predicate::or(
            Predicate::not_equal("id", Value::Integer(3)),
            Predicate::less_than("note", Value::Text("m".into())),
        );
        assert_eq!(predicate.to_string(), "(id <> 3 OR note < 'm')");
    }
}
