//! Comparison operations and the registry that maps operators to them.

use std::collections::HashMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use super::ast::{Literal, OperationType};
use super::error::{FilterError, FilterResult};
use super::predicate::Predicate;
use super::schema::{EnumVariant, FieldTable, FieldType};
use crate::record::Value;

/// Builds predicate fragments for one comparison operator.
///
/// Implementors provide one builder per comparable field type. The provided
/// [`create_predicate`](Operation::create_predicate) resolves the field and
/// picks the builder.
pub trait Operation: Send + Sync {
    /// The operator this operation handles.
    fn operation_type(&self) -> OperationType;

    /// Builds a predicate over an enum-valued field.
    fn enum_predicate(&self, field: &'static str, variant: EnumVariant) -> Predicate;

    /// Builds a predicate over an integer field.
    fn integer_predicate(&self, field: &'static str, value: i64) -> Predicate;

    /// Builds a predicate over a text field.
    fn text_predicate(&self, field: &'static str, value: String) -> Predicate;

    /// Builds a predicate over a date field.
    fn date_predicate(&self, field: &'static str, value: NaiveDate) -> Predicate;

    /// Builds a predicate over a time field.
    fn time_predicate(&self, field: &'static str, value: NaiveTime) -> Predicate;

    /// Resolves `field` in `table` and builds the predicate for `literal`.
    ///
    /// # Errors
    ///
    /// - `UnknownField` if the table has no such field (with a suggestion when
    ///   a close name exists).
    /// - `UnknownEnumVariant` if an enum field is compared with an undeclared
    ///   variant name.
    /// - `UnsupportedDataType` if the field's type has no builder.
    /// - `IncompatibleValueType` if the literal cannot be used with the field.
    fn create_predicate(
        &self,
        table: &FieldTable,
        field: &str,
        literal: &Literal,
    ) -> FilterResult<Predicate> {
        let def = table
            .lookup(field)
            .ok_or_else(|| FilterError::unknown_field(field, table.suggest(field)))?;

        match (def.field_type, literal) {
            (FieldType::Enum(enum_type), literal) => {
                let text = literal.as_text();
                let variant = enum_type
                    .variant(&text)
                    .ok_or_else(|| FilterError::unknown_variant(enum_type.name(), text))?;
                Ok(self.enum_predicate(def.name, variant))
            }
            (FieldType::Reference, _) => Err(FilterError::unsupported_type(def.field_type.name())),
            (FieldType::Integer, Literal::Integer(value)) => {
                Ok(self.integer_predicate(def.name, *value))
            }
            (FieldType::Text, Literal::Integer(value)) => {
                Ok(self.text_predicate(def.name, value.to_string()))
            }
            (FieldType::Text, Literal::Text(value)) => {
                Ok(self.text_predicate(def.name, value.clone()))
            }
            (FieldType::Date, Literal::Date(value)) => Ok(self.date_predicate(def.name, *value)),
            (FieldType::Time, Literal::Time(value)) => Ok(self.time_predicate(def.name, *value)),
            _ => Err(FilterError::incompatible(def.name)),
        }
    }
}

/// `eq`: field equals the value.
#[derive(Debug, Default, Clone, Copy)]
pub struct EqualOperation;

impl Operation for EqualOperation {
    fn operation_type(&self) -> OperationType {
        OperationType::Eq
    }

    fn enum_predicate(&self, field: &'static str, variant: EnumVariant) -> Predicate {
        Predicate::equal(field, Value::Enum(variant))
    }

    fn integer_predicate(&self, field: &'static str, value: i64) -> Predicate {
        Predicate::equal(field, Value::Integer(value))
    }

    fn text_predicate(&self, field: &'static str, value: String) -> Predicate {
        Predicate::equal(field, Value::Text(value))
    }

    fn date_predicate(&self, field: &'static str, value: NaiveDate) -> Predicate {
        Predicate::equal(field, Value::Date(value))
    }

    fn time_predicate(&self, field: &'static str, value: NaiveTime) -> Predicate {
        Predicate::equal(field, Value::Time(value))
    }
}

/// `ne`: field differs from the value.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotEqualOperation;

impl Operation for NotEqualOperation {
    fn operation_type(&self) -> OperationType {
        OperationType::Ne
    }

    fn enum_predicate(&self, field: &'static str, variant: EnumVariant) -> Predicate {
        Predicate::not_equal(field, Value::Enum(variant))
    }

    fn integer_predicate(&self, field: &'static str, value: i64) -> Predicate {
        Predicate::not_equal(field, Value::Integer(value))
    }

    fn text_predicate(&self, field: &'static str, value: String) -> Predicate {
        Predicate::not_equal(field, Value::Text(value))
    }

    fn date_predicate(&self, field: &'static str, value: NaiveDate) -> Predicate {
        Predicate::not_equal(field, Value::Date(value))
    }

    fn time_predicate(&self, field: &'static str, value: NaiveTime) -> Predicate {
        Predicate::not_equal(field, Value::Time(value))
    }
}

/// `gt`: field is strictly greater. Enums order by declaration.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreaterThanOperation;

impl Operation for GreaterThanOperation {
    fn operation_type(&self) -> OperationType {
        OperationType::Gt
    }

    fn enum_predicate(&self, field: &'static str, variant: EnumVariant) -> Predicate {
        Predicate::greater_than(field, Value::Enum(variant))
    }

    fn integer_predicate(&self, field: &'static str, value: i64) -> Predicate {
        Predicate::greater_than(field, Value::Integer(value))
    }

    fn text_predicate(&self, field: &'static str, value: String) -> Predicate {
        Predicate::greater_than(field, Value::Text(value))
    }

    fn date_predicate(&self, field: &'static str, value: NaiveDate) -> Predicate {
        Predicate::greater_than(field, Value::Date(value))
    }

    fn time_predicate(&self, field: &'static str, value: NaiveTime) -> Predicate {
        Predicate::greater_than(field, Value::Time(value))
    }
}

/// `lt`: field is strictly less. Enums order by declaration.
#[derive(Debug, Default, Clone, Copy)]
pub struct LessThanOperation;

impl Operation for LessThanOperation {
    fn operation_type(&self) -> OperationType {
        OperationType::Lt
    }

    fn enum_predicate(&self, field: &'static str, variant: EnumVariant) -> Predicate {
        Predicate::less_than(field, Value::Enum(variant))
    }

    fn integer_predicate(&self, field: &'static str, value: i64) -> Predicate {
        Predicate::less_than(field, Value::Integer(value))
    }

    fn text_predicate(&self, field: &'static str, value: String) -> Predicate {
        Predicate::less_than(field, Value::Text(value))
    }

    fn date_predicate(&self, field: &'static str, value: NaiveDate) -> Predicate {
        Predicate::less_than(field, Value::Date(value))
    }

    fn time_predicate(&self, field: &'static str, value: NaiveTime) -> Predicate {
        Predicate::less_than(field, Value::Time(value))
    }
}

/// Maps each [`OperationType`] to the operation that compiles it.
///
/// Built once and shared read-only; see [`FilterEngine`](super::FilterEngine).
///
/// # Example
///
/// ```
/// use whereclause_rs::filter::{OperationRegistry, OperationType};
///
/// let registry = OperationRegistry::standard();
/// assert!(registry.get(OperationType::Gt).is_some());
/// assert!(OperationRegistry::new().get(OperationType::Gt).is_none());
/// ```
pub struct OperationRegistry {
    operations: HashMap<OperationType, Box<dyn Operation>>,
}

impl OperationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    /// Creates a registry with `eq`, `ne`, `gt` and `lt`.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(EqualOperation);
        registry.register(NotEqualOperation);
        registry.register(GreaterThanOperation);
        registry.register(LessThanOperation);
        registry
    }

    /// Registers an operation under its own operation type, replacing any
    /// previous entry.
    pub fn register(&mut self, operation: impl Operation + 'static) {
        self.operations
            .insert(operation.operation_type(), Box::new(operation));
    }

    /// Returns the operation for an operator, if registered.
    pub fn get(&self, operation_type: OperationType) -> Option<&dyn Operation> {
        self.operations.get(&operation_type).map(Box::as_ref)
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<_> = self.operations.keys().copied().collect();
        registered.sort();
        f.debug_struct("OperationRegistry")
            .field("operations", &registered)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{EnumType, FieldDef};

    static SIZE: EnumType = EnumType::new("size", &["SMALL", "MEDIUM", "LARGE"]);

    static FIELDS: [FieldDef; 6] = [
        FieldDef::new("id", FieldType::Integer),
        FieldDef::new("label", FieldType::Text),
        FieldDef::new("size", FieldType::Enum(&SIZE)),
        FieldDef::new("shippedOn", FieldType::Date),
        FieldDef::new("shippedAt", FieldType::Time),
        FieldDef::new("owner", FieldType::Reference),
    ];

    static TABLE: FieldTable = FieldTable::new("parcel", &FIELDS);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_standard_registry_has_all_operations() {
        let registry = OperationRegistry::standard();
        for op in OperationType::ALL {
            assert_eq!(registry.get(op).unwrap().operation_type(), op);
        }
    }

    #[test]
    fn test_registry_debug_lists_operators() {
        let debug = format!("{:?}", OperationRegistry::standard());
        assert_eq!(debug, "OperationRegistry { operations: [Eq, Ne, Gt, Lt] }");
    }

    #[test]
    fn test_integer_dispatch() {
        let predicate = GreaterThanOperation
            .create_predicate(&TABLE, "ID", &Literal::Integer(7))
            .unwrap();
        assert_eq!(predicate, Predicate::greater_than("id", Value::Integer(7)));
    }

    #[test]
    fn test_integer_literal_against_text_field() {
        let predicate = EqualOperation
            .create_predicate(&TABLE, "label", &Literal::Integer(123))
            .unwrap();
        assert_eq!(predicate, Predicate::equal("label", Value::Text("123".into())));
    }

    #[test]
    fn test_text_literal_against_integer_field() {
        let err = EqualOperation
            .create_predicate(&TABLE, "id", &Literal::Text("text".into()))
            .unwrap_err();
        assert_eq!(err, FilterError::incompatible("id"));
    }

    #[test]
    fn test_date_and_time_dispatch() {
        let predicate = LessThanOperation
            .create_predicate(&TABLE, "shippedon", &Literal::Date(date(2019, 3, 28)))
            .unwrap();
        assert_eq!(
            predicate,
            Predicate::less_than("shippedOn", Value::Date(date(2019, 3, 28)))
        );

        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let predicate = NotEqualOperation
            .create_predicate(&TABLE, "shippedAt", &Literal::Time(noon))
            .unwrap();
        assert_eq!(predicate, Predicate::not_equal("shippedAt", Value::Time(noon)));
    }

    #[test]
    fn test_date_literal_against_time_field() {
        let err = EqualOperation
            .create_predicate(&TABLE, "shippedAt", &Literal::Date(date(2019, 3, 28)))
            .unwrap_err();
        assert_eq!(err, FilterError::incompatible("shippedAt"));
    }

    #[test]
    fn test_enum_dispatch() {
        let predicate = GreaterThanOperation
            .create_predicate(&TABLE, "size", &Literal::Text("SMALL".into()))
            .unwrap();
        let small = SIZE.variant("SMALL").unwrap();
        assert_eq!(predicate, Predicate::greater_than("size", Value::Enum(small)));
    }

    #[test]
    fn test_enum_unknown_variant() {
        let err = EqualOperation
            .create_predicate(&TABLE, "size", &Literal::Text("huge".into()))
            .unwrap_err();
        assert_eq!(err.to_string(), "'huge' size doesn't exist");
    }

    #[test]
    fn test_enum_with_integer_literal() {
        let err = EqualOperation
            .create_predicate(&TABLE, "size", &Literal::Integer(1))
            .unwrap_err();
        assert_eq!(err, FilterError::unknown_variant("size", "1"));
    }

    #[test]
    fn test_reference_field_is_unsupported() {
        let err = EqualOperation
            .create_predicate(&TABLE, "owner", &Literal::Text("bob".into()))
            .unwrap_err();
        assert_eq!(err.to_string(), "'reference' data type is not supported");
    }

    #[test]
    fn test_unknown_field_with_suggestion() {
        let err = EqualOperation
            .create_predicate(&TABLE, "lable", &Literal::Text("x".into()))
            .unwrap_err();
        assert_eq!(
            err,
            FilterError::unknown_field("lable", Some("label".to_string()))
        );
    }
}
