//! Error types for filter tokenizing, parsing and compilation.

use thiserror::Error;

/// A specialized Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while turning filter text into a predicate.
///
/// Lexical and syntax errors render with the `invalid filter expression`
/// marker followed by the parser details. Semantic errors name the offending
/// field, value or type directly.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A character sequence that matches no token production.
    #[error("invalid filter expression. Details: token recognition error at: '{text}'")]
    Lexical {
        /// The unrecognized text.
        text: String,
        /// Byte offset where the unrecognized text starts.
        position: usize,
    },

    /// The token stream violates the grammar.
    #[error("invalid filter expression. Details: {}", syntax_details(.missing, .expected, .found))]
    Syntax {
        /// Description of the acceptable token set, e.g. `{<EOF>, AND, OR}`.
        expected: String,
        /// The text of the token actually found.
        found: String,
        /// Byte offset of the offending token.
        position: usize,
        /// Whether a single required token was absent rather than mismatched.
        missing: bool,
    },

    /// The identifier is not part of the record type's field table.
    #[error("'{field}' field doesn't exist{}", suggestion_hint(.suggestion))]
    UnknownField {
        /// The identifier as written in the filter.
        field: String,
        /// A close field name, if one exists.
        suggestion: Option<String>,
    },

    /// The literal cannot be used with the field it is compared against.
    #[error("Value type doesn't correspond to field data type")]
    IncompatibleValueType {
        /// The field the literal was compared against.
        field: String,
    },

    /// The value does not name a declared variant of an enum field.
    #[error("'{value}' {field} doesn't exist")]
    UnknownEnumVariant {
        /// The enum field name (e.g. `role`).
        field: String,
        /// The unmatched value.
        value: String,
    },

    /// The field's data type has no predicate builder.
    #[error("'{data_type}' data type is not supported")]
    UnsupportedDataType {
        /// Name of the unsupported data type.
        data_type: String,
    },

    /// The operation registry has no entry for the operator.
    #[error("'{operation}' operation is not supported")]
    UnsupportedOperation {
        /// The operator keyword.
        operation: String,
    },
}

fn syntax_details(missing: &bool, expected: &str, found: &str) -> String {
    if *missing {
        format!("missing {expected} at '{found}'")
    } else {
        format!("mismatched input '{found}' expecting {expected}")
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(". Did you mean '{name}'?"),
        None => String::new(),
    }
}

impl FilterError {
    /// Creates a lexical error.
    pub fn lexical(text: impl Into<String>, position: usize) -> Self {
        FilterError::Lexical {
            text: text.into(),
            position,
        }
    }

    /// Creates a mismatched-input syntax error.
    pub fn mismatched(expected: impl Into<String>, found: impl Into<String>, position: usize) -> Self {
        FilterError::Syntax {
            expected: expected.into(),
            found: found.into(),
            position,
            missing: false,
        }
    }

    /// Creates a missing-token syntax error.
    pub fn missing(expected: impl Into<String>, found: impl Into<String>, position: usize) -> Self {
        FilterError::Syntax {
            expected: expected.into(),
            found: found.into(),
            position,
            missing: true,
        }
    }

    /// Creates an unknown field error.
    pub fn unknown_field(field: impl Into<String>, suggestion: Option<String>) -> Self {
        FilterError::UnknownField {
            field: field.into(),
            suggestion,
        }
    }

    /// Creates an incompatible value type error.
    pub fn incompatible(field: impl Into<String>) -> Self {
        FilterError::IncompatibleValueType {
            field: field.into(),
        }
    }

    /// Creates an unknown enum variant error.
    pub fn unknown_variant(field: impl Into<String>, value: impl Into<String>) -> Self {
        FilterError::UnknownEnumVariant {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an unsupported data type error.
    pub fn unsupported_type(data_type: impl Into<String>) -> Self {
        FilterError::UnsupportedDataType {
            data_type: data_type.into(),
        }
    }

    /// Returns true for errors raised before compilation (tokenizer or parser).
    pub fn is_syntax(&self) -> bool {
        matches!(self, FilterError::Lexical { .. } | FilterError::Syntax { .. })
    }
}
