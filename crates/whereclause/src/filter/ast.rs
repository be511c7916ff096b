//! Abstract Syntax Tree (AST) for filter expressions.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use super::error::{FilterError, FilterResult};

/// A comparison operator. Keys the operation registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationType {
    /// `eq` - equal.
    Eq,
    /// `ne` - not equal.
    Ne,
    /// `gt` - greater than.
    Gt,
    /// `lt` - less than.
    Lt,
}

impl OperationType {
    /// All operation types, in registry order.
    pub const ALL: [OperationType; 4] = [
        OperationType::Eq,
        OperationType::Ne,
        OperationType::Gt,
        OperationType::Lt,
    ];

    /// Returns the keyword used in filter text.
    pub fn keyword(self) -> &'static str {
        match self {
            OperationType::Eq => "eq",
            OperationType::Ne => "ne",
            OperationType::Gt => "gt",
            OperationType::Lt => "lt",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A logical connective joining two sub-expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// Both sides must hold.
    And,
    /// Either side must hold.
    Or,
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOp::And => f.write_str("AND"),
            LogicalOp::Or => f.write_str("OR"),
        }
    }
}

/// A typed literal on the right side of a comparator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// An unquoted decimal integer.
    Integer(i64),
    /// Quoted text with the quotes stripped.
    Text(String),
    /// A quoted `YYYY-MM-DD` calendar date.
    Date(NaiveDate),
    /// A quoted `HH:MM:SS` time of day.
    Time(NaiveTime),
}

impl Literal {
    /// Returns the literal's content as text, the way enum fields read it.
    pub fn as_text(&self) -> String {
        match self {
            Literal::Integer(value) => value.to_string(),
            Literal::Text(value) => value.clone(),
            Literal::Date(value) => value.format("%Y-%m-%d").to_string(),
            Literal::Time(value) => value.format("%H:%M:%S").to_string(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(value) => write!(f, "{value}"),
            other => write!(f, "'{}'", other.as_text()),
        }
    }
}

/// The right side of a comparator as parsed.
///
/// A literal can be well formed yet denote no value (`'2018-20-20'`). The
/// failure stays on its leaf so the compiler reports errors in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLiteral {
    /// A literal with a valid value.
    Valid(Literal),
    /// A literal that failed to resolve.
    Invalid {
        /// The literal as written, quotes included.
        text: String,
        /// Why it failed.
        error: FilterError,
    },
}

impl ParsedLiteral {
    /// Returns the resolved literal, or the resolution error.
    pub fn resolved(&self) -> FilterResult<&Literal> {
        match self {
            ParsedLiteral::Valid(literal) => Ok(literal),
            ParsedLiteral::Invalid { error, .. } => Err(error.clone()),
        }
    }
}

impl From<Literal> for ParsedLiteral {
    fn from(literal: Literal) -> Self {
        ParsedLiteral::Valid(literal)
    }
}

impl fmt::Display for ParsedLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedLiteral::Valid(literal) => write!(f, "{literal}"),
            ParsedLiteral::Invalid { text, .. } => f.write_str(text),
        }
    }
}

/// Represents a parsed filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Two sub-expressions joined by `AND` or `OR`.
    Binary {
        /// The connective.
        op: LogicalOp,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A single `field op literal` comparison.
    Comparator {
        /// The field name as written.
        field: String,
        /// The comparison operator.
        op: OperationType,
        /// The literal, resolved or not.
        value: ParsedLiteral,
    },
}

impl Expr {
    /// Creates an AND expression from two expressions.
    ///
    /// # Example
    ///
    /// ```
    /// use whereclause_rs::filter::{Expr, Literal, OperationType};
    ///
    /// let expr = Expr::and(
    ///     Expr::comparator("id", OperationType::Gt, Literal::Integer(1)),
    ///     Expr::comparator("id", OperationType::Lt, Literal::Integer(9)),
    /// );
    /// assert!(matches!(expr, Expr::Binary { .. }));
    /// ```
    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op: LogicalOp::And,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates an OR expression from two expressions.
    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op: LogicalOp::Or,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates a comparator leaf.
    pub fn comparator(
        field: impl Into<String>,
        op: OperationType,
        value: impl Into<ParsedLiteral>,
    ) -> Self {
        Expr::Comparator {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Returns the first literal that failed to resolve, in reading order.
    pub fn first_invalid_literal(&self) -> Option<&FilterError> {
        match self {
            Expr::Binary { left, right, .. } => left
                .first_invalid_literal()
                .or_else(|| right.first_invalid_literal()),
            Expr::Comparator { value, .. } => match value {
                ParsedLiteral::Valid(_) => None,
                ParsedLiteral::Invalid { error, .. } => Some(error),
            },
        }
    }
}

/// Renders the expression fully parenthesized, which makes precedence visible.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Expr::Comparator { field, op, value } => write!(f, "({field} {op} {value})"),
        }
    }
}
