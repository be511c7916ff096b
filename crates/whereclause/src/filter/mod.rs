//! Where-clause filter expressions.
//!
//! This module turns free-text filters into typed predicates over records:
//! the [`Lexer`] produces tokens, the [`FilterParser`] builds an [`Expr`],
//! and the [`PredicateCompiler`] resolves every comparator against a record
//! type's [`FieldTable`] through the [`OperationRegistry`].
//!
//! # Supported Syntax
//!
//! ## Comparators
//! - `field eq value` - Equal
//! - `field ne value` - Not equal
//! - `field gt value` - Greater than
//! - `field lt value` - Less than
//!
//! ## Literals
//! - `42`, `-7` - Integers
//! - `'text'` - Text
//! - `'2019-03-28'` - Dates (`YYYY-MM-DD`)
//! - `'01:00:00'` - Times (`HH:MM:SS`)
//!
//! ## Boolean Operators
//! - `AND` - binds tighter than `OR`
//! - `OR`
//! - `()` - Grouping
//!
//! Keywords and field names are case-insensitive. Text values and enum
//! variant names are not.
//!
//! # Example
//!
//! ```
//! use whereclause_rs::filter::FilterEngine;
//! use whereclause_rs::models::{Role, User};
//!
//! let users = vec![
//!     User { id: 1, version: 0, name: "alice".into(), role: Role::Admin },
//!     User { id: 2, version: 0, name: "bob".into(), role: Role::User },
//! ];
//!
//! let predicate = FilterEngine::new()
//!     .build_for::<User>("(name eq 'bob') OR (role eq 'ADMIN' AND id gt 5)")
//!     .unwrap();
//!
//! let names: Vec<_> = users
//!     .iter()
//!     .filter(|u| predicate.matches(*u))
//!     .map(|u| u.name.as_str())
//!     .collect();
//! assert_eq!(names, ["bob"]);
//! ```

mod ast;
mod compiler;
mod error;
mod lexer;
mod operation;
mod parser;
mod predicate;
mod schema;
mod value;

pub use ast::{Expr, Literal, LogicalOp, OperationType, ParsedLiteral};
pub use compiler::{FilterEngine, PredicateCompiler};
pub use error::{FilterError, FilterResult};
pub use lexer::{Lexer, Token, TokenKind};
pub use operation::{
    EqualOperation, GreaterThanOperation, LessThanOperation, NotEqualOperation, Operation,
    OperationRegistry,
};
pub use parser::FilterParser;
pub use predicate::Predicate;
pub use schema::{EnumType, EnumVariant, FieldDef, FieldTable, FieldType};
pub use value::{remove_quotes, resolve_literal};

#[cfg(test)]
mod tests;
