//! Compilation of parsed expressions into predicates.
//!
//! [`PredicateCompiler`] walks an [`Expr`] against one record type's
//! [`FieldTable`]. [`FilterEngine`] wraps parsing and compilation behind a
//! single call and owns the shared [`OperationRegistry`].
//!
//! # Example
//!
//! ```
//! use whereclause_rs::filter::FilterEngine;
//! use whereclause_rs::models::User;
//!
//! let engine = FilterEngine::new();
//! let predicate = engine.build_for::<User>("role eq 'ADMIN' or id lt 3").unwrap();
//! assert_eq!(predicate.to_string(), "(role = 'ADMIN' OR id < 3)");
//!
//! let err = engine.build_for::<User>("role eq 'rockstar'").unwrap_err();
//! assert_eq!(err.to_string(), "'rockstar' role doesn't exist");
//! ```

use std::sync::Arc;

use tracing::debug;

use super::ast::{Expr, LogicalOp};
use super::error::{FilterError, FilterResult};
use super::operation::OperationRegistry;
use super::parser::FilterParser;
use super::predicate::Predicate;
use super::schema::FieldTable;
use crate::record::Record;

/// Compiles expressions for a single record type.
#[derive(Debug, Clone, Copy)]
pub struct PredicateCompiler<'a> {
    registry: &'a OperationRegistry,
    table: &'a FieldTable,
}

impl<'a> PredicateCompiler<'a> {
    /// Creates a compiler that resolves operators in `registry` and fields in `table`.
    pub fn new(registry: &'a OperationRegistry, table: &'a FieldTable) -> Self {
        Self { registry, table }
    }

    /// Compiles an expression into a predicate.
    ///
    /// Comparators are compiled left to right and the first failure aborts
    /// compilation; no partial predicate is returned. Within a comparator the
    /// literal is resolved before the field and operator are checked.
    pub fn compile(&self, expr: &Expr) -> FilterResult<Predicate> {
        match expr {
            Expr::Binary { op, left, right } => {
                let left = self.compile(left)?;
                let right = self.compile(right)?;
                Ok(match op {
                    LogicalOp::And => Predicate::and(left, right),
                    LogicalOp::Or => Predicate::or(left, right),
                })
            }
            Expr::Comparator { field, op, value } => {
                let literal = value.resolved()?;
                let operation =
                    self.registry
                        .get(*op)
                        .ok_or_else(|| FilterError::UnsupportedOperation {
                            operation: op.keyword().to_string(),
                        })?;
                operation.create_predicate(self.table, field, literal)
            }
        }
    }
}

/// Parses and compiles filter text.
///
/// Cloning is cheap: clones share one registry, so an engine can be handed to
/// every worker thread.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    registry: Arc<OperationRegistry>,
}

impl FilterEngine {
    /// Creates an engine with the standard operations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine over a custom registry.
    pub fn with_registry(registry: OperationRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns the registry this engine compiles with.
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    /// Parses `text` and compiles it against `table`.
    ///
    /// # Errors
    ///
    /// Returns the first lexical, syntax or semantic error encountered.
    /// An empty `text` is a syntax error.
    pub fn build(&self, table: &FieldTable, text: &str) -> FilterResult<Predicate> {
        let expr = FilterParser::parse(text)?;
        let predicate = PredicateCompiler::new(&self.registry, table).compile(&expr)?;
        debug!(record = table.record(), %predicate, "compiled filter");
        Ok(predicate)
    }

    /// Parses `text` and compiles it against `R`'s field table.
    pub fn build_for<R: Record>(&self, text: &str) -> FilterResult<Predicate> {
        self.build(R::field_table(), text)
    }
}
