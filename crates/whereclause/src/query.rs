//! Query execution over record collections.

use tracing::trace;

use crate::filter::Predicate;
use crate::record::Record;

/// A zero-based slice of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Number of matching records to skip.
    pub offset: usize,
    /// Maximum number of records to return.
    pub limit: usize,
}

impl Window {
    /// Creates a window.
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }
}

/// A ready-to-run query: an optional predicate and an optional window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Records must satisfy this predicate. `None` selects every record.
    pub predicate: Option<Predicate>,
    /// Applied after filtering.
    pub window: Option<Window>,
}

impl Query {
    /// A query selecting every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Sets the predicate.
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Sets the window.
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = Some(window);
        self
    }
}

/// Runs queries against a record store.
pub trait QueryExecutor<R: Record> {
    /// Returns the records matching the query's predicate, in stable order,
    /// restricted to the query's window.
    fn execute(&self, query: &Query) -> Vec<&R>;
}

/// Executes queries against records held in memory, in insertion order.
///
/// # Example
///
/// ```
/// use whereclause_rs::models::{Role, User};
/// use whereclause_rs::query::{MemoryExecutor, Query, QueryExecutor, Window};
///
/// let executor = MemoryExecutor::new(
///     (1..=5)
///         .map(|id| User { id, version: 0, name: format!("user{id}"), role: Role::User })
///         .collect(),
/// );
///
/// let page = executor.execute(&Query::all().with_window(Window::new(2, 2)));
/// let ids: Vec<_> = page.iter().map(|u| u.id).collect();
/// assert_eq!(ids, [3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryExecutor<R> {
    records: Vec<R>,
}

impl<R> MemoryExecutor<R> {
    /// Creates an executor over the given records.
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// All stored records.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Appends a record.
    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }
}

impl<R> Default for MemoryExecutor<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R> From<Vec<R>> for MemoryExecutor<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records)
    }
}

impl<R: Record> QueryExecutor<R> for MemoryExecutor<R> {
    fn execute(&self, query: &Query) -> Vec<&R> {
        let matching = self
            .records
            .iter()
            .filter(|record| query.predicate.as_ref().map_or(true, |p| p.matches(*record)));

        let result: Vec<&R> = match query.window {
            Some(window) => matching.skip(window.offset).take(window.limit).collect(),
            None => matching.collect(),
        };

        trace!(
            scanned = self.records.len(),
            returned = result.len(),
            "executed in-memory query"
        );
        result
    }
}
