//! Filterable repositories: filter text in, records out.

use std::marker::PhantomData;

use tracing::debug;

use crate::filter::{FilterEngine, FilterResult, Predicate};
use crate::models::Jogging;
use crate::pagination::Pagination;
use crate::query::{Query, QueryExecutor};
use crate::record::Record;

/// Compiles filters for record type `R` and runs them on executor `E`.
///
/// # Example
///
/// ```
/// use whereclause_rs::filter::FilterEngine;
/// use whereclause_rs::models::{Role, User};
/// use whereclause_rs::query::MemoryExecutor;
/// use whereclause_rs::repository::FilterableRepository;
///
/// let users = vec![
///     User { id: 1, version: 0, name: "alice".into(), role: Role::Admin },
///     User { id: 2, version: 0, name: "bob".into(), role: Role::User },
/// ];
/// let repository = FilterableRepository::new(MemoryExecutor::new(users), FilterEngine::new());
///
/// let admins = repository.find_all(Some("role eq 'ADMIN'"), None).unwrap();
/// assert_eq!(admins.len(), 1);
/// assert_eq!(admins[0].name, "alice");
/// ```
#[derive(Debug, Clone)]
pub struct FilterableRepository<R, E> {
    executor: E,
    engine: FilterEngine,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record, E: QueryExecutor<R>> FilterableRepository<R, E> {
    /// Creates a repository over an executor.
    pub fn new(executor: E, engine: FilterEngine) -> Self {
        Self {
            executor,
            engine,
            _record: PhantomData,
        }
    }

    /// Returns the underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Finds records matching `filter`, further restricted by `extra`, then paged.
    ///
    /// A `None` filter skips compilation and selects every record; an empty
    /// string is still compiled, and rejected as a syntax error.
    ///
    /// # Errors
    ///
    /// Returns the first error from parsing or compiling `filter`. Nothing is
    /// executed in that case.
    pub fn find(
        &self,
        filter: Option<&str>,
        pagination: Option<Pagination>,
        extra: Option<Predicate>,
    ) -> FilterResult<Vec<&R>> {
        let compiled = filter
            .map(|text| self.engine.build_for::<R>(text))
            .transpose()?;

        let predicate = match (extra, compiled) {
            (Some(extra), Some(compiled)) => Some(Predicate::and(extra, compiled)),
            (extra, compiled) => extra.or(compiled),
        };

        let mut query = Query {
            predicate,
            window: None,
        };
        if let Some(pagination) = pagination {
            query = query.with_window(pagination.window());
        }

        debug!(
            record = R::field_table().record(),
            filtered = query.predicate.is_some(),
            window = ?query.window,
            "running query"
        );
        Ok(self.executor.execute(&query))
    }

    /// Finds records matching `filter`, paged, without extra constraints.
    pub fn find_all(
        &self,
        filter: Option<&str>,
        pagination: Option<Pagination>,
    ) -> FilterResult<Vec<&R>> {
        self.find(filter, pagination, None)
    }
}

impl<E: QueryExecutor<Jogging>> FilterableRepository<Jogging, E> {
    /// Finds one user's joggings matching `filter`, paged.
    pub fn find_by_user(
        &self,
        user: &str,
        filter: Option<&str>,
        pagination: Option<Pagination>,
    ) -> FilterResult<Vec<&Jogging>> {
        self.find(filter, pagination, Some(Jogging::owned_by(user)))
    }
}
