//! Where-clause filter expressions compiled into typed record predicates.
//!
//! Callers pass free-text filters such as `(name eq 'bob') AND (id gt 18)`.
//! The [`filter`] module tokenizes, parses and compiles them against a record
//! type's field table; [`repository`] runs the result over a [`query`]
//! executor with optional [`pagination`] and extra constraints.
//!
//! # Example
//!
//! ```
//! use whereclause_rs::filter::FilterEngine;
//! use whereclause_rs::models::{Role, User};
//! use whereclause_rs::pagination::Pagination;
//! use whereclause_rs::query::MemoryExecutor;
//! use whereclause_rs::repository::FilterableRepository;
//!
//! let users = (1..=5)
//!     .map(|id| User { id, version: 0, name: format!("user{id}"), role: Role::User })
//!     .collect();
//! let repository = FilterableRepository::new(MemoryExecutor::new(users), FilterEngine::new());
//!
//! let page = Pagination::from_request(Some(2), Some(2)).unwrap();
//! let found = repository.find_all(Some("id gt 1"), page).unwrap();
//! let ids: Vec<_> = found.iter().map(|u| u.id).collect();
//! assert_eq!(ids, [4, 5]);
//! ```

pub mod filter;
pub mod models;
pub mod pagination;
pub mod query;
pub mod record;
pub mod repository;
pub mod store;

pub use filter::{FilterEngine, FilterError, FilterResult, Predicate};
pub use record::{Record, Value};
