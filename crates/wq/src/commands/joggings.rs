//! Joggings command implementation.
//!
//! Lists jogging sessions from the local dataset, optionally restricted to
//! one owner before the filter and page are applied.

use whereclause_rs::models::Jogging;
use whereclause_rs::pagination::Pagination;
use whereclause_rs::query::MemoryExecutor;
use whereclause_rs::repository::FilterableRepository;
use whereclause_rs::FilterEngine;

use super::{CommandContext, Result};
use crate::output::{format_joggings_json, format_joggings_table};

/// Options for the joggings command.
#[derive(Debug, Default)]
pub struct JoggingsOptions {
    /// Filter expression.
    pub filter: Option<String>,
    /// Only sessions owned by this user name.
    pub owner: Option<String>,
    /// Page number, starting at 1.
    pub page: Option<i64>,
    /// Records per page.
    pub per_page: Option<i64>,
}

/// Executes the joggings command.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded, the page request is
/// out of range, or the filter is invalid.
pub fn execute(ctx: &CommandContext, opts: &JoggingsOptions) -> Result<()> {
    let pagination = Pagination::from_request(opts.page, opts.per_page)?;
    let dataset = ctx.load_dataset()?;

    let repository =
        FilterableRepository::new(MemoryExecutor::new(dataset.joggings), FilterEngine::new());
    let joggings = find_joggings(&repository, opts, pagination)?;

    if ctx.json_output {
        let output = format_joggings_json(&joggings)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_joggings_table(&joggings, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Runs the filter over the repository, scoped to the owner when given.
fn find_joggings<'a>(
    repository: &'a FilterableRepository<Jogging, MemoryExecutor<Jogging>>,
    opts: &JoggingsOptions,
    pagination: Option<Pagination>,
) -> Result<Vec<&'a Jogging>> {
    let filter = opts.filter.as_deref();
    let joggings = match &opts.owner {
        Some(owner) => repository.find_by_user(owner, filter, pagination)?,
        None => repository.find_all(filter, pagination)?,
    };
    Ok(joggings)
}
