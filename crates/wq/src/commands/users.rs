//! Users command implementation.
//!
//! Lists users from the local dataset, filtered and paged.

use whereclause_rs::models::User;
use whereclause_rs::pagination::Pagination;
use whereclause_rs::query::MemoryExecutor;
use whereclause_rs::repository::FilterableRepository;
use whereclause_rs::FilterEngine;

use super::{CommandContext, Result};
use crate::output::{format_users_json, format_users_table};

/// Options for the users command.
#[derive(Debug, Default)]
pub struct UsersOptions {
    /// Filter expression.
    pub filter: Option<String>,
    /// Page number, starting at 1.
    pub page: Option<i64>,
    /// Records per page.
    pub per_page: Option<i64>,
}

/// Executes the users command.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded, the page request is
/// out of range, or the filter is invalid.
pub fn execute(ctx: &CommandContext, opts: &UsersOptions) -> Result<()> {
    let pagination = Pagination::from_request(opts.page, opts.per_page)?;
    let dataset = ctx.load_dataset()?;

    let repository =
        FilterableRepository::new(MemoryExecutor::new(dataset.users), FilterEngine::new());
    let users = find_users(&repository, opts, pagination)?;

    if ctx.json_output {
        let output = format_users_json(&users)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_users_table(&users, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Runs the filter over the repository.
fn find_users<'a>(
    repository: &'a FilterableRepository<User, MemoryExecutor<User>>,
    opts: &UsersOptions,
    pagination: Option<Pagination>,
) -> Result<Vec<&'a User>> {
    Ok(repository.find_all(opts.filter.as_deref(), pagination)?)
}
