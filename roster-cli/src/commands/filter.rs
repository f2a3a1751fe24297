//! Filter command - list users matching every filter expression

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use roster_core::services::UserPredicate;
use roster_core::{User, UserFilter};

use super::load;
use crate::output;

/// Parse `--where` expressions into filters
pub fn parse_filters(expressions: &[String]) -> Result<Vec<UserFilter>> {
    expressions
        .iter()
        .map(|expr| {
            expr.parse::<UserFilter>()
                .with_context(|| format!("Invalid --where '{}'", expr))
        })
        .collect()
}

pub fn run(file: Option<&Path>, expressions: &[String], json: bool) -> Result<()> {
    let filters = parse_filters(expressions)?;
    debug!(
        "Filtering with [{}]",
        filters.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(", ")
    );

    let (ctx, users) = load(file)?;

    let closures: Vec<_> = filters
        .iter()
        .map(|filter| move |user: &User| filter.matches(user))
        .collect();
    let predicates: Vec<UserPredicate> = closures.iter().map(|c| c as UserPredicate).collect();

    let matched = ctx.query_service.filter_by(&users, &predicates);

    if json {
        return output::print_json(&matched);
    }
    output::print_users(&matched);
    Ok(())
}
