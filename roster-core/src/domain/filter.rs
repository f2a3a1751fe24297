//! Textual user filters
//!
//! Filters are written as `<field><op><value>`, for example `age>30`,
//! `last_name=Smith` or `privilege=read`. They are how the CLI feeds
//! predicates into [`UserQueryService::filter_by`](crate::services::UserQueryService::filter_by).

use std::fmt;
use std::str::FromStr;

use super::result::{Error, Result};
use super::{Privilege, User};

/// A single predicate over a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFilter {
    AgeAbove(u32),
    AgeBelow(u32),
    AgeEquals(u32),
    FirstName(String),
    LastName(String),
    HasPrivilege(Privilege),
    PrivilegeCountAtLeast(usize),
}

impl UserFilter {
    /// Whether `user` satisfies this filter
    pub fn matches(&self, user: &User) -> bool {
        match self {
            UserFilter::AgeAbove(age) => user.age > *age,
            UserFilter::AgeBelow(age) => user.age < *age,
            UserFilter::AgeEquals(age) => user.age == *age,
            UserFilter::FirstName(name) => user.first_name == *name,
            UserFilter::LastName(name) => user.last_name == *name,
            UserFilter::HasPrivilege(privilege) => user.has_privilege(*privilege),
            UserFilter::PrivilegeCountAtLeast(count) => user.privileges.len() >= *count,
        }
    }
}

/// Operators tried at each position; `>=` comes before `>`
const OPERATORS: [&str; 4] = [">=", ">", "<", "="];

impl FromStr for UserFilter {
    type Err = Error;

    fn from_str(expr: &str) -> Result<Self> {
        let (position, op) = expr
            .char_indices()
            .find_map(|(i, _)| {
                OPERATORS
                    .iter()
                    .find(|op| expr[i..].starts_with(**op))
                    .map(|op| (i, *op))
            })
            .ok_or_else(|| {
                Error::validation(format!("Filter '{}' has no operator (>=, >, <, =)", expr))
            })?;
        let field = expr[..position].trim();
        let value = expr[position + op.len()..].trim();

        if field.is_empty() || value.is_empty() {
            return Err(Error::validation(format!("Incomplete filter '{}'", expr)));
        }

        let parse_number = |value: &str| -> Result<u32> {
            value
                .parse()
                .map_err(|_| Error::validation(format!("'{}' is not a valid number", value)))
        };

        match (field, op) {
            ("age", ">") => Ok(UserFilter::AgeAbove(parse_number(value)?)),
            ("age", "<") => Ok(UserFilter::AgeBelow(parse_number(value)?)),
            ("age", "=") => Ok(UserFilter::AgeEquals(parse_number(value)?)),
            ("first_name", "=") => Ok(UserFilter::FirstName(value.to_string())),
            ("last_name", "=") => Ok(UserFilter::LastName(value.to_string())),
            ("privilege", "=") => Ok(UserFilter::HasPrivilege(Privilege::parse(value)?)),
            ("privileges", ">=") => Ok(UserFilter::PrivilegeCountAtLeast(
                parse_number(value)? as usize,
            )),
            _ => Err(Error::validation(format!(
                "Unsupported filter '{}': field '{}' does not accept '{}'",
                expr, field, op
            ))),
        }
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserFilter::AgeAbove(age) => write!(f, "age>{}", age),
            UserFilter::AgeBelow(age) => write!(f, "age<{}", age),
            UserFilter::AgeEquals(age) => write!(f, "age={}", age),
            UserFilter::FirstName(name) => write!(f, "first_name={}", name),
            UserFilter::LastName(name) => write!(f, "last_name={}", name),
            UserFilter::HasPrivilege(privilege) => write!(f, "privilege={}", privilege),
            UserFilter::PrivilegeCountAtLeast(count) => write!(f, "privileges>={}", count),
        }
    }
}
