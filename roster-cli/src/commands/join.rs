//! Join command - print one field of every user on a single line

use std::path::Path;

use anyhow::{anyhow, Result};
use roster_core::UserField;
use strum::VariantNames;

use super::load;
use crate::output;

/// Parse a `--field` value
pub fn parse_field(field: &str) -> Result<UserField> {
    field.parse().map_err(|_| {
        anyhow!(
            "Unknown field '{}' (expected one of: {})",
            field,
            UserField::VARIANTS.join(", ")
        )
    })
}

pub fn run(file: Option<&Path>, delimiter: Option<&str>, field: &str, json: bool) -> Result<()> {
    let field = parse_field(field)?;
    let (ctx, users) = load(file)?;

    let delimiter = delimiter.unwrap_or(&ctx.config.join_delimiter);
    let joined = ctx
        .query_service
        .join(&users, delimiter, |user| field.extract(user));

    if json {
        return output::print_json(&joined);
    }
    println!("{}", joined);
    Ok(())
}
