//! Query commands - run roster queries and print the results

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::load;
use crate::output;

/// First names in reverse alphabetical order
pub fn names(file: Option<&Path>, json: bool) -> Result<()> {
    let (ctx, users) = load(file)?;
    let names = ctx.query_service.first_names_reverse_sorted(&users);

    if json {
        return output::print_json(&names);
    }
    for name in &names {
        println!("{}", name);
    }
    Ok(())
}

/// Users by age descending, then first name
pub fn sort(file: Option<&Path>, json: bool) -> Result<()> {
    let (ctx, users) = load(file)?;
    let sorted = ctx.query_service.sort_by_age_desc_and_name_asc(&users);

    if json {
        return output::print_json(&sorted);
    }
    output::print_users(&sorted);
    Ok(())
}

/// Distinct privileges in order of first appearance
pub fn privileges(file: Option<&Path>, json: bool) -> Result<()> {
    let (ctx, users) = load(file)?;
    let privileges = ctx.query_service.distinct_privileges(&users);

    if json {
        return output::print_json(&privileges);
    }
    if privileges.is_empty() {
        output::warning("No privileges held by any user");
    }
    for privilege in &privileges {
        println!("{}", privilege);
    }
    Ok(())
}

/// Any user strictly older than `older_than`
pub fn find(file: Option<&Path>, older_than: u32, json: bool) -> Result<()> {
    let (ctx, users) = load(file)?;
    let found = ctx.query_service.find_user_older_than(&users, older_than);

    if json {
        return output::print_json(&found);
    }
    match found {
        Some(user) => output::print_users(&[user]),
        None => output::warning(&format!("No user older than {}", older_than)),
    }
    Ok(())
}

/// Users grouped by number of privileges
pub fn group_by_count(file: Option<&Path>, json: bool) -> Result<()> {
    let (ctx, users) = load(file)?;
    let groups = ctx.query_service.group_by_privilege_count(&users);

    if json {
        return output::print_json(&groups);
    }
    for (count, members) in &groups {
        println!("{}", format!("{} privilege(s)", count).bold());
        output::print_users(members);
        println!();
    }
    Ok(())
}

/// Average age, -1 when the roster is empty
pub fn average(file: Option<&Path>, json: bool) -> Result<()> {
    let (ctx, users) = load(file)?;
    let average = ctx.query_service.average_age(&users);

    if json {
        return output::print_json(&serde_json::json!({ "average_age": average }));
    }
    println!("{}", average);
    Ok(())
}

/// Most frequent last name shared by at least two users
pub fn most_frequent(file: Option<&Path>, json: bool) -> Result<()> {
    let (ctx, users) = load(file)?;
    let last_name = ctx.query_service.most_frequent_last_name(&users);

    if json {
        return output::print_json(&serde_json::json!({ "last_name": last_name }));
    }
    match last_name {
        Some(name) => println!("{}", name),
        None => output::warning("No last name is shared by two or more users"),
    }
    Ok(())
}

/// Users grouped by each privilege they hold
pub fn group_by_privilege(file: Option<&Path>, json: bool) -> Result<()> {
    let (ctx, users) = load(file)?;
    let groups = ctx.query_service.group_by_privilege(&users);

    if json {
        return output::print_json(&groups);
    }
    for (privilege, members) in &groups {
        println!("{}", privilege.to_string().bold());
        output::print_users(members);
        println!();
    }
    Ok(())
}

/// Number of users per last name
pub fn count_last_names(file: Option<&Path>, json: bool) -> Result<()> {
    let (ctx, users) = load(file)?;
    let counts = ctx.query_service.count_by_last_name(&users);

    if json {
        return output::print_json(&counts);
    }

    let mut table = output::create_table();
    table.set_header(vec!["Last name", "Users"]);
    for (last_name, count) in &counts {
        table.add_row(vec![last_name.clone(), count.to_string()]);
    }
    println!("{}", table);
    Ok(())
}
