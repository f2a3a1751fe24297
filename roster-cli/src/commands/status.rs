//! Status command - show a roster summary

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::load;
use crate::output;

pub fn run(file: Option<&Path>, json: bool) -> Result<()> {
    let (ctx, users) = load(file)?;
    let status = ctx.status_service.summarize(ctx.source.name(), &users);

    if json {
        return output::print_json(&status);
    }

    println!("{}", "Roster Status".bold());
    println!();

    let privileges: Vec<String> = status
        .distinct_privileges
        .iter()
        .map(|p| p.to_string())
        .collect();

    let mut table = output::create_table();
    table.add_row(vec!["Source".to_string(), status.source.clone()]);
    table.add_row(vec!["Users".to_string(), status.total_users.to_string()]);
    table.add_row(vec![
        "Average age".to_string(),
        status
            .average_age
            .map(|a| format!("{:.1}", a))
            .unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec!["Last names".to_string(), status.distinct_last_names.to_string()]);
    table.add_row(vec![
        "Most frequent last name".to_string(),
        status
            .most_frequent_last_name
            .clone()
            .unwrap_or_else(|| "-".to_string()),
    ]);
    table.add_row(vec!["Privileges".to_string(), privileges.join(", ")]);

    println!("{}", table);

    if ctx.config.demo_mode && ctx.source.name() == "demo" {
        println!();
        output::warning("Showing the demo roster. Run 'roster demo off' to disable.");
    }

    Ok(())
}
