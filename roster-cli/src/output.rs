//! Output formatting utilities

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use serde::Serialize;

use roster_core::User;

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render users as a table, one row per user
pub fn user_table<'a>(users: impl IntoIterator<Item = &'a User>) -> Table {
    let mut table = create_table();
    table.set_header(vec!["First name", "Last name", "Age", "Privileges"]);

    for user in users {
        let privileges: Vec<String> = user.privileges.iter().map(|p| p.to_string()).collect();
        table.add_row(vec![
            user.first_name.clone(),
            user.last_name.clone(),
            user.age.to_string(),
            privileges.join(", "),
        ]);
    }

    table
}

/// Print a user table followed by a row count
pub fn print_users(users: &[&User]) {
    println!("{}", user_table(users.iter().copied()));
    println!();
    println!("{} user(s)", users.len());
}
