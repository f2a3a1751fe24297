//! CSV user source
//!
//! Expected header: `first_name,last_name,age,privileges`. The privileges
//! cell holds `|`-separated names (`READ|UPDATE`) and may be empty.

use std::path::PathBuf;

use log::debug;
use serde::Deserialize;

use crate::domain::result::{Error, Result};
use crate::domain::{Privilege, User};
use crate::ports::UserSource;

/// Separator between privileges inside a single CSV cell
pub const PRIVILEGE_SEPARATOR: char = '|';

/// One CSV row before validation
#[derive(Debug, Deserialize)]
struct CsvRow {
    first_name: String,
    last_name: String,
    age: String,
    #[serde(default)]
    privileges: String,
}

impl CsvRow {
    fn into_user(self, row_number: usize) -> Result<User> {
        let age: u32 = self.age.trim().parse().map_err(|_| {
            Error::validation(format!(
                "Row {}: invalid age '{}'",
                row_number,
                self.age.trim()
            ))
        })?;

        let privileges = self
            .privileges
            .split(PRIVILEGE_SEPARATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<Privilege>().map_err(|_| {
                    Error::validation(format!("Row {}: unknown privilege '{}'", row_number, s))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(User::new(self.first_name.trim(), self.last_name.trim(), age)
            .with_privileges(privileges))
    }
}

/// Read users from any CSV reader
pub fn read_users<R: std::io::Read>(reader: R) -> Result<Vec<User>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut users = Vec::new();

    for (index, record) in reader.deserialize::<CsvRow>().enumerate() {
        let row = record?;
        users.push(row.into_user(index + 1)?);
    }

    Ok(users)
}

/// Users read from a CSV file on disk
pub struct CsvFileSource {
    path: PathBuf,
    name: String,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl UserSource for CsvFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load_users(&self) -> Result<Vec<User>> {
        if !self.path.exists() {
            return Err(Error::not_found(format!(
                "User file {}",
                self.path.display()
            )));
        }
        let file = std::fs::File::open(&self.path)?;
        let users = read_users(file)?;
        debug!("Loaded {} user(s) from {}", users.len(), self.name);
        Ok(users)
    }
}
