//! User domain model

use serde::{Deserialize, Serialize};

use super::Privilege;

/// A person in the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    /// Privileges in the order they were granted; duplicates are kept as given
    #[serde(default)]
    pub privileges: Vec<Privilege>,
}

impl User {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            privileges: Vec::new(),
        }
    }

    /// Set the user's privileges
    pub fn with_privileges(mut self, privileges: impl IntoIterator<Item = Privilege>) -> Self {
        self.privileges = privileges.into_iter().collect();
        self
    }

    /// First and last name separated by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_privilege(&self, privilege: Privilege) -> bool {
        self.privileges.contains(&privilege)
    }
}
