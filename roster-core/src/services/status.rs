//! Status service - roster summary

use serde::Serialize;

use crate::domain::{Privilege, User};

use super::UserQueryService;

/// Status service for roster summaries
#[derive(Debug, Default)]
pub struct StatusService {
    queries: UserQueryService,
}

impl StatusService {
    pub fn new(queries: UserQueryService) -> Self {
        Self { queries }
    }

    /// Summarize a loaded roster
    pub fn summarize(&self, source: &str, users: &[User]) -> StatusSummary {
        let average_age = if users.is_empty() {
            None
        } else {
            Some(self.queries.average_age(users))
        };

        StatusSummary {
            source: source.to_string(),
            total_users: users.len(),
            average_age,
            distinct_privileges: self.queries.distinct_privileges(users),
            distinct_last_names: self.queries.count_by_last_name(users).len(),
            most_frequent_last_name: self.queries.most_frequent_last_name(users),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub source: String,
    pub total_users: usize,
    pub average_age: Option<f64>,
    pub distinct_privileges: Vec<Privilege>,
    pub distinct_last_names: usize,
    pub most_frequent_last_name: Option<String>,
}
