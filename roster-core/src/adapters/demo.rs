//! Demo user source
//!
//! A fixed roster used in demo mode and for trying out queries without
//! preparing a file. Contains repeated last names, a shared age and a user
//! with no privileges so every query has something to show.

use crate::domain::result::Result;
use crate::domain::{Privilege, User};
use crate::ports::UserSource;

/// Generate the demo roster
pub fn generate_demo_users() -> Vec<User> {
    use Privilege::*;

    vec![
        User::new("John", "Smith", 42).with_privileges([Create, Read, Update, Delete]),
        User::new("Anna", "Smith", 35).with_privileges([Read, Update]),
        User::new("Peter", "Johnson", 28).with_privileges([Read]),
        User::new("Maria", "Garcia", 35).with_privileges([Read, Create]),
        User::new("Liam", "Brown", 19),
        User::new("Olivia", "Johnson", 51).with_privileges([Read, Update, Delete]),
        User::new("Noah", "Smith", 23).with_privileges([Read]),
        User::new("Emma", "Davis", 64).with_privileges([Update, Delete]),
    ]
}

/// Source serving the demo roster
#[derive(Debug, Default)]
pub struct DemoSource;

impl DemoSource {
    pub fn new() -> Self {
        Self
    }
}

impl UserSource for DemoSource {
    fn name(&self) -> &str {
        "demo"
    }

    fn load_users(&self) -> Result<Vec<User>> {
        Ok(generate_demo_users())
    }
}
