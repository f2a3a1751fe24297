//! User source port
//!
//! Defines where a roster of users is loaded from (files, piped input,
//! the built-in demo roster).

use crate::domain::result::Result;
use crate::domain::User;

/// Source of user records
///
/// Implementations (adapters) read users from a concrete medium. Services
/// never see the medium, only the loaded `Vec<User>`.
pub trait UserSource: Send + Sync {
    /// Human-readable source name (e.g., a file path or "demo")
    fn name(&self) -> &str;

    /// Load every user from the source, in source order
    fn load_users(&self) -> Result<Vec<User>>;
}
