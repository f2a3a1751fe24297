//! Core domain entities
//!
//! Pure data structures describing users and the expressions used to
//! select and project them - no I/O.

mod field;
mod filter;
mod privilege;
pub mod result;
mod user;

pub use field::UserField;
pub use filter::UserFilter;
pub use privilege::Privilege;
pub use user::User;
