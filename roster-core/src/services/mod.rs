//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic. [`UserQueryService`] holds every
//! roster query; the others build on it or manage settings.

mod demo;
mod status;
mod user_query;

pub use demo::DemoService;
pub use status::{StatusService, StatusSummary};
pub use user_query::{
    UserPredicate, UserQueryService, EMPTY_AVERAGE_AGE, MIN_FREQUENT_LAST_NAME_COUNT,
};
