//! Roster Core - queries over in-memory user collections
//!
//! This crate follows a hexagonal layout:
//!
//! - **domain**: Core entities (User, Privilege) and filter/field expressions
//! - **ports**: Trait definitions for external dependencies (UserSource)
//! - **services**: Query logic and orchestration
//! - **adapters**: Concrete user sources (JSON, CSV, demo roster)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use adapters::DemoSource;
use config::Config;
use ports::UserSource;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Privilege, User, UserField, UserFilter};

/// Main context for roster operations
///
/// Holds the configuration, the selected user source, and the services.
pub struct RosterContext {
    pub config: Config,
    pub source: Box<dyn UserSource>,
    pub query_service: UserQueryService,
    pub status_service: StatusService,
}

impl RosterContext {
    /// Create a new roster context
    ///
    /// Source priority: `source` argument, configured default source, demo
    /// roster (demo mode only).
    pub fn new(roster_dir: &Path, source: Option<Box<dyn UserSource>>) -> Result<Self> {
        let config = Config::load(roster_dir)?;

        let source = match source {
            Some(source) => source,
            None => Self::configured_source(&config)?,
        };
        debug!("Using user source {}", source.name());

        let query_service = UserQueryService::new();
        let status_service = StatusService::new(query_service);

        Ok(Self {
            config,
            source,
            query_service,
            status_service,
        })
    }

    fn configured_source(config: &Config) -> Result<Box<dyn UserSource>> {
        if let Some(path) = &config.default_source {
            return Ok(adapters::source_for_path(path)?);
        }
        if config.demo_mode {
            return Ok(Box::new(DemoSource::new()));
        }
        Err(Error::config(
            "No user source configured. Pass --file, pipe JSON on stdin, set ROSTER_SOURCE, or run `roster demo on`.",
        )
        .into())
    }

    /// Load users from the selected source
    pub fn load_users(&self) -> Result<Vec<User>> {
        self.source
            .load_users()
            .with_context(|| format!("Failed to load users from {}", self.source.name()))
    }
}
