//! Demo service - manage demo mode
//!
//! Demo mode serves the built-in roster whenever no user file is given,
//! so every query can be tried without preparing data.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;

use crate::config::Config;

/// Demo service for managing demo mode
pub struct DemoService {
    roster_dir: PathBuf,
}

impl DemoService {
    pub fn new(roster_dir: &Path) -> Self {
        Self {
            roster_dir: roster_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.roster_dir)?;
        Ok(config.demo_mode)
    }

    /// Enable demo mode
    pub fn enable(&self) -> Result<()> {
        let mut config = Config::load(&self.roster_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.roster_dir)?;
        debug!("Demo mode enabled in {}", self.roster_dir.display());
        Ok(())
    }

    /// Disable demo mode
    pub fn disable(&self) -> Result<()> {
        let mut config = Config::load(&self.roster_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.roster_dir)?;
        debug!("Demo mode disabled in {}", self.roster_dir.display());
        Ok(())
    }
}
