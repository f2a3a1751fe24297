//! CLI command implementations

pub mod demo;
pub mod filter;
pub mod join;
pub mod query;
pub mod status;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use roster_core::adapters::{source_for_path, JsonTextSource};
use roster_core::ports::UserSource;
use roster_core::{RosterContext, User};

/// Get the roster directory from environment or default
pub fn get_roster_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("ROSTER_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".roster"))
        .context("Could not find home directory; set ROSTER_DIR")
}

/// Pick the user source given on the command line, if any
///
/// Priority: `--file`, then JSON piped on stdin.
fn cli_source(file: Option<&Path>) -> Result<Option<Box<dyn UserSource>>> {
    if let Some(path) = file {
        return Ok(Some(source_for_path(path)?));
    }

    if atty::isnt(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read users from stdin")?;
        if !buffer.trim().is_empty() {
            debug!("Reading users from stdin ({} bytes)", buffer.len());
            return Ok(Some(Box::new(JsonTextSource::new("stdin", buffer))));
        }
    }

    Ok(None)
}

/// Get or create roster context
pub fn get_context(file: Option<&Path>) -> Result<RosterContext> {
    let roster_dir = get_roster_dir()?;
    let source = cli_source(file)?;

    RosterContext::new(&roster_dir, source).context("Failed to initialize roster context")
}

/// Create the context and load its users in one step
pub fn load(file: Option<&Path>) -> Result<(RosterContext, Vec<User>)> {
    let ctx = get_context(file)?;
    let users = ctx.load_users()?;
    Ok((ctx, users))
}
