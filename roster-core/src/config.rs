//! Configuration management
//!
//! Settings live in `settings.json` inside the roster directory:
//! ```json
//! {
//!   "app": { "demoMode": false, "defaultSource": "users.json", "joinDelimiter": ", " }
//! }
//! ```
//! Keys the CLI does not manage are preserved when saving.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// Delimiter used by `join` when none is configured
pub const DEFAULT_JOIN_DELIMITER: &str = ", ";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_source: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    join_delimiter: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Roster configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub demo_mode: bool,
    /// User file loaded when no source is given on the command line
    pub default_source: Option<PathBuf>,
    pub join_delimiter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_mode: false,
            default_source: None,
            join_delimiter: DEFAULT_JOIN_DELIMITER.to_string(),
        }
    }
}

/// Parse a boolean environment override
fn env_flag(name: &str) -> Option<bool> {
    match std::env::var(name).ok().as_deref() {
        Some("true" | "1" | "yes" | "TRUE" | "YES") => Some(true),
        Some("false" | "0" | "no" | "FALSE" | "NO") => Some(false),
        Some(other) => {
            warn!("Ignoring {}={:?}: expected true/false", name, other);
            None
        }
        None => None,
    }
}

/// Raw settings text, or `None` when the file does not exist
fn read_settings_content(settings_path: &Path) -> Result<Option<String>> {
    if !settings_path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(settings_path)
        .with_context(|| format!("Failed to read {}", settings_path.display()))?;
    Ok(Some(content))
}

/// Pick the default source: the env value as given, else the configured
/// path resolved against the roster directory
fn resolve_default_source(
    roster_dir: &Path,
    from_env: Option<PathBuf>,
    configured: Option<PathBuf>,
) -> Option<PathBuf> {
    from_env.or_else(|| {
        configured.map(|p| if p.is_relative() { roster_dir.join(p) } else { p })
    })
}

impl Config {
    /// Load config from the roster directory
    ///
    /// Environment overrides (for CI/testing):
    /// - `ROSTER_DEMO_MODE` overrides `demoMode`
    /// - `ROSTER_SOURCE` overrides `defaultSource`
    ///
    /// A relative `defaultSource` is resolved against the roster directory;
    /// `ROSTER_SOURCE` is used as given.
    pub fn load(roster_dir: &Path) -> Result<Self> {
        let settings_path = roster_dir.join(SETTINGS_FILE);
        let raw: SettingsFile = match read_settings_content(&settings_path)? {
            Some(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring malformed {}: {}", settings_path.display(), e);
                SettingsFile::default()
            }),
            None => SettingsFile::default(),
        };

        let demo_mode = env_flag("ROSTER_DEMO_MODE").unwrap_or(raw.app.demo_mode);

        let default_source = resolve_default_source(
            roster_dir,
            std::env::var_os("ROSTER_SOURCE").map(PathBuf::from),
            raw.app.default_source,
        );

        Ok(Self {
            demo_mode,
            default_source,
            join_delimiter: raw
                .app
                .join_delimiter
                .unwrap_or_else(|| DEFAULT_JOIN_DELIMITER.to_string()),
        })
    }

    /// Save config to the roster directory
    ///
    /// Only `demoMode` is written back; other settings are left as found.
    /// A malformed settings file is an error and is not overwritten.
    pub fn save(&self, roster_dir: &Path) -> Result<()> {
        let settings_path = roster_dir.join(SETTINGS_FILE);
        let mut settings: SettingsFile = match read_settings_content(&settings_path)? {
            Some(content) => serde_json::from_str(&content).with_context(|| {
                format!("Refusing to overwrite malformed {}", settings_path.display())
            })?,
            None => SettingsFile::default(),
        };

        settings.app.demo_mode = self.demo_mode;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)
            .with_context(|| format!("Failed to write {}", settings_path.display()))?;
        Ok(())
    }

    /// Enable demo mode
    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    /// Disable demo mode
    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }
}
