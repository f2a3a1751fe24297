//! Adapter implementations
//!
//! Adapters implement the [`UserSource`] port with concrete media:
//! - JSON files (and JSON text piped on stdin)
//! - CSV files
//! - The built-in demo roster

pub mod csv_file;
pub mod demo;
pub mod json_file;

use std::path::Path;

use crate::domain::result::{Error, Result};
use crate::ports::UserSource;

pub use csv_file::CsvFileSource;
pub use demo::DemoSource;
pub use json_file::{JsonFileSource, JsonTextSource};

/// Pick a file adapter from the file extension
pub fn source_for_path(path: &Path) -> Result<Box<dyn UserSource>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => Ok(Box::new(JsonFileSource::new(path))),
        Some("csv") => Ok(Box::new(CsvFileSource::new(path))),
        _ => Err(Error::config(format!(
            "Unsupported user file {} (expected .json or .csv)",
            path.display()
        ))),
    }
}
