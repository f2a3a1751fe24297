//! JSON user sources
//!
//! Users are stored as a JSON array:
//! ```json
//! [
//!   { "first_name": "Ada", "last_name": "Lovelace", "age": 36, "privileges": ["READ"] }
//! ]
//! ```

use std::path::PathBuf;

use log::debug;

use crate::domain::result::{Error, Result};
use crate::domain::User;
use crate::ports::UserSource;

/// Parse a JSON array of users
pub fn parse_users(content: &str) -> Result<Vec<User>> {
    let users: Vec<User> = serde_json::from_str(content)?;
    Ok(users)
}

/// Users read from a JSON file on disk
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl UserSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load_users(&self) -> Result<Vec<User>> {
        if !self.path.exists() {
            return Err(Error::not_found(format!(
                "User file {}",
                self.path.display()
            )));
        }
        let content = std::fs::read_to_string(&self.path)?;
        let users = parse_users(&content)?;
        debug!("Loaded {} user(s) from {}", users.len(), self.name);
        Ok(users)
    }
}

/// Users parsed from JSON text already in memory (e.g., piped on stdin)
pub struct JsonTextSource {
    name: String,
    content: String,
}

impl JsonTextSource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl UserSource for JsonTextSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load_users(&self) -> Result<Vec<User>> {
        let users = parse_users(&self.content)?;
        debug!("Parsed {} user(s) from {}", users.len(), self.name);
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Privilege;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"[
        {"first_name": "Ada", "last_name": "Lovelace", "age": 36, "privileges": ["READ", "UPDATE"]},
        {"first_name": "Alan", "last_name": "Turing", "age": 41}
    ]"#;

    #[test]
    fn test_parse_users() {
        let users = parse_users(SAMPLE).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].privileges, vec![Privilege::Read, Privilege::Update]);
        assert!(users[1].privileges.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_privilege() {
        let err = parse_users(
            r#"[{"first_name":"A","last_name":"B","age":1,"privileges":["ADMIN"]}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_file_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let source = JsonFileSource::new(&path);
        assert_eq!(source.name(), path.display().to_string());
        assert_eq!(source.load_users().unwrap().len(), 2);
    }

    #[test]
    fn test_file_source_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(temp_dir.path().join("nope.json"));
        assert!(matches!(source.load_users(), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_text_source() {
        let source = JsonTextSource::new("stdin", SAMPLE);
        assert_eq!(source.name(), "stdin");
        assert_eq!(source.load_users().unwrap()[1].first_name, "Alan");
    }
}
