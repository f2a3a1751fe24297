//! Named user fields for text projections

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use super::User;

/// A user attribute that can be rendered as text
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserField {
    FirstName,
    LastName,
    FullName,
    Age,
}

impl UserField {
    /// Render this field of `user` as text
    pub fn extract(&self, user: &User) -> String {
        match self {
            UserField::FirstName => user.first_name.clone(),
            UserField::LastName => user.last_name.clone(),
            UserField::FullName => user.full_name(),
            UserField::Age => user.age.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract() {
        let user = User::new("Grace", "Hopper", 85);
        assert_eq!(UserField::FirstName.extract(&user), "Grace");
        assert_eq!(UserField::LastName.extract(&user), "Hopper");
        assert_eq!(UserField::FullName.extract(&user), "Grace Hopper");
        assert_eq!(UserField::Age.extract(&user), "85");
    }

    #[test]
    fn test_parse_snake_case() {
        assert_eq!("full_name".parse::<UserField>().unwrap(), UserField::FullName);
        assert!("fullname".parse::<UserField>().is_err());
    }
}
