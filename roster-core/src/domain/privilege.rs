//! Privilege domain model

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// A permission level held by a user
///
/// Declaration order is the sort order, so privileges can key ordered maps.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Privilege {
    Create,
    Read,
    Update,
    Delete,
}

impl Privilege {
    /// Parse a privilege, reporting the accepted names on failure
    pub fn parse(value: &str) -> crate::domain::result::Result<Self> {
        value.trim().parse().map_err(|_| {
            crate::domain::result::Error::validation(format!(
                "Unknown privilege '{}' (expected one of: {})",
                value.trim(),
                Self::VARIANTS.join(", ")
            ))
        })
    }
}
