/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of account that published an asset.
///
/// Unknown values are kept verbatim instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CreatorType {
    User,
    Group,
    Other(String),
}

impl CreatorType {
    pub fn as_str(&self) -> &str {
        match self {
            CreatorType::User => "User",
            CreatorType::Group => "Group",
            CreatorType::Other(raw) => raw,
        }
    }
}

impl From<String> for CreatorType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "User" => CreatorType::User,
            "Group" => CreatorType::Group,
            _ => CreatorType::Other(value),
        }
    }
}

impl From<CreatorType> for String {
    fn from(value: CreatorType) -> Self {
        match value {
            CreatorType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CreatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
