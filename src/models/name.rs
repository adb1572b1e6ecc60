//! Contact name
//!
//! Names are the key of the address book, so they are kept exactly as typed:
//! no trimming and no case folding.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::ValidationError;

/// Longest accepted name, in characters
pub const MAX_NAME_LENGTH: usize = 21;

/// A validated contact name (1 to 21 characters)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a new name, validating its length
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let len = value.chars().count();

        if len == 0 {
            return Err(ValidationError::EmptyName);
        }
        if len > MAX_NAME_LENGTH {
            return Err(ValidationError::NameTooLong(len));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
