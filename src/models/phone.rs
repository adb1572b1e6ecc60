//! Phone number model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::ValidationError;

/// Number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;

/// A phone number made of exactly ten decimal digits
///
/// Validation happens at construction and again on deserialization, so a
/// `PhoneNumber` value is always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidPhone(value));
        }

        Ok(Self(value))
    }

    fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl PartialEq<str> for PhoneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
