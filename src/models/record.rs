//! Contact record model
//!
//! A record owns one name, an ordered list of distinct phone numbers and an
//! optional birthday. Every mutator either succeeds completely or leaves the
//! record untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::Birthday;
use super::name::Name;
use super::phone::PhoneNumber;
use super::validation::ValidationError;

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordData")]
pub struct Record {
    name: Name,

    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

/// Unchecked on-disk shape, validated into a [`Record`]
#[derive(Deserialize)]
struct RecordData {
    name: Name,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<RecordData> for Record {
    type Error = ValidationError;

    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        let mut record = Record {
            name: data.name,
            phones: Vec::with_capacity(data.phones.len()),
            birthday: data.birthday,
        };
        for phone in data.phones {
            record.push_phone(phone)?;
        }
        Ok(record)
    }
}

impl Record {
    /// Create an empty record for a contact name
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.push_phone(phone)
    }

    fn push_phone(&mut self, phone: PhoneNumber) -> Result<(), ValidationError> {
        if self.find_phone(phone.as_str()).is_some() {
            return Err(ValidationError::DuplicatePhone(phone.into()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone number, returning it
    pub fn remove_phone(&mut self, phone: &str) -> Result<PhoneNumber, ValidationError> {
        let index = self
            .position(phone)
            .ok_or_else(|| ValidationError::PhoneNotFound(phone.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with `new` in place
    ///
    /// `new` is validated and checked for duplicates before anything changes.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let index = self
            .position(old)
            .ok_or_else(|| ValidationError::PhoneNotFound(old.to_string()))?;

        let replacement = PhoneNumber::new(new)?;
        if old == new {
            return Ok(());
        }
        if self.find_phone(new).is_some() {
            return Err(ValidationError::DuplicatePhone(new.to_string()));
        }

        self.phones[index] = replacement;
        Ok(())
    }

    /// Look up a stored phone number
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == phone)
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }

    /// Set or replace the birthday, returning the previous one
    pub fn set_birthday(&mut self, date: &str) -> Result<Option<Birthday>, ValidationError> {
        let birthday = Birthday::parse(date)?;
        Ok(self.birthday.replace(birthday))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
