//! Validation errors for contact fields and records

use thiserror::Error;

/// Reasons a name, phone number or birthday can be rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The name cannot be empty.")]
    EmptyName,

    #[error("The name can consist of a maximum of 21 characters (got {0}).")]
    NameTooLong(usize),

    #[error("Phone number must be a 10-digit number.")]
    InvalidPhone(String),

    #[error("Invalid date format. Use DD-MM-YYYY")]
    BadDateFormat,

    #[error("Invalid date: '{0}' does not exist.")]
    NonexistentDate(String),

    #[error("Phone {0} already exists")]
    DuplicatePhone(String),

    #[error("Phone {0} not found in this contact.")]
    PhoneNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        assert_eq!(
            ValidationError::NonexistentDate("31-02-2020".into()).to_string(),
            "Invalid date: '31-02-2020' does not exist."
        );
        assert_eq!(
            ValidationError::PhoneNotFound("0501234567".into()).to_string(),
            "Phone 0501234567 not found in this contact."
        );
    }
}
