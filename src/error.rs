//! Custom error types for the address book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Field-level validation failures live in
//! [`crate::models::ValidationError`] and are wrapped here so the command layer
//! can tell them apart from lookups that found nothing.

use thiserror::Error;

use crate::models::ValidationError;

/// The main error type for address book operations
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A name, phone number or birthday was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A shell command was called with missing arguments
    #[error("Usage: {0}")]
    Usage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AddressBookError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: name.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for AddressBookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AddressBookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for address book operations
pub type AddressBookResult<T> = Result<T, AddressBookError>;
