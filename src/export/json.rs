//! JSON Export functionality
//!
//! Exports the whole address book in a versioned, machine-readable format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Complete address book export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactsExport {
    pub schema_version: u32,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub contacts: Vec<Record>,
}

impl ContactsExport {
    /// Snapshot the contacts currently in storage
    pub fn from_storage(storage: &Storage) -> AddressBookResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contacts: storage.contacts.get_all()?,
        })
    }
}

/// Export the address book as JSON
pub fn export_contacts_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> AddressBookResult<()> {
    let export = ContactsExport::from_storage(storage)?;

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };
    result.map_err(|e| AddressBookError::Export(e.to_string()))
}
