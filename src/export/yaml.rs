//! YAML Export functionality
//!
//! Exports the address book to YAML for human-readable backup.

use std::io::Write;

use crate::error::{AddressBookError, AddressBookResult};
use crate::export::json::ContactsExport;
use crate::storage::Storage;

/// Export the address book to YAML format
pub fn export_contacts_yaml<W: Write>(storage: &Storage, writer: &mut W) -> AddressBookResult<()> {
    let export = ContactsExport::from_storage(storage)?;

    let header = format!(
        "# Address Book Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| AddressBookError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AddressBookError::Export(e.to_string()))?;

    Ok(())
}
