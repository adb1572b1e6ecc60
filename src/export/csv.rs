//! CSV Export functionality
//!
//! One row per contact; multiple phones share a cell separated by `;`.

use std::io::Write;

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::PhoneNumber;
use crate::storage::Storage;

/// Export all contacts to CSV
pub fn export_contacts_csv<W: Write>(storage: &Storage, writer: &mut W) -> AddressBookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Name", "Phones", "Birthday"])
        .map_err(|e| AddressBookError::Export(e.to_string()))?;

    for record in storage.contacts.get_all()? {
        let phones: Vec<&str> = record.phones().iter().map(PhoneNumber::as_str).collect();
        let phones = phones.join(";");
        let birthday = record.birthday().map(|b| b.to_string()).unwrap_or_default();

        csv_writer
            .write_record([record.name().as_str(), phones.as_str(), birthday.as_str()])
            .map_err(|e| AddressBookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| AddressBookError::Export(e.to_string()))?;
    Ok(())
}
