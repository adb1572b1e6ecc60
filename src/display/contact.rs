//! Contact display formatting
//!
//! Formats contacts for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Birthday, PhoneNumber, Record};

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phones")]
    phones: String,
    #[tabled(rename = "Birthday")]
    birthday: String,
}

impl From<&Record> for ContactRow {
    fn from(record: &Record) -> Self {
        let phones = if record.phones().is_empty() {
            "No phones".to_string()
        } else {
            // one phone per line inside the cell
            record
                .phones()
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join("\n")
        };

        Self {
            name: record.name().to_string(),
            phones,
            birthday: record
                .birthday()
                .map(Birthday::to_string)
                .unwrap_or_default(),
        }
    }
}

/// Format all contacts as a table
pub fn format_contact_list(records: &[Record]) -> String {
    if records.is_empty() {
        return "Address book is empty.".to_string();
    }

    let rows: Vec<ContactRow> = records.iter().map(ContactRow::from).collect();
    Table::new(rows).with(Style::psql()).to_string()
}

/// Format a contact's phone numbers on one line
pub fn format_phones(phones: &[PhoneNumber]) -> String {
    if phones.is_empty() {
        return "No phones.".to_string();
    }

    let list: Vec<&str> = phones.iter().map(PhoneNumber::as_str).collect();
    format!("phones: {}.", list.join("; "))
}

/// Format a contact's birthday
pub fn format_birthday(name: &str, birthday: Option<&Birthday>) -> String {
    match birthday {
        Some(b) => format!("{}'s birthday: {}", name, b),
        None => format!("No birthday set for {}.", name),
    }
}
