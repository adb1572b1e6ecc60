//! CLI command for data export
//!
//! Writes the whole address book to a file in the chosen format.

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{AddressBookError, AddressBookResult};
use crate::export::{export_contacts_csv, export_contacts_json, export_contacts_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format, one row per contact
    Csv,
    /// JSON format (full address book)
    Json,
    /// YAML format (full address book, human-readable)
    Yaml,
}

/// Handle `export`
pub fn handle_export_command(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> AddressBookResult<()> {
    let file = File::create(&output).map_err(|e| {
        AddressBookError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_contacts_csv(storage, &mut writer)?,
        ExportFormat::Json => export_contacts_json(storage, &mut writer, pretty)?,
        ExportFormat::Yaml => export_contacts_yaml(storage, &mut writer)?,
    }
    writer.flush()?;

    let count = storage.contacts.count()?;
    println!("Exported {} contacts to: {}", count, output.display());

    Ok(())
}
