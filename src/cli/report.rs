//! CLI commands for one-shot reports
//!
//! Non-interactive counterparts of the shell's `all` and `birthdays`.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::display::{format_contact_list, format_upcoming_birthdays};
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Birthday;
use crate::services::ContactService;
use crate::storage::Storage;

/// Print every contact
pub fn handle_list_command(storage: &Storage) -> AddressBookResult<()> {
    let service = ContactService::new(storage);
    println!("{}", format_contact_list(&service.list()?));
    Ok(())
}

/// Print or export the upcoming birthdays report
///
/// `date` is the reference day in DD-MM-YYYY, today when absent. `days`
/// overrides the configured window.
pub fn handle_birthdays_command(
    storage: &Storage,
    settings: &Settings,
    days: Option<u32>,
    date: Option<String>,
    output: Option<PathBuf>,
) -> AddressBookResult<()> {
    let today = parse_reference_date(date.as_deref())?;
    let window = days.unwrap_or(settings.birthday_window_days);

    let report = ContactService::new(storage).upcoming_birthdays(today, window)?;

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            AddressBookError::Export(format!(
                "Failed to create file {}: {}",
                path.display(),
                e
            ))
        })?;
        let mut writer = BufWriter::new(file);
        report.export_csv(&mut writer)?;
        println!("Upcoming birthdays exported to: {}", path.display());
    } else {
        println!("{}", format_upcoming_birthdays(&report));
    }

    Ok(())
}

fn parse_reference_date(date: Option<&str>) -> AddressBookResult<NaiveDate> {
    match date {
        Some(s) => Ok(Birthday::parse(s)?.date()),
        None => Ok(Local::now().date_naive()),
    }
}
