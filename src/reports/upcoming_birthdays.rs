//! Upcoming birthdays report
//!
//! Finds contacts whose next birthday falls within a window of days starting
//! today. Congratulations that would land on a weekend move to the following
//! Monday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::io::Write;

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{AddressBook, Birthday, Record, BIRTHDAY_FORMAT};

/// Days ahead (inclusive) that count as "upcoming"
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// One contact to congratulate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,
    /// The birthday projected onto the year it next occurs
    pub birthday: NaiveDate,
    /// When to congratulate (birthday, or the Monday after a weekend birthday)
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date as `DD-MM-YYYY`
    pub fn congratulation_date_str(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }

    /// Whether the congratulation was moved off a weekend
    pub fn is_shifted(&self) -> bool {
        self.birthday != self.congratulation_date
    }
}

/// Upcoming birthdays within the default seven day window
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> Vec<UpcomingBirthday> {
    upcoming_birthdays_within(book, today, DEFAULT_WINDOW_DAYS)
}

/// Upcoming birthdays from `today` through `today + window_days`
///
/// Sorted by congratulation date, then name.
pub fn upcoming_birthdays_within(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday> {
    let mut upcoming: Vec<_> = book
        .iter()
        .filter_map(|record| upcoming_for(record, today, window_days))
        .collect();

    upcoming.sort_by(|a, b| {
        a.congratulation_date
            .cmp(&b.congratulation_date)
            .then_with(|| a.name.cmp(&b.name))
    });
    upcoming
}

fn upcoming_for(record: &Record, today: NaiveDate, window_days: u32) -> Option<UpcomingBirthday> {
    let birthday = record.birthday()?;
    let next = next_occurrence(birthday, today)?;

    let days = (next - today).num_days();
    if days < 0 || days > i64::from(window_days) {
        return None;
    }

    Some(UpcomingBirthday {
        name: record.name().to_string(),
        birthday: next,
        congratulation_date: congratulation_date(next),
    })
}

/// The first anniversary of `birthday` on or after `today`
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = project_onto_year(birthday, today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    project_onto_year(birthday, today.year() + 1)
}

/// Month and day of `birthday` in `year`; Feb 29 becomes Feb 28 outside leap years
pub fn project_onto_year(birthday: &Birthday, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        if birthday.month() == 2 && birthday.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// Move Saturday and Sunday to the following Monday
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Upcoming birthdays as of a reference date
#[derive(Debug, Clone)]
pub struct UpcomingBirthdaysReport {
    /// The day the window starts
    pub reference_date: NaiveDate,
    /// Window length in days
    pub window_days: u32,
    /// Contacts to congratulate
    pub entries: Vec<UpcomingBirthday>,
}

impl UpcomingBirthdaysReport {
    /// Generate the report for an address book
    pub fn generate(book: &AddressBook, today: NaiveDate, window_days: u32) -> Self {
        Self {
            reference_date: today,
            window_days,
            entries: upcoming_birthdays_within(book, today, window_days),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> AddressBookResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record(["Name", "Birthday", "Congratulation Date"])
            .map_err(|e| AddressBookError::Export(e.to_string()))?;

        for entry in &self.entries {
            csv_writer
                .write_record([
                    entry.name.clone(),
                    entry.birthday.format(BIRTHDAY_FORMAT).to_string(),
                    entry.congratulation_date_str(),
                ])
                .map_err(|e| AddressBookError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| AddressBookError::Export(e.to_string()))?;
        Ok(())
    }
}
