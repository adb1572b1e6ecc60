//! Upcoming birthday display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::BIRTHDAY_FORMAT;
use crate::reports::{UpcomingBirthday, UpcomingBirthdaysReport};

#[derive(Tabled)]
struct UpcomingRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Birthday")]
    birthday: String,
    #[tabled(rename = "Congratulate on")]
    congratulate_on: String,
}

impl From<&UpcomingBirthday> for UpcomingRow {
    fn from(entry: &UpcomingBirthday) -> Self {
        Self {
            name: entry.name.clone(),
            birthday: entry.birthday.format("%a %d-%m-%Y").to_string(),
            congratulate_on: entry
                .congratulation_date
                .format(BIRTHDAY_FORMAT)
                .to_string(),
        }
    }
}

/// Format the upcoming birthdays report as a table
pub fn format_upcoming_birthdays(report: &UpcomingBirthdaysReport) -> String {
    if report.is_empty() {
        return format!(
            "No upcoming birthdays in the next {} days.",
            report.window_days
        );
    }

    let rows: Vec<UpcomingRow> = report.entries.iter().map(UpcomingRow::from).collect();
    Table::new(rows).with(Style::psql()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddressBook, Record};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
    }

    #[test]
    fn test_empty_report() {
        let report = UpcomingBirthdaysReport::generate(&AddressBook::new(), today(), 7);
        assert_eq!(
            format_upcoming_birthdays(&report),
            "No upcoming birthdays in the next 7 days."
        );
    }

    #[test]
    fn test_weekend_birthday_row() {
        let mut record = Record::new("John").unwrap();
        record.set_birthday("22-12-1990").unwrap();
        let book: AddressBook = std::iter::once(record).collect();

        let report = UpcomingBirthdaysReport::generate(&book, today(), 7);
        let table = format_upcoming_birthdays(&report);

        assert!(table.contains("Congratulate on"));
        assert!(table.contains("Sun 22-12-2024"));
        assert!(table.contains("23-12-2024"));
    }
}
