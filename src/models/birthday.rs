//! Birthday date model
//!
//! Birthdays are entered and displayed as `DD-MM-YYYY`. Parsing separates two
//! failure modes: input that isn't shaped like a dashed date at all, and a
//! dashed date that doesn't exist on the calendar.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validation::ValidationError;

/// strftime pattern used for display and persistence
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

/// A validated calendar date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD-MM-YYYY`
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !value.contains('-') {
            return Err(ValidationError::BadDateFormat);
        }

        parse_dmy(value)
            .map(Self)
            .ok_or_else(|| ValidationError::NonexistentDate(value.to_string()))
    }

    /// Wrap an existing date
    ///
    /// Only four-digit years are accepted, so every birthday formats back
    /// into something `parse` reads.
    pub fn from_date(date: NaiveDate) -> Result<Self, ValidationError> {
        if !(0..=9999).contains(&date.year()) {
            return Err(ValidationError::NonexistentDate(date.to_string()));
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

/// Strict `DD-MM-YYYY`: two digit day, two digit month, four digit year
fn parse_dmy(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('-');
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let digits = |s: &str, width: usize| s.len() == width && s.bytes().all(|b| b.is_ascii_digit());
    if !digits(day, 2) || !digits(month, 2) || !digits(year, 4) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_round_trips() {
        let date = NaiveDate::from_ymd_opt(1985, 3, 1).unwrap();
        let birthday = Birthday::from_date(date).unwrap();
        assert_eq!(Birthday::parse(&birthday.to_string()).unwrap(), birthday);
    }

    #[test]
    fn test_from_date_rejects_five_digit_years() {
        let date = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        assert!(matches!(
            Birthday::from_date(date),
            Err(ValidationError::NonexistentDate(_))
        ));
        let date = NaiveDate::from_ymd_opt(-1, 1, 1).unwrap();
        assert!(Birthday::from_date(date).is_err());
    }

    #[test]
    fn test_parse_valid() {
        let b = Birthday::parse("25-12-1990").unwrap();
        assert_eq!(b.date(), NaiveDate::from_ymd_opt(1990, 12, 25).unwrap());
        assert_eq!((b.day(), b.month(), b.year()), (25, 12, 1990));
    }

    #[test]
    fn test_leap_day() {
        assert!(Birthday::parse("29-02-2000").is_ok());
        assert_eq!(
            Birthday::parse("29-02-2001"),
            Err(ValidationError::NonexistentDate("29-02-2001".into()))
        );
    }

    #[test]
    fn test_missing_separator_is_bad_format() {
        for value in ["25.12.1990", "25/12/1990", "25121990", ""] {
            assert_eq!(Birthday::parse(value), Err(ValidationError::BadDateFormat));
        }
    }

    #[test]
    fn test_out_of_range_is_nonexistent() {
        for value in ["32-01-2000", "00-01-2000", "15-13-2000", "aa-01-2000", "1-1-2000", "1990-12-25"] {
            assert_eq!(
                Birthday::parse(value),
                Err(ValidationError::NonexistentDate(value.to_string())),
                "{value}"
            );
        }
    }

    #[test]
    fn test_round_trip_through_display() {
        for value in ["01-01-2000", "29-02-2024", "31-12-1899", "05-07-0999"] {
            let b = Birthday::parse(value).unwrap();
            assert_eq!(b.to_string(), value);
            assert_eq!(Birthday::parse(&b.to_string()).unwrap(), b);
        }
    }

    #[test]
    fn test_serde() {
        let b = Birthday::parse("03-04-1985").unwrap();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "\"03-04-1985\"");
        assert_eq!(serde_json::from_str::<Birthday>(&json).unwrap(), b);
        assert!(serde_json::from_str::<Birthday>("\"31-04-1985\"").is_err());
    }
}
