//! Reports module
//!
//! Provides computed views over the address book.

pub mod upcoming_birthdays;

pub use upcoming_birthdays::{
    upcoming_birthdays, upcoming_birthdays_within, UpcomingBirthday, UpcomingBirthdaysReport,
    DEFAULT_WINDOW_DAYS,
};
