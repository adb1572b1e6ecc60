//! Display formatting for terminal output
//!
//! Provides utilities for formatting contacts and birthday reports for
//! terminal display.

pub mod birthday;
pub mod contact;

pub use birthday::format_upcoming_birthdays;
pub use contact::{format_birthday, format_contact_list, format_phones};
