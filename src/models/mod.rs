//! Core data models for the address book
//!
//! Validated field types (name, phone number, birthday), the contact record
//! built from them, and the address book that owns all records.

pub mod address_book;
pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;
pub mod validation;

pub use address_book::AddressBook;
pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use name::{Name, MAX_NAME_LENGTH};
pub use phone::{PhoneNumber, PHONE_DIGITS};
pub use record::Record;
pub use validation::ValidationError;
