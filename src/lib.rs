//! Address book - terminal contact manager with birthday reminders
//!
//! This library provides the core functionality for the `addressbook`
//! application: validated contact records, a name-keyed address book,
//! the upcoming-birthdays schedule and an interactive command shell.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (names, phones, birthdays, records)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`: Upcoming birthdays report
//! - `display`: Terminal table formatting
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Interactive shell and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use addressbook::config::{paths::AddressBookPaths, settings::Settings};
//! use addressbook::storage::Storage;
//!
//! let paths = AddressBookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::AddressBookError;
