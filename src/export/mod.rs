//! Export module
//!
//! Provides address book export in multiple formats:
//! - CSV: one row per contact (spreadsheet-compatible)
//! - JSON: versioned, machine-readable
//! - YAML: versioned, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_contacts_csv;
pub use json::{export_contacts_json, ContactsExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_contacts_yaml;
