//! Storage layer
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit trail for every change made through it.

pub mod contacts;
pub mod file_io;

pub use contacts::{ContactRepository, RecordChange, RecordUpdate};
pub use file_io::{read_json, write_json_atomic};

use serde::Serialize;
use tracing::warn;

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::config::paths::AddressBookPaths;
use crate::error::AddressBookError;

/// Main storage coordinator
pub struct Storage {
    paths: AddressBookPaths,
    pub contacts: ContactRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: AddressBookPaths) -> Result<Self, AddressBookError> {
        paths.ensure_directories()?;

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    pub fn paths(&self) -> &AddressBookPaths {
        &self.paths
    }

    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit_enabled = enabled;
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), AddressBookError> {
        self.contacts.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), AddressBookError> {
        self.contacts.save()
    }

    /// Record a newly created contact in the audit log
    pub fn log_create<T: Serialize>(&self, contact: &str, entity: &T) {
        self.write_audit(AuditEntry::create(contact, entity));
    }

    /// Record a changed contact; the diff summary is computed from the two states
    pub fn log_update<T: Serialize>(&self, contact: &str, before: &T, after: &T) {
        let entry = AuditEntry::update(contact, before, after, None);
        let diff = match (&entry.before, &entry.after) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };
        self.write_audit(AuditEntry {
            diff_summary: diff,
            ..entry
        });
    }

    /// Record a deleted contact in the audit log
    pub fn log_delete<T: Serialize>(&self, contact: &str, entity: &T) {
        self.write_audit(AuditEntry::delete(contact, entity));
    }

    /// Append to the audit log
    ///
    /// The contact change is already applied when this runs, so a failed
    /// write is logged and otherwise ignored.
    fn write_audit(&self, entry: AuditEntry) {
        if !self.audit_enabled {
            return;
        }
        if let Err(e) = self.audit.log(&entry) {
            warn!(error = %e, contact = %entry.contact, "failed to write audit entry");
        }
    }
}
