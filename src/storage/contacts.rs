//! Contact repository for JSON storage
//!
//! Manages loading and saving the address book to contacts.json. The whole
//! book sits behind one lock; each mutating call holds the write lock for
//! the full read-modify-write.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{AddressBook, Record, ValidationError};

use super::file_io::{read_json, write_json_atomic};

/// Serializable contact data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ContactData {
    #[serde(default)]
    contacts: Vec<Record>,
}

/// A record before and after an in-place update
#[derive(Debug, Clone)]
pub struct RecordUpdate<T> {
    pub before: Record,
    pub after: Record,
    pub output: T,
}

/// What `create_or_update` did
#[derive(Debug, Clone)]
pub enum RecordChange {
    Created(Record),
    Updated { before: Record, after: Record },
}

/// Repository for contact persistence
pub struct ContactRepository {
    path: PathBuf,
    data: RwLock<AddressBook>,
}

impl ContactRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(AddressBook::new()),
        }
    }

    fn read(&self) -> AddressBookResult<RwLockReadGuard<'_, AddressBook>> {
        self.data.read().map_err(|e| {
            AddressBookError::Storage(format!("Failed to acquire read lock: {}", e))
        })
    }

    fn write(&self) -> AddressBookResult<RwLockWriteGuard<'_, AddressBook>> {
        self.data.write().map_err(|e| {
            AddressBookError::Storage(format!("Failed to acquire write lock: {}", e))
        })
    }

    /// Load contacts from disk, replacing what is in memory
    ///
    /// A missing file yields an empty address book.
    pub fn load(&self) -> AddressBookResult<()> {
        let file_data: ContactData = read_json(&self.path)?;
        let book: AddressBook = file_data.contacts.into_iter().collect();
        debug!(path = %self.path.display(), count = book.len(), "loaded contacts");

        *self.write()? = book;
        Ok(())
    }

    /// Save contacts to disk
    pub fn save(&self) -> AddressBookResult<()> {
        let book = self.read()?;
        let file_data = ContactData {
            contacts: book.iter().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)?;
        debug!(path = %self.path.display(), count = book.len(), "saved contacts");
        Ok(())
    }

    /// Get a contact by exact name
    pub fn get(&self, name: &str) -> AddressBookResult<Option<Record>> {
        Ok(self.read()?.find(name).cloned())
    }

    /// Get all contacts in name order
    pub fn get_all(&self) -> AddressBookResult<Vec<Record>> {
        Ok(self.read()?.iter().cloned().collect())
    }

    /// Run a read-only computation over the whole address book
    pub fn with_book<R>(&self, f: impl FnOnce(&AddressBook) -> R) -> AddressBookResult<R> {
        let book = self.read()?;
        Ok(f(&book))
    }

    /// Insert or replace a contact, returning the replaced record
    pub fn upsert(&self, record: Record) -> AddressBookResult<Option<Record>> {
        Ok(self.write()?.add_record(record))
    }

    /// Mutate one contact in place
    ///
    /// Fails with `NotFound` if the contact doesn't exist. If `f` fails the
    /// record is left as it was.
    pub fn update<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Record) -> Result<T, ValidationError>,
    ) -> AddressBookResult<RecordUpdate<T>> {
        let mut book = self.write()?;
        let record = book
            .find_mut(name)
            .ok_or_else(|| AddressBookError::contact_not_found(name))?;

        let before = record.clone();
        let output = f(record)?;

        Ok(RecordUpdate {
            before,
            after: record.clone(),
            output,
        })
    }

    /// Apply `f` to a contact, creating the contact first if it is missing
    ///
    /// Lookup, creation and mutation all happen under one write lock. A new
    /// contact is only inserted when `f` succeeds on it.
    pub fn create_or_update(
        &self,
        name: &str,
        f: impl FnOnce(&mut Record) -> Result<(), ValidationError>,
    ) -> AddressBookResult<RecordChange> {
        let mut book = self.write()?;

        if let Some(record) = book.find_mut(name) {
            let before = record.clone();
            f(record)?;
            return Ok(RecordChange::Updated {
                before,
                after: record.clone(),
            });
        }

        let mut record = Record::new(name)?;
        f(&mut record)?;
        book.add_record(record.clone());
        Ok(RecordChange::Created(record))
    }

    /// Delete a contact, returning its record
    pub fn delete(&self, name: &str) -> AddressBookResult<Record> {
        self.write()?.delete(name)
    }

    pub fn count(&self) -> AddressBookResult<usize> {
        Ok(self.read()?.len())
    }
}
