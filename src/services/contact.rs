//! Contact service
//!
//! Provides the contact operations the shell calls: validation ordering,
//! not-found handling and audit logging on top of the contact repository.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::{Birthday, PhoneNumber, Record, ValidationError};
use crate::reports::UpcomingBirthdaysReport;
use crate::storage::{RecordChange, RecordUpdate, Storage};

/// What `add_contact` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new contact was created with the phone
    Created,
    /// The phone was added to an existing contact
    Updated,
}

/// What `set_birthday` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayOutcome {
    Added,
    Updated,
}

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a Storage,
}

impl<'a> ContactService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a phone to a contact, creating the contact if it doesn't exist
    ///
    /// The phone is validated before anything is created, so a bad number
    /// never leaves an empty contact behind.
    pub fn add_contact(&self, name: &str, phone: &str) -> AddressBookResult<AddOutcome> {
        PhoneNumber::new(phone)?;

        match self
            .storage
            .contacts
            .create_or_update(name, |record| record.add_phone(phone))?
        {
            RecordChange::Created(record) => {
                self.storage.log_create(name, &record);
                info!(contact = name, "created contact");
                Ok(AddOutcome::Created)
            }
            RecordChange::Updated { before, after } => {
                self.storage.log_update(name, &before, &after);
                debug!(contact = name, "updated contact");
                Ok(AddOutcome::Updated)
            }
        }
    }

    /// Replace one of a contact's phone numbers
    pub fn change_phone(&self, name: &str, old: &str, new: &str) -> AddressBookResult<()> {
        self.update(name, |record| record.edit_phone(old, new))?;
        Ok(())
    }

    /// Remove a phone number from a contact
    pub fn remove_phone(&self, name: &str, phone: &str) -> AddressBookResult<PhoneNumber> {
        let change = self.update(name, |record| record.remove_phone(phone))?;
        Ok(change.output)
    }

    /// Phone numbers of a contact
    pub fn phones(&self, name: &str) -> AddressBookResult<Vec<PhoneNumber>> {
        Ok(self.require(name)?.phones().to_vec())
    }

    /// Set or replace a contact's birthday
    pub fn set_birthday(&self, name: &str, date: &str) -> AddressBookResult<BirthdayOutcome> {
        let change = self.update(name, |record| record.set_birthday(date))?;
        Ok(match change.output {
            Some(_) => BirthdayOutcome::Updated,
            None => BirthdayOutcome::Added,
        })
    }

    /// A contact's birthday, if set
    pub fn birthday(&self, name: &str) -> AddressBookResult<Option<Birthday>> {
        Ok(self.require(name)?.birthday().copied())
    }

    pub fn get(&self, name: &str) -> AddressBookResult<Option<Record>> {
        self.storage.contacts.get(name)
    }

    /// All contacts in name order
    pub fn list(&self) -> AddressBookResult<Vec<Record>> {
        self.storage.contacts.get_all()
    }

    /// Delete a contact
    pub fn delete(&self, name: &str) -> AddressBookResult<Record> {
        let record = self.storage.contacts.delete(name)?;
        self.storage.log_delete(name, &record);
        info!(contact = name, "deleted contact");
        Ok(record)
    }

    /// Birthdays from `today` through `today + window_days`
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> AddressBookResult<UpcomingBirthdaysReport> {
        self.storage
            .contacts
            .with_book(|book| UpcomingBirthdaysReport::generate(book, today, window_days))
    }

    fn require(&self, name: &str) -> AddressBookResult<Record> {
        self.storage
            .contacts
            .get(name)?
            .ok_or_else(|| AddressBookError::contact_not_found(name))
    }

    fn update<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Record) -> Result<T, ValidationError>,
    ) -> AddressBookResult<RecordUpdate<T>> {
        let change = self.storage.contacts.update(name, f)?;
        if change.before != change.after {
            self.storage.log_update(name, &change.before, &change.after);
            debug!(contact = name, "updated contact");
        }
        Ok(change)
    }
}
