//! Address book: the collection of contact records keyed by name

use std::collections::btree_map::{self, BTreeMap};

use crate::error::{AddressBookError, AddressBookResult};

use super::record::Record;

/// All contacts, one record per distinct name
///
/// Iteration is in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name
    ///
    /// An existing contact with the same name is replaced as a whole and
    /// returned; phone lists are not merged.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().as_str().to_string(), record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a contact, returning its record
    pub fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| AddressBookError::contact_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> btree_map::Values<'_, String, Record> {
        self.records.values()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = btree_map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("John", &["1234567890"])).is_none());

        let found = book.find("John").unwrap();
        assert_eq!(found.phones()[0].as_str(), "1234567890");
        assert!(book.find("Jane").is_none());
        assert!(book.contains("John"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &[]));
        assert!(book.find("john").is_none());
    }

    #[test]
    fn test_add_record_replaces_without_merge() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &["1111111111"]));

        let replaced = book.add_record(record("John", &["2222222222"])).unwrap();
        assert_eq!(replaced.phones()[0].as_str(), "1111111111");

        let current = book.find("John").unwrap();
        assert_eq!(current.phones().len(), 1);
        assert_eq!(current.phones()[0].as_str(), "2222222222");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_mut() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &[]));
        book.find_mut("John").unwrap().add_phone("5555555555").unwrap();
        assert!(book.find("John").unwrap().find_phone("5555555555").is_some());
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("John", &[]));

        let removed = book.delete("John").unwrap();
        assert_eq!(removed.name().as_str(), "John");
        assert!(book.find("John").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut book = AddressBook::new();
        let err = book.delete("Ghost").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Contact not found: Ghost");
    }

    #[test]
    fn test_iteration_in_name_order() {
        let book: AddressBook = ["Zoe", "Adam", "Mia"]
            .into_iter()
            .map(|n| record(n, &[]))
            .collect();
        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Adam", "Mia", "Zoe"]);
    }
}
