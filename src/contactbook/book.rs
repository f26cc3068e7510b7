//! # Address Book
//!
//! [`AddressBook`] is the ordered, name-unique collection of [`Record`]s for a
//! session. Insertion order is observable: it is the order used by listing,
//! searching and the persisted file.
//!
//! Lookups are linear scans over the ordered list. Contact books are small and
//! keeping a single `Vec` means there is no second index to keep in sync.

use crate::error::{ContactsError, Result};
use crate::model::Record;
use crate::store::format;
use crate::store::fs::write_atomic;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Appends `record`, failing if a record with the same name exists.
    pub fn add_record(&mut self, record: Record) -> Result<()> {
        if self.position(record.name().as_str()).is_some() {
            return Err(ContactsError::DuplicateContact(
                record.name().as_str().to_string(),
            ));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Result<&Record> {
        self.position(name)
            .map(|pos| &self.records[pos])
            .ok_or_else(|| ContactsError::ContactNotFound(name.to_string()))
    }

    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record> {
        match self.position(name) {
            Some(pos) => Ok(&mut self.records[pos]),
            None => Err(ContactsError::ContactNotFound(name.to_string())),
        }
    }

    /// Removes the record named `name`. Deleting an absent name is a no-op.
    pub fn delete(&mut self, name: &str) {
        self.records.retain(|r| r.name().as_str() != name);
    }

    /// Records whose name contains `fragment` (case-sensitive), in book order.
    pub fn find_by_name_part(&self, fragment: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.name().as_str().contains(fragment))
            .collect()
    }

    /// Records holding a phone exactly equal to `raw`, in book order.
    pub fn find_by_phone(&self, raw: &str) -> Vec<&Record> {
        self.records.iter().filter(|r| r.has_phone(raw)).collect()
    }

    /// Display lines for every record, in book order.
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(Record::to_string).collect()
    }

    /// Adds every record found in `text`, one per line.
    ///
    /// Stops at the first bad line; records from earlier lines stay in the book.
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        for line in text.lines() {
            if let Some(record) = format::parse_line(line)? {
                self.add_record(record)?;
            }
        }
        Ok(())
    }

    /// Serializes the whole book, one line per record.
    pub fn to_text(&self) -> String {
        self.records.iter().map(format::format_record).collect()
    }

    pub fn load_from<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let content = fs::read_to_string(path).map_err(ContactsError::Io)?;
        self.load_str(&content)
    }

    /// Overwrites `path` with the serialized book.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_atomic(path.as_ref(), &self.to_text())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn record(name: &str, phones: &[&str]) -> Record {
        let mut record = Record::new(name).unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.name().as_str().to_string())
            .collect()
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["0123456789"])).unwrap();

        let err = book.add_record(record("Alice", &[])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateContact);
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice").unwrap().phones().len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut book = AddressBook::new();
        book.add_record(record("alice", &[])).unwrap();
        book.add_record(record("Alice", &[])).unwrap();
        assert_eq!(book.len(), 2);
        assert!(book.find("ALICE").is_err());
    }

    #[test]
    fn find_missing_contact_fails() {
        let book = AddressBook::new();
        let err = book.find("Nobody").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ContactNotFound);
        assert_eq!(err.to_string(), "Contact name Nobody is not found.");
    }

    #[test]
    fn find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &[])).unwrap();
        book.find_mut("Alice").unwrap().add_phone("0123456789").unwrap();
        assert_eq!(book.find("Alice").unwrap().joined_phones(), "0123456789");
    }

    #[test]
    fn delete_is_idempotent() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &[])).unwrap();
        book.add_record(record("Bob", &[])).unwrap();

        book.delete("Nobody");
        assert_eq!(book.len(), 2);

        book.delete("Alice");
        assert_eq!(book.len(), 1);
        assert!(book.find("Alice").is_err());

        book.delete("Alice");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn finds_by_name_fragment_in_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Anna", &[])).unwrap();
        book.add_record(record("Hannah", &[])).unwrap();
        book.add_record(record("Bob", &[])).unwrap();

        assert_eq!(names(&book.find_by_name_part("ann")), vec!["Hannah"]);
        assert_eq!(names(&book.find_by_name_part("nn")), vec!["Anna", "Hannah"]);
        assert!(book.find_by_name_part("zzz").is_empty());
    }

    #[test]
    fn finds_by_exact_phone() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["1111111111", "2222222222"]))
            .unwrap();
        book.add_record(record("Bob", &["3333333333"])).unwrap();
        book.add_record(record("Carol", &["2222222222"])).unwrap();

        assert_eq!(
            names(&book.find_by_phone("2222222222")),
            vec!["Alice", "Carol"]
        );
        assert!(book.find_by_phone("222222222").is_empty());
    }

    #[test]
    fn lists_in_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Zed", &["1111111111"])).unwrap();
        book.add_record(record("Amy", &[])).unwrap();

        assert_eq!(
            book.lines(),
            vec![
                "Contact name: Zed, phones: 1111111111".to_string(),
                "Contact name: Amy, phones: ".to_string(),
            ]
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.dat");

        let mut book = AddressBook::new();
        book.add_record(record("Alice", &["0123456789", "9999999999"]))
            .unwrap();
        book.add_record(record("Bob", &[])).unwrap();
        book.add_record(record("Carol Ann", &["5555555555"])).unwrap();
        book.save_to(&path).unwrap();

        let mut loaded = AddressBook::new();
        loaded.load_from(&path).unwrap();
        assert_eq!(loaded, book);
    }

    #[test]
    fn save_truncates_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.dat");
        fs::write(&path, "Old;1111111111\nOlder;2222222222\n").unwrap();

        let mut book = AddressBook::new();
        book.add_record(record("New", &[])).unwrap();
        book.save_to(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "New;\n");
    }

    #[test]
    fn load_keeps_records_before_a_bad_line() {
        let mut book = AddressBook::new();
        let err = book
            .load_str("Alice;0123456789\nBob;bad\nCarol;1111111111\n")
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert_eq!(book.len(), 1);
        assert!(book.find("Alice").is_ok());
    }

    #[test]
    fn load_rejects_duplicate_names_across_lines() {
        let mut book = AddressBook::new();
        let err = book.load_str("Alice;\nAlice;0123456789\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateContact);
    }

    #[test]
    fn load_accepts_crlf_and_blank_lines() {
        let mut book = AddressBook::new();
        book.load_str("Alice;0123456789\r\n\r\nBob;\r\n").unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.find("Alice").unwrap().joined_phones(), "0123456789");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let mut book = AddressBook::new();
        let err = book.load_from(dir.path().join("absent.dat")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
