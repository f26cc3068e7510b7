//! Contact data types: the two validated fields and the [`Record`] that owns them.

use crate::error::{ContactsError, Result};
use crate::store::format::{FIELD_SEPARATOR, PHONE_SEPARATOR};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// ASCII only: `\d` would also accept other Unicode digits.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// A contact's display name. Stored verbatim: no trimming, case-sensitive.
///
/// Must be non-empty and free of `;` and line breaks, which the contacts
/// file uses as delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(ContactsError::InvalidName(name));
        }
        Ok(Self(name))
    }

    pub fn is_valid(name: &str) -> bool {
        !name.is_empty() && !name.contains(|c: char| c == FIELD_SEPARATOR || c == '\n' || c == '\r')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A phone number of exactly ten ASCII digits.
///
/// The wrapped value is valid for the whole lifetime of the object:
/// [`PhoneNumber::set_value`] validates before assigning, so a rejected
/// update leaves the previous number in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        Self::validate(&raw)?;
        Ok(Self(raw))
    }

    pub fn set_value(&mut self, raw: impl Into<String>) -> Result<()> {
        let raw = raw.into();
        Self::validate(&raw)?;
        self.0 = raw;
        Ok(())
    }

    pub fn is_valid(raw: &str) -> bool {
        PHONE_REGEX.is_match(raw)
    }

    fn validate(raw: &str) -> Result<()> {
        if Self::is_valid(raw) {
            Ok(())
        } else {
            Err(ContactsError::InvalidFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One contact: an immutable name plus an ordered list of distinct phones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn has_phone(&self, raw: &str) -> bool {
        self.position(raw).is_some()
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = PhoneNumber::new(raw)?;
        if self.has_phone(raw) {
            return Err(ContactsError::DuplicatePhone(raw.to_string()));
        }
        self.phones.push(phone);
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) -> Result<()> {
        let pos = self
            .position(raw)
            .ok_or_else(|| ContactsError::PhoneNotFound(raw.to_string()))?;
        self.phones.remove(pos);
        Ok(())
    }

    /// Replaces `old` with `new` in place, keeping its position.
    ///
    /// Unlike [`Record::add_phone`], `new` is not checked against the other
    /// phones of the record.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self
            .position(old)
            .ok_or_else(|| ContactsError::PhoneNotFound(old.to_string()))?;
        self.phones[pos].set_value(new)
    }

    pub fn find_phone(&self, raw: &str) -> Result<&PhoneNumber> {
        self.phones
            .iter()
            .find(|p| p.as_str() == raw)
            .ok_or_else(|| ContactsError::PhoneNotFound(raw.to_string()))
    }

    /// Phones in stored order joined with `"; "`.
    pub fn joined_phones(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(PHONE_SEPARATOR)
    }

    fn position(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.joined_phones()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn accepts_ten_digits() {
        let phone = PhoneNumber::new("0123456789").unwrap();
        assert_eq!(phone.as_str(), "0123456789");
    }

    #[test]
    fn rejects_malformed_phones() {
        for raw in [
            "",
            "012345678",
            "01234567890",
            "012345678a",
            "012-345-6789",
            " 0123456789",
            "0123456789\n",
            "٠١٢٣٤٥٦٧٨٩",
        ] {
            let err = PhoneNumber::new(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "accepted {:?}", raw);
        }
    }

    #[test]
    fn failed_set_value_keeps_previous_number() {
        let mut phone = PhoneNumber::new("0123456789").unwrap();
        assert!(phone.set_value("nope").is_err());
        assert_eq!(phone.as_str(), "0123456789");

        phone.set_value("9999999999").unwrap();
        assert_eq!(phone.as_str(), "9999999999");
    }

    #[test]
    fn name_is_kept_verbatim() {
        let record = Record::new(" Ann ").unwrap();
        assert_eq!(record.name().as_str(), " Ann ");
        assert!(record.phones().is_empty());
    }

    #[test]
    fn rejects_names_the_file_cannot_hold() {
        for raw in ["", "Al;ice", "Alice\n", "Al\rice"] {
            let err = Record::new(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidName, "accepted {:?}", raw);
        }
        assert!(Name::new("Mary Ann").is_ok());
    }

    #[test]
    fn add_phone_rejects_duplicates() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("0123456789").unwrap();

        let err = record.add_phone("0123456789").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicatePhone);
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn add_phone_validates_before_duplicate_check() {
        let mut record = Record::new("Alice").unwrap();
        let err = record.add_phone("123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(record.phones().is_empty());
    }

    #[test]
    fn remove_phone_removes_only_the_match() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("3333333333").unwrap();

        record.remove_phone("2222222222").unwrap();
        assert_eq!(record.joined_phones(), "1111111111; 3333333333");

        let err = record.remove_phone("2222222222").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PhoneNotFound);
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn edit_phone_keeps_position() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        record.edit_phone("1111111111", "9999999999").unwrap();
        assert_eq!(record.joined_phones(), "9999999999; 2222222222");
    }

    #[test]
    fn edit_phone_failures_leave_record_untouched() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();

        let missing = record.edit_phone("0000000000", "9999999999").unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::PhoneNotFound);

        let invalid = record.edit_phone("1111111111", "99").unwrap_err();
        assert_eq!(invalid.kind(), ErrorKind::InvalidFormat);
        assert_eq!(record.joined_phones(), "1111111111");
    }

    #[test]
    fn edit_phone_does_not_check_for_collisions() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();

        record.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(record.joined_phones(), "2222222222; 2222222222");
    }

    #[test]
    fn find_phone_is_exact() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("0123456789").unwrap();

        assert_eq!(record.find_phone("0123456789").unwrap().as_str(), "0123456789");
        assert!(record.find_phone("012345678").is_err());
    }

    #[test]
    fn renders_display_line() {
        let mut record = Record::new("Alice").unwrap();
        assert_eq!(record.to_string(), "Contact name: Alice, phones: ");

        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1111111111; 2222222222"
        );
    }
}
