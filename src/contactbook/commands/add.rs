use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;

/// Creates a contact with the given phones.
///
/// The record is fully built before it is inserted, so a bad or repeated
/// phone leaves the book untouched.
pub fn run<P: AsRef<str>>(
    book: &mut AddressBook,
    name: &str,
    phones: &[P],
) -> Result<CmdResult> {
    let mut record = Record::new(name)?;
    for phone in phones {
        record.add_phone(phone.as_ref())?;
    }
    book.add_record(record)?;

    Ok(CmdResult::default().with_message(CmdMessage::success("Contact added.")))
}
