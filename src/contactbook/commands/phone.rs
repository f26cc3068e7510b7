use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Reports the phones of one contact, joined with `"; "`.
pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book.find(name)?;
    Ok(CmdResult::default().with_message(CmdMessage::info(record.joined_phones())))
}
