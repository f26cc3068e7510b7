use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Removes a contact. Succeeds even when no contact has that name.
pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    book.delete(name);
    Ok(CmdResult::default().with_message(CmdMessage::success("Contact removed.")))
}
