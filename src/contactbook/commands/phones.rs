//! Phone edits on an existing contact: `addphone`, `removephone` and `updatephone`.

use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    book.find_mut(name)?.add_phone(phone)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Phone added.")))
}

pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    book.find_mut(name)?.remove_phone(phone)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Phone removed.")))
}

pub fn update(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    book.find_mut(name)?.edit_phone(old, new)?;
    Ok(CmdResult::default().with_message(CmdMessage::success("Phone updated.")))
}
