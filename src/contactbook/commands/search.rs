use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;

pub fn by_phone(book: &AddressBook, phone: &str) -> Result<CmdResult> {
    let found = book.find_by_phone(phone).into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_records(found))
}

pub fn by_name(book: &AddressBook, fragment: &str) -> Result<CmdResult> {
    let found: Vec<Record> = book
        .find_by_name_part(fragment)
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_records(found))
}
