use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Lists every contact as its display line, in book order.
pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result
        .messages
        .extend(book.lines().into_iter().map(CmdMessage::info));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::commands::MessageLevel;

    #[test]
    fn lists_every_contact_in_order() {
        let mut book = AddressBook::new();
        add::run(&mut book, "Zed", &["0123456789"]).unwrap();
        add::run(&mut book, "Amy", &["1111111111", "2222222222"]).unwrap();

        let result = run(&book).unwrap();
        let lines: Vec<&str> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            lines,
            vec![
                "Contact name: Zed, phones: 0123456789",
                "Contact name: Amy, phones: 1111111111; 2222222222",
            ]
        );
        assert!(result.messages.iter().all(|m| m.level == MessageLevel::Info));
        assert!(result.listed_records.is_empty());
    }

    #[test]
    fn empty_book_lists_nothing() {
        let result = run(&AddressBook::new()).unwrap();
        assert!(result.listed_records.is_empty());
        assert!(result.messages.is_empty());
    }
}
