use colored::Colorize;
use contactbook::api::{CmdMessage, CmdResult, MessageLevel};
use contactbook::error::{ContactsError, ErrorKind};
use contactbook::model::Record;

/// How each failure kind is shown. Storage and config failures go to stderr;
/// everything else is a recoverable input problem shown inline.
const ERROR_LEVELS: &[(ErrorKind, MessageLevel)] = &[
    (ErrorKind::InvalidFormat, MessageLevel::Warning),
    (ErrorKind::InvalidName, MessageLevel::Warning),
    (ErrorKind::DuplicatePhone, MessageLevel::Warning),
    (ErrorKind::PhoneNotFound, MessageLevel::Warning),
    (ErrorKind::DuplicateContact, MessageLevel::Warning),
    (ErrorKind::ContactNotFound, MessageLevel::Warning),
    (ErrorKind::Argument, MessageLevel::Warning),
    (ErrorKind::Io, MessageLevel::Error),
    (ErrorKind::Config, MessageLevel::Error),
];

pub fn error_level(kind: ErrorKind) -> MessageLevel {
    ERROR_LEVELS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, level)| *level)
        .unwrap_or(MessageLevel::Error)
}

pub fn print_result(result: &CmdResult) {
    print_records(&result.listed_records);
    print_messages(&result.messages);
}

pub fn print_error(err: &ContactsError) {
    match error_level(err.kind()) {
        MessageLevel::Error => eprintln!("{} {}", "Error:".red().bold(), err),
        _ => print_messages(&[CmdMessage::warning(err.to_string())]),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_records(records: &[Record]) {
    for record in records {
        println!("{}", record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_failures_are_loud() {
        assert_eq!(error_level(ErrorKind::Io), MessageLevel::Error);
        assert_eq!(error_level(ErrorKind::Config), MessageLevel::Error);
    }

    #[test]
    fn input_failures_are_warnings() {
        for kind in [
            ErrorKind::InvalidFormat,
            ErrorKind::InvalidName,
            ErrorKind::DuplicatePhone,
            ErrorKind::PhoneNotFound,
            ErrorKind::DuplicateContact,
            ErrorKind::ContactNotFound,
            ErrorKind::Argument,
        ] {
            assert_eq!(error_level(kind), MessageLevel::Warning);
        }
    }
}
