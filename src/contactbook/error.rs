use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("phone must be in XXXXXXXXXX format")]
    InvalidFormat,

    #[error("Contact name {0:?} is invalid: it must be non-empty, without ';' or line breaks")]
    InvalidName(String),

    #[error("Phone no {0} already exist.")]
    DuplicatePhone(String),

    #[error("Phone number {0} is not found.")]
    PhoneNotFound(String),

    #[error("Contact name {0} already exist.")]
    DuplicateContact(String),

    #[error("Contact name {0} is not found.")]
    ContactNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Raised by the session layer when a command gets the wrong number of arguments.
    #[error("invalid params. The correct is: {0}")]
    Argument(String),
}

/// The failure taxonomy, stripped of payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    InvalidName,
    DuplicatePhone,
    PhoneNotFound,
    DuplicateContact,
    ContactNotFound,
    Io,
    Config,
    Argument,
}

impl ContactsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContactsError::InvalidFormat => ErrorKind::InvalidFormat,
            ContactsError::InvalidName(_) => ErrorKind::InvalidName,
            ContactsError::DuplicatePhone(_) => ErrorKind::DuplicatePhone,
            ContactsError::PhoneNotFound(_) => ErrorKind::PhoneNotFound,
            ContactsError::DuplicateContact(_) => ErrorKind::DuplicateContact,
            ContactsError::ContactNotFound(_) => ErrorKind::ContactNotFound,
            ContactsError::Io(_) => ErrorKind::Io,
            ContactsError::Config(_) => ErrorKind::Config,
            ContactsError::Argument(_) => ErrorKind::Argument,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactsError>;
