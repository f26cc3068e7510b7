//! # Storage Layer
//!
//! The [`BookStore`] trait is the seam between a session and wherever its
//! address book lives between runs.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production flat-file storage
//!   - One record per line, see [`format`]
//!   - Creates an empty file (and its directory) the first time it is opened
//!   - Writes go to a temporary sibling file that is renamed over the target
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Keeps the serialized text in a `String`, so tests still go through the codec
//!
//! ## Lifecycle
//!
//! A session loads exactly once at startup and saves exactly once on
//! `close`/`exit`. Stores do not track changes in between.

use crate::book::AddressBook;
use crate::error::Result;

pub mod format;
pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait BookStore {
    /// Add every stored record to `book`
    fn load(&self, book: &mut AddressBook) -> Result<()>;

    /// Replace the stored records with the contents of `book`
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
