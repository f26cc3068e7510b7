//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for a UI. It owns the [`AddressBook`] for the session together
//! with the [`BookStore`] it came from.
//!
//! The API:
//! - **Dispatches** to the matching `commands::*` function
//! - **Brackets the session**: [`ContactsApi::open`] hydrates, [`ContactsApi::close`] flushes
//! - **Returns structured types** (`Result<CmdResult>`), never strings to print
//!
//! `ContactsApi<S: BookStore>` is generic over storage:
//! - Production: `ContactsApi<FileStore>`
//! - Testing: `ContactsApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::store::BookStore;

pub struct ContactsApi<S: BookStore> {
    store: S,
    book: AddressBook,
}

impl<S: BookStore> ContactsApi<S> {
    /// Wraps `store` with an empty book. Call [`ContactsApi::open`] to hydrate it.
    pub fn new(store: S) -> Self {
        Self {
            store,
            book: AddressBook::new(),
        }
    }

    pub fn open(&mut self) -> Result<()> {
        self.store.load(&mut self.book)
    }

    pub fn close(&mut self) -> Result<()> {
        self.store.save(&self.book)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_contact<P: AsRef<str>>(
        &mut self,
        name: &str,
        phones: &[P],
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, phones)
    }

    pub fn remove_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.book, name)
    }

    pub fn show_contacts(&self) -> Result<commands::CmdResult> {
        commands::show::run(&self.book)
    }

    pub fn phones(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::phones::add(&mut self.book, name, phone)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::phones::remove(&mut self.book, name, phone)
    }

    pub fn update_phone(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> Result<commands::CmdResult> {
        commands::phones::update(&mut self.book, name, old, new)
    }

    pub fn find_by_phone(&self, phone: &str) -> Result<commands::CmdResult> {
        commands::search::by_phone(&self.book, phone)
    }

    pub fn find_by_name(&self, fragment: &str) -> Result<commands::CmdResult> {
        commands::search::by_name(&self.book, fragment)
    }

    pub fn help(&self) -> Result<commands::CmdResult> {
        commands::help::run()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
