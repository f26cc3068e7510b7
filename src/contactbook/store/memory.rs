use super::format::{FIELD_SEPARATOR, PHONE_SEPARATOR};
use super::BookStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Holds the serialized file contents; does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    text: String,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl BookStore for InMemoryStore {
    fn load(&self, book: &mut AddressBook) -> Result<()> {
        book.load_str(&self.text)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.text = book.to_text();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            self.store.text.push_str(name);
            self.store.text.push(FIELD_SEPARATOR);
            self.store.text.push_str(&phones.join(PHONE_SEPARATOR));
            self.store.text.push('\n');
            self
        }
    }
}
