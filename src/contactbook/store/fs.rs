use super::BookStore;
use crate::book::AddressBook;
use crate::error::{ContactsError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the data file, and its directory, when it does not exist yet.
    fn ensure_file(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ContactsError::Io)?;
            }
        }
        fs::write(&self.path, "").map_err(ContactsError::Io)?;
        tracing::info!(path = %self.path.display(), "created empty contacts file");
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self, book: &mut AddressBook) -> Result<()> {
        self.ensure_file()?;
        book.load_from(&self.path)?;
        tracing::info!(path = %self.path.display(), records = book.len(), "loaded contacts");
        Ok(())
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        book.save_to(&self.path)?;
        tracing::info!(path = %self.path.display(), records = book.len(), "saved contacts");
        Ok(())
    }
}

/// Writes `content` to a temporary sibling of `path`, then renames it into place.
///
/// Readers see either the old file or the new one, never a partial write.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let tmp_file = dir.join(format!(".contacts-{}.tmp", Uuid::new_v4()));

    if let Err(e) = fs::write(&tmp_file, content) {
        let _ = fs::remove_file(&tmp_file);
        return Err(ContactsError::Io(e));
    }
    if let Err(e) = fs::rename(&tmp_file, path) {
        let _ = fs::remove_file(&tmp_file);
        return Err(ContactsError::Io(e));
    }
    Ok(())
}
