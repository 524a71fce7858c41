//! src/store.rs
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Handle to the persisted waitlist: an ordered JSON array of unique email
/// strings, read and rewritten in full on every mutation.
///
/// The process owning this handle is the only writer. Writes go through a
/// temporary file in the store's directory followed by a rename, so
/// concurrent readers never observe a truncated list. `insert` serializes
/// its read-modify-write behind an in-process lock.
pub struct WaitlistStore {
    path: PathBuf,
    txn_lock: Mutex<()>,
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Failed to access the waitlist file.")]
    Io(#[from] std::io::Error),
    #[error("The waitlist file holds malformed data.")]
    Malformed(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum InsertError {
    #[error("The email is already on the waitlist.")]
    Duplicate,
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl WaitlistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            txn_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file holding an empty list if it does not exist yet.
    pub fn initialize(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            self.persist(&[])?;
        }
        Ok(())
    }

    /// Full read of the persisted list. A missing file reads as an empty
    /// list; a file that exists but does not parse is an error, since
    /// rewriting on top of it would destroy whatever it held.
    pub fn load(&self) -> Result<Vec<String>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// One submission transaction: load the full list, reject exact-string
    /// duplicates, append, rewrite the full list. Returns the new length.
    #[tracing::instrument(name = "Inserting email into the waitlist store", skip(self))]
    pub fn insert(&self, email: &str) -> Result<usize, InsertError> {
        let _guard = self.txn_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut emails = self.load()?;
        if emails.iter().any(|existing| existing == email) {
            return Err(InsertError::Duplicate);
        }
        emails.push(email.to_owned());
        self.persist(&emails)?;
        Ok(emails.len())
    }

    fn persist(&self, emails: &[String]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, emails)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}
