//! Durable key-value storage for preferences.
//!
//! Storage is string-keyed and string-valued with overwrite semantics. Two
//! backends ship with the crate:
//!
//! - [`MemoryStorage`]: a shared in-process map, useful for tests and for
//!   hosts that persist elsewhere. Clones see the same entries, so a second
//!   store built from a clone behaves like a page reload.
//! - [`FileStorage`]: a JSON object in a single file.
//!
//! Writes may fail (disabled storage, full disk). Callers treat failures as
//! non-fatal: the preference still applies for the running session.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// The keys preferences persist under.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const PRIMARY_COLOR: &str = "primaryColor";
    pub const SECONDARY_COLOR: &str = "secondaryColor";

    pub const ALL: [&str; 3] = [THEME, PRIMARY_COLOR, SECONDARY_COLOR];
}

/// Error returned when a storage write cannot be completed.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is disabled or over quota.
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode storage contents: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A string key-value namespace that survives across store instances.
pub trait Storage {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage shared between clones.
///
/// # Example
///
/// ```rust
/// use accentuate::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new();
/// let view = storage.clone();
/// storage.set("theme", "dark").unwrap();
/// assert_eq!(view.get("theme").as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write succeed or fail with [`StorageError::Unavailable`].
    ///
    /// Reads keep returning whatever was stored before.
    pub fn set_available(&self, available: bool) {
        self.unavailable.set(!available);
    }

    /// Returns a copy of all entries.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.borrow().clone()
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable.get() {
            Err(StorageError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check_available()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Storage backed by a JSON object in a single file.
///
/// The file is read once when opened and rewritten in full on every
/// change. A missing file is empty storage; an unreadable or malformed one
/// is treated the same way and logged.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = read_entries(&path);
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content).map_err(io_err)
    }
}

fn read_entries(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(err) => {
            log::warn!("cannot read {}: {err}; starting empty", path.display());
            return BTreeMap::new();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|err| {
        log::warn!("ignoring malformed {}: {err}", path.display());
        BTreeMap::new()
    })
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.entries.get(key).map(String::as_str) == Some(value) && self.path.exists() {
            return Ok(());
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
