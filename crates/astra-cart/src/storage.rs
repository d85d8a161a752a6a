//! # Cart Storage
//!
//! The durable side of the write-through: an opaque key-value string store.
//!
//! The cart never interprets what the medium does with the text; it reads
//! one fixed key at startup and overwrites the same key on every committed
//! change. Anything that can hold a string under a key qualifies, which is
//! what keeps the state container testable against [`MemoryStorage`] while
//! the CLI persists through [`FileStorage`].

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// The fixed, namespaced key the cart snapshot lives under.
pub const CART_STORAGE_KEY: &str = "@astra-shop:cart";

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying medium failed to read or write.
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// An opaque key-value string store.
///
/// ## Contract
/// - `get` returns the last value `put` under the key, or `None` if the key
///   was never written
/// - `put` overwrites any prior value
/// - Implementations must be safe to share across threads; the state
///   container calls them while holding its own lock
pub trait CartStorage: Send + Sync {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any prior value.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Pre-seeds a key, for constructing startup scenarios in tests.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = MemoryStorage::new();
        storage
            .entries
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl CartStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().expect("storage mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// File Storage
// =============================================================================

/// File-backed storage: each key maps to one file under a directory.
///
/// Key characters outside `[A-Za-z0-9_-]` are flattened to `-` to produce a
/// portable file name, so `@astra-shop:cart` lands in `-astra-shop-cart.txt`.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStorage { dir })
    }

    /// Returns the directory this storage writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.dir.join(format!("{}.txt", name))
    }
}

impl CartStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.get(CART_STORAGE_KEY).unwrap().is_none());

        storage.put(CART_STORAGE_KEY, "first").unwrap();
        storage.put(CART_STORAGE_KEY, "second").unwrap();
        assert_eq!(
            storage.get(CART_STORAGE_KEY).unwrap().as_deref(),
            Some("second")
        );
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = std::env::temp_dir().join(format!("astra-storage-test-{}", std::process::id()));
        let storage = FileStorage::new(&dir).unwrap();

        assert!(storage.get(CART_STORAGE_KEY).unwrap().is_none());
        storage.put(CART_STORAGE_KEY, "payload").unwrap();
        assert_eq!(
            storage.get(CART_STORAGE_KEY).unwrap().as_deref(),
            Some("payload")
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_key_flattening() {
        let storage = FileStorage {
            dir: PathBuf::from("/data"),
        };
        assert_eq!(
            storage.path_for(CART_STORAGE_KEY),
            PathBuf::from("/data/-astra-shop-cart.txt")
        );
    }
}
