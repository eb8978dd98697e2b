//! Persistent Key-Value Storage
//!
//! String-keyed, string-valued storage that survives process restarts.
//! A missing key is `Ok(None)`, never an error. Read failures are reported
//! as errors so callers can decide how to degrade.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tempfile::NamedTempFile;

/// Permission bits of files written by [`FileStorage`]
#[cfg(unix)]
const SESSION_FILE_MODE: u32 = 0o600;

/// Storage error
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Backing file could not be read or written
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// Backing file exists but does not hold a JSON object of strings
    #[error("Storage file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// Backend refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Key-value storage port
pub trait KeyValueStorage: Send + Sync {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a key. Deleting an absent key succeeds.
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<T> KeyValueStorage for Arc<T>
where
    T: KeyValueStorage + ?Sized,
{
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Process-local storage, lost on exit
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(lock(&self.entries).get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        lock(&self.entries).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        lock(&self.entries).remove(key);
        Ok(())
    }
}

// ============================================================================
// File backend
// ============================================================================

/// Storage backed by a single JSON object file.
///
/// Every write rewrites the whole file through a randomly named temp file
/// in the same directory and a rename, so a crash leaves either the old or
/// the new content. On Unix the file is readable by its owner only. A
/// corrupt file fails reads; the next write replaces it.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileStorage {
    /// Open storage at `path`. The file and its parent directory are
    /// created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> StorageResult<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let payload = serde_json::to_vec_pretty(entries)
            .map_err(|e| StorageError::Unavailable(format!("Failed to encode entries: {e}")))?;

        // Random name, created with O_EXCL
        let mut tmp = NamedTempFile::new_in(dir)?;

        // The file holds an access token: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(SESSION_FILE_MODE))?;
        }

        tmp.write_all(&payload)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StorageError::Io(e.error))?;

        Ok(())
    }

    /// Read the current map for a write. A corrupt file reads as empty and
    /// is flagged so the caller rewrites it.
    fn entries_for_write(&self) -> StorageResult<(BTreeMap<String, String>, bool)> {
        match self.read_entries() {
            Ok(entries) => Ok((entries, false)),
            Err(StorageError::Corrupt { path, reason }) => {
                tracing::warn!(path = %path.display(), %reason, "Overwriting corrupt storage file");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = lock(&self.write_lock);
        let (mut entries, _) = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = lock(&self.write_lock);
        let (mut entries, was_corrupt) = self.entries_for_write()?;
        if entries.remove(key).is_none() && !was_corrupt {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
