//! # State Persistence Port
//!
//! A minimal `get`/`set` port over namespaced string keys, so the selection
//! flow never touches a concrete storage medium directly. The production
//! implementation is file-backed (one file per key under a state
//! directory); the in-memory implementation backs tests and embedding.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

/// The namespaced key the selection state is stored under.
pub const STATE_KEY: &str = "contact-selection-state-v1";

/// Errors from a state store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure.
    #[error("state store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Keyed string storage for serialized application state.
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// FileStateStore
// ---------------------------------------------------------------------------

/// File-backed store: one `{key}.json` file per key under a state directory.
///
/// The directory is created on first write. Reads of never-written keys
/// return `None` rather than an error.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store writes under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStateStore
// ---------------------------------------------------------------------------

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    data: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a key, e.g. to simulate previously persisted state.
    pub fn preload(&self, key: &str, value: &str) {
        self.data.lock().insert(key.to_string(), value.to_string());
    }
}

impl Clone for MemoryStateStore {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.data.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
