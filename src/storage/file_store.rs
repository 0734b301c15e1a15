//! File-backed key-value store
//!
//! Each key maps to one JSON file under the store root. Writes go to a
//! temp file first and are renamed into place, so a crash mid-write
//! never leaves a half-written blob behind.

use crate::error::Result;
use crate::storage::StateStore;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Key-value store persisting each blob as a file on disk.
#[derive(Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Initialize the store (create the root directory if needed).
    pub fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        tracing::info!("File store initialized at: {:?}", self.root);
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)?;

        tracing::debug!("Read key: {} ({} bytes)", key, raw.len());

        Ok(Some(raw))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to temp file first (atomic write)
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;

        // Rename to final location
        fs::rename(temp_path, &path)?;

        tracing::debug!("Wrote key: {} ({} bytes)", key, value.len());

        Ok(())
    }
}
