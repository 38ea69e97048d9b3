//! File-backed key-value backend
//!
//! Each key maps to one file under a root directory. Writes go to a
//! temporary sibling first and are renamed into place, so readers see
//! either the previous value or the new one.

use super::KeyValueStore;
use crate::error::{FeedbackError, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory of files, one per key
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!("Opened file store at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(key))
    }
}

/// Keys become file names, so they must stay inside the root directory.
/// Dot-prefixed names are reserved for temporary files.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || key.starts_with('.') || key.contains(['/', '\\', '\0']) {
        return Err(FeedbackError::InvalidKey(key.to_string()));
    }
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = self.root.join(format!(".{}.tmp", key));

        let mut file = fs::File::create(&tmp)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp, &path)?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
