//! Storage layer for the feedback core
//!
//! The record store only needs a string-keyed slot it can read and overwrite.
//! This module defines that capability and ships two backends: an in-memory
//! map for tests and embedding, and a directory of files for hosts without
//! browser storage.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use std::sync::Arc;

/// Key-value persistence supplied by the hosting environment
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if the slot is empty
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
