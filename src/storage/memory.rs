//! In-memory key-value backend

use super::KeyValueStore;
use crate::error::{FeedbackError, Result};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Process-local key-value store
///
/// Clones share the same map, so a test can keep a handle and inspect
/// what the record store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot already filled
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut slots) = store.slots.write() {
            slots.insert(key.into(), value.into());
        }
        store
    }

    pub fn len(&self) -> usize {
        self.slots.read().map(|slots| slots.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|e| FeedbackError::Storage(format!("memory store lock poisoned: {}", e)))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|e| FeedbackError::Storage(format!("memory store lock poisoned: {}", e)))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
