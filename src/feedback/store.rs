//! Record store: the owned, persisted feedback collection
//!
//! The whole collection lives in one key-value slot as a JSON array,
//! most recent entry first. Every append rewrites the full array; there is
//! no incremental log and no locking, so only one writer per slot is
//! supported.

use super::filter::filter_by_min_rating;
use super::stats::{compute_stats, FeedbackStats};
use crate::config::FeedbackConfig;
use crate::error::{FeedbackError, Result};
use crate::storage::{FileStore, KeyValueStore};
use crate::types::{FeedbackEntry, FeedbackId, NewFeedback, Rating};
use chrono::Utc;
use tracing::{debug, error, info, warn};

/// Outcome of reading the slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing stored yet
    Empty,
    /// Stored collection read successfully
    Loaded { count: usize },
    /// Slot was unreadable or malformed; the collection starts empty
    Recovered { reason: String },
}

impl LoadStatus {
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadStatus::Recovered { .. })
    }
}

/// Append-only feedback collection bound to one storage slot
pub struct RecordStore<S: KeyValueStore> {
    backend: S,
    key: String,
    entries: Vec<FeedbackEntry>,
    /// Set while the slot holds data that was neither loaded nor backed up
    write_blocked: Option<String>,
    /// Slot of the most recent malformed-data backup
    last_backup: Option<String>,
}

impl RecordStore<FileStore> {
    /// Open the file-backed store described by `config` and load it
    pub fn open(config: &FeedbackConfig) -> Result<Self> {
        config.validate()?;
        let backend = FileStore::open(&config.data_dir)?;
        let mut store = Self::new(backend, config.storage_key.clone());
        store.load();
        Ok(store)
    }
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Create an empty store; call [`load`](Self::load) to read the slot
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            entries: Vec::new(),
            write_blocked: None,
            last_backup: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Slot holding the malformed content found by the latest recovering load
    pub fn last_backup_key(&self) -> Option<&str> {
        self.last_backup.as_deref()
    }

    /// True while appends are kept in memory to protect an unread slot
    pub fn is_write_blocked(&self) -> bool {
        self.write_blocked.is_some()
    }

    /// Replace the in-memory collection with the persisted one
    ///
    /// Never fails: an unreadable or malformed slot yields an empty
    /// collection and a [`LoadStatus::Recovered`]. Malformed text is copied
    /// to a fresh `<key>.corrupt.<timestamp>` slot so the next append cannot
    /// destroy the only copy. When the slot cannot be read, or the copy
    /// fails, appends stay in memory until a later load succeeds.
    pub fn load(&mut self) -> LoadStatus {
        self.entries.clear();
        self.write_blocked = None;

        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored feedback under '{}'", self.key);
                return LoadStatus::Empty;
            }
            Err(e) => {
                warn!("Failed to read feedback slot '{}': {}", self.key, e);
                self.write_blocked =
                    Some(format!("slot '{}' could not be read: {}", self.key, e));
                return LoadStatus::Recovered {
                    reason: e.to_string(),
                };
            }
        };

        match serde_json::from_str::<Vec<FeedbackEntry>>(&raw) {
            Ok(entries) => {
                let count = entries.len();
                self.entries = entries;
                info!("Loaded {} feedback entries from '{}'", count, self.key);
                LoadStatus::Loaded { count }
            }
            Err(e) => {
                warn!("Discarding malformed feedback data in '{}': {}", self.key, e);
                match self.backup_malformed(&raw) {
                    Ok(backup_key) => {
                        info!("Preserved malformed feedback data under '{}'", backup_key);
                        self.last_backup = Some(backup_key);
                    }
                    Err(backup_err) => {
                        warn!(
                            "Could not preserve malformed data from '{}': {}",
                            self.key, backup_err
                        );
                        self.write_blocked = Some(format!(
                            "malformed slot '{}' could not be backed up: {}",
                            self.key, backup_err
                        ));
                    }
                }
                LoadStatus::Recovered {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Validate, record and persist a new entry
    ///
    /// The entry is prepended so the collection stays most-recent-first.
    /// If the durable write fails the entry is kept for this session and
    /// [`FeedbackError::NotPersisted`] is returned.
    pub fn append(&mut self, feedback: NewFeedback) -> Result<FeedbackEntry> {
        let (author_name, rating, comment) = feedback.validate()?;

        let entry = FeedbackEntry {
            id: self.fresh_id(),
            author_name,
            rating,
            comment,
            created_at: Utc::now(),
        };

        self.entries.insert(0, entry.clone());
        debug!("Recorded feedback {} ({} stars)", entry.id, entry.rating);

        if let Some(reason) = &self.write_blocked {
            warn!("Feedback {} kept in memory only: {}", entry.id, reason);
            return Err(FeedbackError::NotPersisted {
                id: entry.id,
                reason: reason.clone(),
            });
        }

        if let Err(e) = self.persist() {
            error!("Feedback {} kept in memory only: {}", entry.id, e);
            return Err(FeedbackError::NotPersisted {
                id: entry.id,
                reason: e.to_string(),
            });
        }

        Ok(entry)
    }

    /// Current collection, most recent first
    pub fn all(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> FeedbackStats {
        compute_stats(&self.entries)
    }

    pub fn filtered(&self, threshold: Option<Rating>) -> Vec<&FeedbackEntry> {
        filter_by_min_rating(&self.entries, threshold)
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string(&self.entries)?;
        self.backend.set(&self.key, &serialized)
    }

    /// Copy `raw` to an unused `<key>.corrupt.<timestamp>` slot
    fn backup_malformed(&self, raw: &str) -> Result<String> {
        let base = format!(
            "{}.corrupt.{}",
            self.key,
            Utc::now().format("%Y%m%dT%H%M%S%.6fZ")
        );
        let mut candidate = base.clone();
        let mut attempt = 1;
        while self.backend.get(&candidate)?.is_some() {
            candidate = format!("{}-{}", base, attempt);
            attempt += 1;
        }
        self.backend.set(&candidate, raw)?;
        Ok(candidate)
    }

    fn fresh_id(&self) -> FeedbackId {
        loop {
            let id = FeedbackId::new();
            if !self.entries.iter().any(|e| e.id == id) {
                return id;
            }
        }
    }
}
