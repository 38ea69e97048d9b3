//! Feedback Radar - star-rating collection and dashboard statistics
//!
//! The data side of a single-user feedback dashboard:
//! - Append-only collection of rated feedback, persisted as one JSON array
//! - Summary statistics (total, average, 1..=5 distribution)
//! - Inclusive minimum-rating filter
//! - Dashboard figures (satisfaction share, score band, per-rating rows)
//!
//! # Architecture
//!
//! - **Types**: Core data structures (FeedbackEntry, Rating, NewFeedback)
//! - **Storage**: Key-value capability with in-memory and file backends
//! - **Feedback**: Record store, aggregator, filter and dashboard summary
//! - **Config / Logging**: TOML + environment configuration, tracing setup
//!
//! # Example
//!
//! ```no_run
//! use feedback_radar::{DashboardSummary, FeedbackConfig, NewFeedback, RecordStore};
//!
//! fn main() -> feedback_radar::Result<()> {
//!     let config = FeedbackConfig::load(None)?;
//!     feedback_radar::logging::init_logging(&config.log_level);
//!
//!     let mut store = RecordStore::open(&config)?;
//!     store.append(NewFeedback::new("Ana", 5, "Great"))?;
//!
//!     let summary = DashboardSummary::from_stats(&store.stats());
//!     println!("{} entries, {}% satisfied", summary.total, summary.satisfaction_percent);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use config::FeedbackConfig;
pub use error::{FeedbackError, Result};
pub use feedback::{
    compute_stats, filter_by_min_rating, DashboardSummary, FeedbackStats, LoadStatus,
    RatingFilter, RecordStore,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use types::{FeedbackEntry, FeedbackId, NewFeedback, Rating, RatingTone};
