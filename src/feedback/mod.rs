//! Feedback collection, statistics and filtering.
//!
//! # Architecture
//!
//! - **RecordStore**: owns the collection and rewrites its storage slot on every append
//! - **compute_stats**: total, mean and per-rating histogram
//! - **filter_by_min_rating**: inclusive threshold filter that keeps store order
//! - **DashboardSummary**: headline figures and per-rating rows for display
//!
//! # Usage
//!
//! ```rust
//! use feedback_radar::feedback::{compute_stats, RecordStore};
//! use feedback_radar::storage::MemoryStore;
//! use feedback_radar::{NewFeedback, Rating};
//!
//! let mut store = RecordStore::new(MemoryStore::new(), "feedback-radar-data");
//! store.load();
//!
//! store.append(NewFeedback::new("Ana", 5, "Great")).unwrap();
//! store.append(NewFeedback::new("Bruno", 3, "")).unwrap();
//!
//! let stats = compute_stats(store.all());
//! assert_eq!(stats.total, 2);
//! assert_eq!(stats.average, 4.0);
//!
//! let four_plus = store.filtered(Some(Rating::new(4).unwrap()));
//! assert_eq!(four_plus.len(), 1);
//! ```

pub mod filter;
pub mod stats;
pub mod store;
pub mod summary;

pub use filter::{filter_by_min_rating, RatingFilter};
pub use stats::{compute_stats, FeedbackStats, RatingDistribution, ScoreBand};
pub use store::{LoadStatus, RecordStore};
pub use summary::{DashboardSummary, RatingRow};
