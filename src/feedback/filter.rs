//! Minimum-rating filter

use crate::error::Result;
use crate::types::{FeedbackEntry, Rating};

/// Entries rated at or above `threshold`, in their original order
///
/// `None` means no filter is active and every entry is returned.
pub fn filter_by_min_rating(
    entries: &[FeedbackEntry],
    threshold: Option<Rating>,
) -> Vec<&FeedbackEntry> {
    RatingFilter::new(threshold).apply(entries)
}

/// Active threshold held by whatever drives the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingFilter {
    pub min_rating: Option<Rating>,
}

impl RatingFilter {
    pub fn new(min_rating: Option<Rating>) -> Self {
        Self { min_rating }
    }

    /// Build a filter from an unchecked threshold
    pub fn from_raw(min_rating: Option<i64>) -> Result<Self> {
        let min_rating = min_rating.map(Rating::new).transpose()?;
        Ok(Self { min_rating })
    }

    pub fn is_active(&self) -> bool {
        self.min_rating.is_some()
    }

    pub fn matches(&self, entry: &FeedbackEntry) -> bool {
        match self.min_rating {
            Some(min) => entry.rating >= min,
            None => true,
        }
    }

    pub fn apply<'a>(&self, entries: &'a [FeedbackEntry]) -> Vec<&'a FeedbackEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }

    /// Badge text for an active filter, e.g. "Rating 4+"
    pub fn caption(&self) -> Option<String> {
        self.min_rating.map(|min| format!("Rating {}+", min))
    }

    /// Text shown when [`apply`](Self::apply) leaves nothing to list
    pub fn empty_message(&self) -> String {
        match self.min_rating {
            Some(min) => format!("No feedback rated {}+ was found.", min),
            None => "Be the first to leave feedback!".to_string(),
        }
    }
}
