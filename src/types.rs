//! Core data types for the feedback core
//!
//! Defines feedback entries, the bounded star rating and the identifiers
//! generated by the record store. The serialized field names (`name`, `date`)
//! match the persisted array layout, so existing saved collections load as-is.

use crate::error::{FeedbackError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for feedback entries
///
/// Wraps a UUID to keep entry IDs from being mixed up with other strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(pub Uuid);

impl FeedbackId {
    /// Create a new random feedback ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a feedback ID from a string
    pub fn from_string(s: &str) -> std::result::Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for FeedbackId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating from 1 (worst) to 5 (best)
///
/// Out-of-range values cannot be constructed or deserialized, so every
/// stored entry lands in exactly one histogram bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// All ratings in ascending order
    pub const ALL: [Rating; 5] = [Rating(1), Rating(2), Rating(3), Rating(4), Rating(5)];

    /// Validate a raw rating value
    pub fn new(value: i64) -> Result<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(FeedbackError::InvalidRating(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based bucket index (rating 1 → 0)
    pub(crate) fn index(self) -> usize {
        (self.0 - Self::MIN) as usize
    }

    /// Human-readable satisfaction label
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very dissatisfied",
            2 => "Dissatisfied",
            3 => "Neutral",
            4 => "Satisfied",
            _ => "Very satisfied",
        }
    }

    pub fn tone(self) -> RatingTone {
        RatingTone::for_average(self.0 as f64)
    }
}

impl TryFrom<i64> for Rating {
    type Error = FeedbackError;

    fn try_from(value: i64) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coarse sentiment used to color ratings and averages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTone {
    /// 4 stars and up
    Positive,
    /// 3 stars up to (not including) 4
    Neutral,
    /// Below 3 stars
    Negative,
}

impl RatingTone {
    /// Classify a score on the 1..=5 scale
    pub fn for_average(score: f64) -> Self {
        if score >= 4.0 {
            RatingTone::Positive
        } else if score >= 3.0 {
            RatingTone::Neutral
        } else {
            RatingTone::Negative
        }
    }
}

impl std::fmt::Display for RatingTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingTone::Positive => write!(f, "positive"),
            RatingTone::Neutral => write!(f, "neutral"),
            RatingTone::Negative => write!(f, "negative"),
        }
    }
}

/// One submitted rating and comment
///
/// Immutable once created: the store never edits or deletes entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: FeedbackId,

    /// Display name of the person giving feedback
    #[serde(rename = "name")]
    pub author_name: String,

    pub rating: Rating,

    /// Free-text comment, may be empty
    #[serde(default)]
    pub comment: String,

    /// Creation time, serialized as an ISO-8601 string
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

impl FeedbackEntry {
    /// Creation time as shown on a feedback card, e.g. "02 June at 10:00"
    pub fn display_date(&self) -> String {
        self.created_at.format("%d %B at %H:%M").to_string()
    }
}

/// Submission payload before the store assigns an ID and timestamp
///
/// The rating stays raw so out-of-range input reaches the validation
/// boundary instead of failing in the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    #[serde(rename = "name")]
    pub author_name: String,
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
}

impl NewFeedback {
    pub fn new(author_name: impl Into<String>, rating: i64, comment: impl Into<String>) -> Self {
        Self {
            author_name: author_name.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Trim the text fields and check the name and rating
    ///
    /// Returns the cleaned name, rating and comment ready for storage.
    pub fn validate(&self) -> Result<(String, Rating, String)> {
        let name = self.author_name.trim();
        if name.is_empty() {
            return Err(FeedbackError::EmptyAuthorName);
        }
        let rating = Rating::new(self.rating)?;
        Ok((name.to_string(), rating, self.comment.trim().to_string()))
    }
}
