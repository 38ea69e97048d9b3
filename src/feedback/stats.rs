//! Rating statistics over a feedback collection
//!
//! Pure functions: the same entries always give the same figures, and
//! nothing here touches the store.

use crate::types::{FeedbackEntry, Rating};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Count of entries per rating, always covering all five ratings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingDistribution([usize; 5]);

impl RatingDistribution {
    pub fn get(&self, rating: Rating) -> usize {
        self.0[rating.index()]
    }

    /// Sum of all buckets
    pub fn sum(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(rating, count)` pairs in ascending rating order
    pub fn iter(&self) -> impl Iterator<Item = (Rating, usize)> + '_ {
        Rating::ALL.iter().map(move |&r| (r, self.get(r)))
    }

    fn record(&mut self, rating: Rating) {
        self.0[rating.index()] += 1;
    }
}

/// Serialized as `{"1": n, ..., "5": n}`
impl Serialize for RatingDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (rating, count) in self.iter() {
            map.serialize_entry(&rating.to_string(), &count)?;
        }
        map.end()
    }
}

/// Dashboard score band for an average rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    VeryGood,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn for_average(average: f64) -> Self {
        if average >= 4.5 {
            ScoreBand::Excellent
        } else if average >= 4.0 {
            ScoreBand::VeryGood
        } else if average >= 3.0 {
            ScoreBand::Good
        } else if average >= 2.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::VeryGood => "Very good",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsImprovement => "Needs improvement",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Summary figures for a feedback collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackStats {
    pub total: usize,
    /// Mean rating, 0.0 for an empty collection
    pub average: f64,
    pub distribution: RatingDistribution,
}

impl FeedbackStats {
    /// Share of 4 and 5 star entries as a whole percent
    pub fn satisfaction_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let satisfied =
            self.distribution.get(Rating::ALL[3]) + self.distribution.get(Rating::ALL[4]);
        (satisfied as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// Share of one rating, rounded to one decimal place
    pub fn percentage(&self, rating: Rating) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let share = self.distribution.get(rating) as f64 / self.total as f64 * 100.0;
        (share * 10.0).round() / 10.0
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::for_average(self.average)
    }
}

/// Compute total, mean and per-rating counts
pub fn compute_stats(entries: &[FeedbackEntry]) -> FeedbackStats {
    let total = entries.len();
    let mut distribution = RatingDistribution::default();
    let mut sum: u64 = 0;

    for entry in entries {
        distribution.record(entry.rating);
        sum += entry.rating.value() as u64;
    }

    let average = if total > 0 {
        sum as f64 / total as f64
    } else {
        0.0
    };

    FeedbackStats {
        total,
        average,
        distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeedbackId;
    use chrono::Utc;

    fn entry(rating: i64) -> FeedbackEntry {
        FeedbackEntry {
            id: FeedbackId::new(),
            author_name: "Tester".to_string(),
            rating: Rating::new(rating).unwrap(),
            comment: String::new(),
            created_at: Utc::now(),
        }
    }

    fn r(value: i64) -> Rating {
        Rating::new(value).unwrap()
    }

    #[test]
    fn test_empty_collection() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average, 0.0);
        for rating in Rating::ALL {
            assert_eq!(stats.distribution.get(rating), 0);
        }
        assert_eq!(stats.satisfaction_percent(), 0);
        assert_eq!(stats.percentage(r(5)), 0.0);
    }

    #[test]
    fn test_single_five_star() {
        let stats = compute_stats(&[entry(5)]);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.average, 5.0);
        assert_eq!(stats.distribution.get(r(5)), 1);
        assert_eq!(stats.distribution.sum(), 1);
        assert_eq!(stats.score_band(), ScoreBand::Excellent);
    }

    #[test]
    fn test_three_five_five() {
        let stats = compute_stats(&[entry(3), entry(5), entry(5)]);
        assert_eq!(stats.total, 3);
        assert!((stats.average - 13.0 / 3.0).abs() < 1e-9);
        let counts: Vec<usize> = stats.distribution.iter().map(|(_, c)| c).collect();
        assert_eq!(counts, vec![0, 0, 1, 0, 2]);
        assert_eq!(stats.satisfaction_percent(), 67);
        assert_eq!(stats.percentage(r(3)), 33.3);
        assert_eq!(stats.percentage(r(5)), 66.7);
        assert_eq!(stats.score_band(), ScoreBand::VeryGood);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::for_average(4.5), ScoreBand::Excellent);
        assert_eq!(ScoreBand::for_average(4.49), ScoreBand::VeryGood);
        assert_eq!(ScoreBand::for_average(3.0), ScoreBand::Good);
        assert_eq!(ScoreBand::for_average(2.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_average(1.9), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::for_average(0.0), ScoreBand::NeedsImprovement);
    }

    #[test]
    fn test_distribution_serializes_all_keys() {
        let stats = compute_stats(&[entry(2)]);
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["average"], 2.0);
        assert_eq!(
            value["distribution"],
            serde_json::json!({"1": 0, "2": 1, "3": 0, "4": 0, "5": 0})
        );
    }
}
