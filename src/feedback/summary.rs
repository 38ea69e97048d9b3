//! Dashboard view of the statistics
//!
//! Collects the figures a dashboard shows next to its charts: headline
//! cards plus one row per rating with its label and share.

use super::stats::{FeedbackStats, ScoreBand};
use crate::types::{Rating, RatingTone};
use serde::Serialize;

/// One histogram bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingRow {
    pub rating: Rating,
    pub label: &'static str,
    pub count: usize,
    /// Share of the total, one decimal place
    pub percentage: f64,
    pub tone: RatingTone,
}

/// Headline figures and per-rating rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total: usize,
    /// Average rounded to one decimal place
    pub average: f64,
    pub score_band: ScoreBand,
    pub score_label: &'static str,
    pub average_tone: RatingTone,
    /// Share of 4 and 5 star entries, whole percent
    pub satisfaction_percent: u32,
    /// Ascending by rating
    pub rows: Vec<RatingRow>,
}

impl DashboardSummary {
    pub fn from_stats(stats: &FeedbackStats) -> Self {
        let score_band = stats.score_band();
        let rows = stats
            .distribution
            .iter()
            .map(|(rating, count)| RatingRow {
                rating,
                label: rating.label(),
                count,
                percentage: stats.percentage(rating),
                tone: rating.tone(),
            })
            .collect();

        Self {
            total: stats.total,
            average: (stats.average * 10.0).round() / 10.0,
            score_band,
            score_label: score_band.label(),
            average_tone: RatingTone::for_average(stats.average),
            satisfaction_percent: stats.satisfaction_percent(),
            rows,
        }
    }

    /// True when there is nothing to chart
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
