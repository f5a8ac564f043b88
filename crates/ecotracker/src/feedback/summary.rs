use serde::Serialize;

use super::domain::{FeedbackEntry, MAX_RATING, MIN_RATING};

/// Number of entries surfaced as recent feedback.
pub const RECENT_FEEDBACK_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingBucket {
    pub rating: u8,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub total: usize,
    pub average_rating: f64,
    /// Highest rating first.
    pub distribution: Vec<RatingBucket>,
    pub recent: Vec<FeedbackEntry>,
}

impl FeedbackSummary {
    /// Summarise entries given in submission order.
    pub fn from_entries(entries: &[FeedbackEntry]) -> Self {
        let total = entries.len();
        let rating_sum: u64 = entries.iter().map(|entry| u64::from(entry.rating)).sum();
        let average_rating = if total > 0 {
            rating_sum as f64 / total as f64
        } else {
            0.0
        };

        let distribution = (MIN_RATING..=MAX_RATING)
            .rev()
            .map(|rating| RatingBucket {
                rating,
                count: entries
                    .iter()
                    .filter(|entry| entry.rating == rating)
                    .count(),
            })
            .collect();

        let recent = entries
            .iter()
            .rev()
            .take(RECENT_FEEDBACK_LIMIT)
            .cloned()
            .collect();

        Self {
            total,
            average_rating,
            distribution,
            recent,
        }
    }

    pub fn share_of(&self, rating: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.distribution
            .iter()
            .find(|bucket| bucket.rating == rating)
            .map(|bucket| bucket.count as f64 / self.total as f64)
            .unwrap_or(0.0)
    }
}
