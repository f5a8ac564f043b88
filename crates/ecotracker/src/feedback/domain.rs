use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::footprint::UserId;

/// Identifier wrapper for feedback entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    Usability,
    Accuracy,
    Design,
    Features,
    Performance,
    General,
}

impl FeedbackCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Usability => "Usability",
            Self::Accuracy => "Accuracy",
            Self::Design => "Design",
            Self::Features => "Features",
            Self::Performance => "Performance",
            Self::General => "General",
        }
    }
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Feedback form as submitted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub rating: u8,
    pub category: FeedbackCategory,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl FeedbackSubmission {
    pub fn validate(&self) -> Result<(), FeedbackError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(FeedbackError::InvalidRating(self.rating));
        }
        if self.message.trim().is_empty() {
            return Err(FeedbackError::EmptyMessage);
        }
        Ok(())
    }
}

/// Stored feedback entry attributed to its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub id: FeedbackId,
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub rating: u8,
    pub category: FeedbackCategory,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub date: DateTime<Utc>,
}

/// Validation errors raised for feedback submissions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
    #[error("feedback message must not be empty")]
    EmptyMessage,
    #[error("feedback requires an author")]
    MissingOwner,
}
