use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::domain::{FeedbackEntry, FeedbackError, FeedbackId, FeedbackSubmission};
use super::summary::FeedbackSummary;
use crate::footprint::{RepositoryError, UserId};

/// Append-only storage for feedback entries, returned in submission order.
pub trait FeedbackRepository: Send + Sync {
    fn insert(&self, entry: FeedbackEntry) -> Result<FeedbackEntry, RepositoryError>;
    fn list(&self) -> Result<Vec<FeedbackEntry>, RepositoryError>;
}

pub struct FeedbackService<R> {
    repository: Arc<R>,
}

impl<R> FeedbackService<R>
where
    R: FeedbackRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn submit(
        &self,
        owner: &str,
        user_name: Option<&str>,
        submission: FeedbackSubmission,
    ) -> Result<FeedbackEntry, FeedbackServiceError> {
        let user_id = UserId::parse(owner).map_err(|_| FeedbackError::MissingOwner)?;
        submission.validate()?;

        let FeedbackSubmission {
            rating,
            category,
            message,
            suggestion,
        } = submission;

        let entry = FeedbackEntry {
            id: FeedbackId(Uuid::new_v4().to_string()),
            user_id,
            user_name: user_name
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            rating,
            category,
            message: message.trim().to_string(),
            suggestion: suggestion
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty()),
            date: Utc::now(),
        };

        let stored = self.repository.insert(entry)?;
        info!(feedback_id = %stored.id.0, rating = stored.rating, "feedback stored");
        Ok(stored)
    }

    pub fn summary(&self) -> Result<FeedbackSummary, FeedbackServiceError> {
        let entries = self.repository.list()?;
        Ok(FeedbackSummary::from_entries(&entries))
    }
}

/// Error raised by the feedback service.
#[derive(Debug, thiserror::Error)]
pub enum FeedbackServiceError {
    #[error(transparent)]
    Invalid(#[from] FeedbackError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
