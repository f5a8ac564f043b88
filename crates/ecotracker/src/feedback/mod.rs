//! User feedback intake and rating summaries.

pub mod domain;
pub mod router;
pub mod service;
mod summary;


pub use domain::{
    FeedbackCategory, FeedbackEntry, FeedbackError, FeedbackId, FeedbackSubmission, MAX_RATING,
    MIN_RATING,
};
pub use router::feedback_router;
pub use service::{FeedbackRepository, FeedbackService, FeedbackServiceError};
pub use summary::{FeedbackSummary, RatingBucket, RECENT_FEEDBACK_LIMIT};
