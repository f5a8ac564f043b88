//! Footprint computation core: category model, calculator, recommendation rules and the
//! record builder, plus the service facade and HTTP router layered on top of them.

pub mod calculator;
pub mod category;
mod error;
mod input;
mod level;
pub mod recommendations;
pub mod record;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use calculator::{compute, FootprintScore};
pub use category::{CategoryKey, FieldKey, FieldSpec};
pub use error::FootprintError;
pub use input::FootprintInput;
pub use level::FootprintLevel;
pub use recommendations::{
    recommend, RecommendationEngine, RecommendationThresholds, DEFAULT_RECOMMENDATION,
};
pub use record::{build, build_at, FootprintRecord, RecordId, UserId};
pub use repository::{FootprintRepository, RepositoryError};
pub use router::footprint_router;
pub use service::{
    CommunityOverview, FootprintOverview, FootprintService, FootprintServiceError,
    RECENT_RECORD_LIMIT,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Score plus recommendations for a single input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    pub total_footprint: f64,
    pub categories: BTreeMap<CategoryKey, f64>,
    pub recommendations: Vec<String>,
}

impl FootprintResult {
    pub fn new(score: FootprintScore, recommendations: Vec<String>) -> Self {
        Self {
            total_footprint: score.total_footprint,
            categories: score.categories,
            recommendations,
        }
    }

    pub fn level(&self) -> FootprintLevel {
        FootprintLevel::for_total(self.total_footprint)
    }
}

/// Compute and recommend from the same input under the standard thresholds.
pub fn assess(input: &FootprintInput) -> FootprintResult {
    FootprintResult::new(compute(input), recommend(input))
}
