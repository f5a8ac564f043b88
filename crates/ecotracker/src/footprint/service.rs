use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::calculator::compute;
use super::error::FootprintError;
use super::input::FootprintInput;
use super::recommendations::{RecommendationEngine, RecommendationThresholds};
use super::record::{build, FootprintRecord, UserId};
use super::repository::{FootprintRepository, RepositoryError};
use super::FootprintResult;
use crate::analytics::{aggregate, AggregationSummary, CommunityComparison, FootprintStats};

/// Number of records surfaced as "recent calculations" on the dashboard.
pub const RECENT_RECORD_LIMIT: usize = 3;

/// Service composing the calculator, recommendation rules, record builder and repository.
pub struct FootprintService<R> {
    repository: Arc<R>,
    recommendations: Arc<RecommendationEngine>,
}

/// Per-owner dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct FootprintOverview {
    pub stats: FootprintStats,
    pub summary: AggregationSummary,
    pub recent: Vec<FootprintRecord>,
}

/// Community-wide analytics payload.
#[derive(Debug, Clone, Serialize)]
pub struct CommunityOverview {
    pub stats: FootprintStats,
    pub summary: AggregationSummary,
}

impl<R> FootprintService<R>
where
    R: FootprintRepository + 'static,
{
    pub fn new(repository: Arc<R>, thresholds: RecommendationThresholds) -> Self {
        Self {
            repository,
            recommendations: Arc::new(RecommendationEngine::new(&thresholds)),
        }
    }

    /// Score an input without persisting anything.
    pub fn assess(&self, input: &FootprintInput) -> FootprintResult {
        FootprintResult::new(compute(input), self.recommendations.recommend(input))
    }

    /// Assess, build and persist a record for `owner`.
    pub fn submit(
        &self,
        owner: &str,
        input: &FootprintInput,
    ) -> Result<FootprintRecord, FootprintServiceError> {
        let result = self.assess(input);
        let record = build(owner, input, result)?;
        let stored = self.repository.insert(record)?;

        info!(
            record_id = %stored.id,
            owner = %stored.user_id,
            total = stored.total_footprint,
            "footprint record stored"
        );

        Ok(stored)
    }

    /// All records for `owner` in creation order.
    pub fn history(&self, owner: &str) -> Result<Vec<FootprintRecord>, FootprintServiceError> {
        let owner = UserId::parse(owner)?;
        Ok(self.repository.list_for_owner(&owner)?)
    }

    /// The `limit` most recent records for `owner`, newest first.
    pub fn recent(
        &self,
        owner: &str,
        limit: usize,
    ) -> Result<Vec<FootprintRecord>, FootprintServiceError> {
        let history = self.history(owner)?;
        Ok(newest_first(history, limit))
    }

    pub fn overview(&self, owner: &str) -> Result<FootprintOverview, FootprintServiceError> {
        let history = self.history(owner)?;
        let stats = FootprintStats::from_records(&history);
        let summary = aggregate(&history);
        let recent = newest_first(history, RECENT_RECORD_LIMIT);

        Ok(FootprintOverview {
            stats,
            summary,
            recent,
        })
    }

    pub fn community(&self) -> Result<CommunityOverview, FootprintServiceError> {
        let records = self.repository.list_all()?;
        Ok(CommunityOverview {
            stats: FootprintStats::from_records(&records),
            summary: aggregate(&records),
        })
    }

    pub fn comparison(&self, owner: &str) -> Result<CommunityComparison, FootprintServiceError> {
        let history = self.history(owner)?;
        let community = self.repository.list_all()?;
        Ok(CommunityComparison::between(
            &FootprintStats::from_records(&history),
            &FootprintStats::from_records(&community),
        ))
    }
}

fn newest_first(mut records: Vec<FootprintRecord>, limit: usize) -> Vec<FootprintRecord> {
    records.reverse();
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records.truncate(limit);
    records
}

/// Error raised by the footprint service.
#[derive(Debug, thiserror::Error)]
pub enum FootprintServiceError {
    #[error(transparent)]
    Footprint(#[from] FootprintError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
