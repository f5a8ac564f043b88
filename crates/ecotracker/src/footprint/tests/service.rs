use super::common::*;
use crate::footprint::{
    FootprintError, FootprintRepository, FootprintService, FootprintServiceError,
    RecommendationThresholds, RepositoryError, UserId, RECENT_RECORD_LIMIT,
};
use crate::analytics::Standing;
use std::sync::Arc;

#[test]
fn submit_persists_assessed_record() {
    let (service, repository) = build_service();

    let record = service
        .submit("ana", &reference_input())
        .expect("submission succeeds");

    assert_close(record.total_footprint, 179.0);
    let stored = repository
        .list_for_owner(&UserId::parse("ana").expect("valid owner"))
        .expect("list succeeds");
    assert_eq!(stored, vec![record]);
}

#[test]
fn submit_requires_owner() {
    let (service, repository) = build_service();

    match service.submit(" ", &reference_input()) {
        Err(FootprintServiceError::Footprint(FootprintError::MissingOwner)) => {}
        other => panic!("expected missing owner, got {other:?}"),
    }
    assert!(repository.list_all().expect("list succeeds").is_empty());
}

#[test]
fn submit_propagates_repository_errors() {
    let service = FootprintService::new(
        Arc::new(UnavailableRepository),
        RecommendationThresholds::standard(),
    );

    match service.submit("ana", &reference_input()) {
        Err(FootprintServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "disk offline")
        }
        other => panic!("expected unavailable repository, got {other:?}"),
    }
}

#[test]
fn history_is_scoped_to_owner() {
    let (service, _) = build_service();
    service.submit("ana", &reference_input()).expect("stored");
    service.submit("bruno", &heavy_input()).expect("stored");
    service.submit("ana", &heavy_input()).expect("stored");

    let history = service.history("ana").expect("history loads");
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|record| record.user_id.as_str() == "ana"));
}

#[test]
fn recent_returns_newest_first() {
    let repository = MemoryRepository::seeded(vec![
        record_at("ana", at(2025, 1, 5), 10.0),
        record_at("ana", at(2025, 2, 5), 20.0),
        record_at("ana", at(2025, 3, 5), 30.0),
        record_at("ana", at(2025, 4, 5), 40.0),
    ]);
    let service = FootprintService::new(
        Arc::new(repository),
        RecommendationThresholds::standard(),
    );

    let recent = service
        .recent("ana", RECENT_RECORD_LIMIT)
        .expect("recent loads");
    let totals: Vec<f64> = recent.iter().map(|record| record.total_footprint).collect();
    assert_eq!(totals, vec![40.0, 30.0, 20.0]);
}

#[test]
fn overview_combines_stats_summary_and_recent() {
    let repository = MemoryRepository::seeded(vec![
        record_at("ana", at(2025, 5, 1), 10.0),
        record_at("ana", at(2025, 5, 20), 15.0),
        record_at("bruno", at(2025, 5, 2), 100.0),
    ]);
    let service = FootprintService::new(
        Arc::new(repository),
        RecommendationThresholds::standard(),
    );

    let overview = service.overview("ana").expect("overview loads");
    assert_eq!(overview.stats.record_count, 2);
    assert_close(overview.stats.total_footprint, 25.0);
    assert_close(overview.stats.average_footprint, 12.5);
    assert_eq!(overview.summary.monthly_totals.len(), 1);
    assert_eq!(overview.recent.len(), 2);
    assert_eq!(overview.recent[0].total_footprint, 15.0);
}

#[test]
fn community_and_comparison_use_every_owner() {
    let repository = MemoryRepository::seeded(vec![
        record_at("ana", at(2025, 5, 1), 10.0),
        record_at("bruno", at(2025, 5, 2), 50.0),
        record_at("bruno", at(2025, 6, 2), 60.0),
    ]);
    let service = FootprintService::new(
        Arc::new(repository),
        RecommendationThresholds::standard(),
    );

    let community = service.community().expect("community loads");
    assert_eq!(community.stats.record_count, 3);
    assert_close(community.stats.average_footprint, 40.0);
    assert_eq!(community.summary.monthly_totals.len(), 2);

    let comparison = service.comparison("ana").expect("comparison loads");
    assert_eq!(comparison.standing, Standing::BelowAverage);
    assert_close(comparison.difference, 30.0);

    let comparison = service.comparison("bruno").expect("comparison loads");
    assert_eq!(comparison.standing, Standing::AboveAverage);
}

#[test]
fn service_uses_configured_thresholds() {
    let service = FootprintService::new(
        Arc::new(MemoryRepository::default()),
        RecommendationThresholds {
            electricity_kwh_per_month: 200.0,
            ..RecommendationThresholds::standard()
        },
    );

    let result = service.assess(&reference_input());
    assert_eq!(result.recommendations.len(), 1);
    assert!(result.recommendations[0].contains("energy"));
}
