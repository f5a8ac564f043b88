use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::footprint::{
    build_at, footprint_router, CategoryKey, FieldKey, FootprintInput, FootprintRecord,
    FootprintRepository, FootprintResult, FootprintService, RecommendationThresholds,
    RepositoryError, UserId,
};

/// Transport 100 km, 300 kWh, three meat meals and top recycling.
pub(super) fn reference_input() -> FootprintInput {
    FootprintInput::new()
        .with(FieldKey::CarKm, 100.0)
        .with(FieldKey::Electricity, 300.0)
        .with(FieldKey::Meat, 3.0)
        .with(FieldKey::Dairy, 0.0)
        .with(FieldKey::Vegetables, 0.0)
        .with(FieldKey::Shopping, 0.0)
        .with(FieldKey::Waste, 0.0)
        .with(FieldKey::Recycling, 5.0)
}

pub(super) fn heavy_input() -> FootprintInput {
    FootprintInput::new()
        .with(FieldKey::CarKm, 250.0)
        .with(FieldKey::Electricity, 420.0)
        .with(FieldKey::Meat, 10.0)
        .with(FieldKey::Recycling, 1.0)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn result_with(total: f64, categories: &[(CategoryKey, f64)]) -> FootprintResult {
    FootprintResult {
        total_footprint: total,
        categories: categories.iter().copied().collect::<BTreeMap<_, _>>(),
        recommendations: vec!["keep going".to_string()],
    }
}

pub(super) fn record_at(owner: &str, date: DateTime<Utc>, total: f64) -> FootprintRecord {
    build_at(
        owner,
        &FootprintInput::new(),
        result_with(total, &[(CategoryKey::Transport, total)]),
        date,
    )
    .expect("owner present")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<FootprintRecord>>>,
}

impl MemoryRepository {
    pub(super) fn seeded(records: Vec<FootprintRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }
}

impl FootprintRepository for MemoryRepository {
    fn insert(&self, record: FootprintRecord) -> Result<FootprintRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn list_for_owner(&self, owner: &UserId) -> Result<Vec<FootprintRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard
            .iter()
            .filter(|record| &record.user_id == owner)
            .cloned()
            .collect())
    }

    fn list_all(&self) -> Result<Vec<FootprintRecord>, RepositoryError> {
        Ok(self.records.lock().expect("lock").clone())
    }
}

pub(super) struct UnavailableRepository;

impl FootprintRepository for UnavailableRepository {
    fn insert(&self, _record: FootprintRecord) -> Result<FootprintRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("disk offline".to_string()))
    }

    fn list_for_owner(&self, _owner: &UserId) -> Result<Vec<FootprintRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("disk offline".to_string()))
    }

    fn list_all(&self) -> Result<Vec<FootprintRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("disk offline".to_string()))
    }
}

pub(super) struct ConflictRepository;

impl FootprintRepository for ConflictRepository {
    fn insert(&self, _record: FootprintRecord) -> Result<FootprintRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn list_for_owner(&self, _owner: &UserId) -> Result<Vec<FootprintRecord>, RepositoryError> {
        Ok(Vec::new())
    }

    fn list_all(&self) -> Result<Vec<FootprintRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) fn build_service() -> (FootprintService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = FootprintService::new(
        Arc::new(repository.clone()),
        RecommendationThresholds::standard(),
    );
    (service, repository)
}

pub(super) fn router_with_service(service: FootprintService<MemoryRepository>) -> axum::Router {
    footprint_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
