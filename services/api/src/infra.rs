use ecotracker::feedback::{FeedbackEntry, FeedbackRepository};
use ecotracker::footprint::{FootprintRecord, FootprintRepository, RepositoryError, UserId};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local record store. Records are kept in insertion order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryFootprintRepository {
    records: Arc<Mutex<Vec<FootprintRecord>>>,
}

impl FootprintRepository for InMemoryFootprintRepository {
    fn insert(&self, record: FootprintRecord) -> Result<FootprintRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn list_for_owner(&self, owner: &UserId) -> Result<Vec<FootprintRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.user_id == owner)
            .cloned()
            .collect())
    }

    fn list_all(&self) -> Result<Vec<FootprintRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryFeedbackRepository {
    entries: Arc<Mutex<Vec<FeedbackEntry>>>,
}

impl FeedbackRepository for InMemoryFeedbackRepository {
    fn insert(&self, entry: FeedbackEntry) -> Result<FeedbackEntry, RepositoryError> {
        let mut guard = self.entries.lock().expect("feedback mutex poisoned");
        if guard.iter().any(|existing| existing.id == entry.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(entry.clone());
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<FeedbackEntry>, RepositoryError> {
        let guard = self.entries.lock().expect("feedback mutex poisoned");
        Ok(guard.clone())
    }
}
