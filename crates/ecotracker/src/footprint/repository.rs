use super::record::{FootprintRecord, UserId};

/// Append-only storage for footprint records.
///
/// Implementations return records in creation order.
pub trait FootprintRepository: Send + Sync {
    fn insert(&self, record: FootprintRecord) -> Result<FootprintRecord, RepositoryError>;
    fn list_for_owner(&self, owner: &UserId) -> Result<Vec<FootprintRecord>, RepositoryError>;
    fn list_all(&self) -> Result<Vec<FootprintRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
