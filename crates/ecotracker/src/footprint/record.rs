use super::category::CategoryKey;
use super::error::FootprintError;
use super::input::FootprintInput;
use super::level::FootprintLevel;
use super::FootprintResult;
use crate::analytics::Period;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Identifier wrapper for persisted footprint records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-asserted owner reference. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn parse(raw: &str) -> Result<Self, FootprintError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FootprintError::MissingOwner);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = FootprintError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<UserId> for String {
    fn from(user_id: UserId) -> Self {
        user_id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One immutable, timestamped, owner-attributed computation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintRecord {
    pub id: RecordId,
    pub user_id: UserId,
    pub date: DateTime<Utc>,
    pub total_footprint: f64,
    pub categories: BTreeMap<CategoryKey, f64>,
    pub recommendations: Vec<String>,
}

impl FootprintRecord {
    /// Calendar month the record was created in.
    pub fn period(&self) -> Period {
        Period::of(&self.date)
    }

    pub fn level(&self) -> FootprintLevel {
        FootprintLevel::for_total(self.total_footprint)
    }
}

fn next_record_id() -> RecordId {
    RecordId(Uuid::new_v4().to_string())
}

/// Wrap a result into a record owned by `user_id`, stamped with the current time.
pub fn build(
    user_id: &str,
    input: &FootprintInput,
    result: FootprintResult,
) -> Result<FootprintRecord, FootprintError> {
    build_at(user_id, input, result, Utc::now())
}

/// Same as [`build`] with an explicit creation time.
pub fn build_at(
    user_id: &str,
    input: &FootprintInput,
    result: FootprintResult,
    date: DateTime<Utc>,
) -> Result<FootprintRecord, FootprintError> {
    let user_id = UserId::parse(user_id)?;
    let id = next_record_id();

    debug!(
        record_id = %id,
        owner = %user_id,
        supplied_fields = input.len(),
        total = result.total_footprint,
        "built footprint record"
    );

    let FootprintResult {
        total_footprint,
        categories,
        recommendations,
    } = result;

    Ok(FootprintRecord {
        id,
        user_id,
        date,
        total_footprint,
        categories,
        recommendations,
    })
}
