use super::category::{CategoryKey, FieldKey};
use super::error::FootprintError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire shape of an input: category name -> field name -> value.
type RawFootprintInput = BTreeMap<String, BTreeMap<String, f64>>;

/// Raw lifestyle values supplied by the caller for one calculation.
///
/// Fields that are not present count as zero. Values are kept as supplied; bounds are
/// applied when the input is scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFootprintInput", into = "RawFootprintInput")]
pub struct FootprintInput {
    values: BTreeMap<FieldKey, f64>,
}

impl FootprintInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FieldKey, value: f64) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldKey, value: f64) {
        self.values.insert(field, value);
    }

    /// Insert a value addressed by category and field name.
    pub fn insert(
        &mut self,
        category: &str,
        field: &str,
        value: f64,
    ) -> Result<(), FootprintError> {
        let category: CategoryKey = category.parse()?;
        let field = FieldKey::parse(category, field)?;
        self.set(field, value);
        Ok(())
    }

    pub fn get(&self, field: FieldKey) -> Option<f64> {
        self.values.get(&field).copied()
    }

    /// Supplied value, or zero when the field was left out.
    pub fn value(&self, field: FieldKey) -> f64 {
        self.get(field).unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Strict validation for callers that prefer rejecting to clamping.
    pub fn check_bounds(&self) -> Result<(), FootprintError> {
        for (field, value) in &self.values {
            let spec = field.spec();
            if !spec.contains(*value) {
                return Err(FootprintError::OutOfRange {
                    category: field.category(),
                    field: *field,
                    value: *value,
                    max: spec.max,
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<RawFootprintInput> for FootprintInput {
    type Error = FootprintError;

    fn try_from(raw: RawFootprintInput) -> Result<Self, Self::Error> {
        let mut input = FootprintInput::new();
        for (category, fields) in raw {
            for (field, value) in fields {
                input.insert(&category, &field, value)?;
            }
        }
        Ok(input)
    }
}

impl From<FootprintInput> for RawFootprintInput {
    fn from(input: FootprintInput) -> Self {
        let mut raw = RawFootprintInput::new();
        for (field, value) in input.values {
            raw.entry(field.category().as_str().to_string())
                .or_default()
                .insert(field.as_str().to_string(), value);
        }
        raw
    }
}
