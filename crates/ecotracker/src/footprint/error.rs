use super::category::{CategoryKey, FieldKey};

/// Failures raised by the footprint model, calculator and record builder.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FootprintError {
    #[error("unknown footprint category '{0}'")]
    UnknownCategory(String),
    #[error("unknown field '{field}' for category {category}")]
    UnknownField { category: CategoryKey, field: String },
    #[error("{category}.{field} value {value} outside accepted range 0..={max}")]
    OutOfRange {
        category: CategoryKey,
        field: FieldKey,
        value: f64,
        max: f64,
    },
    #[error("footprint record requires an owner")]
    MissingOwner,
}
